use trackgate::{
    Estimate, Estimator, EstimatorConfig, LocalPoint, PlanarHit, Point3, SurfaceFrame,
    TrajectoryPrediction,
};

fn two_region_config() -> EstimatorConfig {
    EstimatorConfig {
        r_min: -5.0,
        r_max: 5.0,
        r_min_inner: -2.0,
        r_max_inner: 2.0,
        phi_min: -0.1,
        phi_max: 0.1,
    }
}

fn prediction_at(r: f32, phi: f32) -> TrajectoryPrediction {
    TrajectoryPrediction::new(Point3::from_cylindrical(r, phi, 0.0))
}

#[test]
fn outer_window_accepts_small_radial_mismatch() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 0.0);
    let hit = Point3::new(53.0, 0.0, 10.0);

    let out = est.estimate(&pred, hit);
    assert!(out.accepted);
    assert_eq!(out.score, 1.0);
}

#[test]
fn inner_band_switches_to_narrower_window() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 0.0);
    let hit = Point3::new(53.0, 0.0, 100.0);

    assert_eq!(est.estimate(&pred, hit), Estimate::REJECTED);
}

#[test]
fn band_edges_select_outer_window() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 0.0);

    for z in [70.0f32, 170.0, -70.0, -170.0] {
        let out = est.estimate(&pred, Point3::new(53.0, 0.0, z));
        assert_eq!(out, Estimate::ACCEPTED, "z = {z}");
    }
    for z in [70.0001f32, 169.9999, -70.0001, -169.9999] {
        let out = est.estimate(&pred, Point3::new(53.0, 0.0, z));
        assert_eq!(out, Estimate::REJECTED, "z = {z}");
    }
}

#[test]
fn azimuth_mismatch_wraps_across_seam() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 3.13);
    let hit = Point3::from_cylindrical(50.0, -3.13, 10.0);

    assert_eq!(est.estimate(&pred, hit), Estimate::ACCEPTED);
}

#[test]
fn azimuth_window_is_signed_and_asymmetric() {
    let est = Estimator::new(EstimatorConfig {
        phi_min: -0.02,
        phi_max: 0.1,
        ..two_region_config()
    });

    // prediction - hit = +0.05
    let pred = prediction_at(50.0, 0.05);
    let hit = Point3::from_cylindrical(50.0, 0.0, 10.0);
    assert!(est.estimate(&pred, hit).accepted);

    // prediction - hit = -0.05
    let pred = prediction_at(50.0, 0.0);
    let hit = Point3::from_cylindrical(50.0, 0.05, 10.0);
    assert!(!est.estimate(&pred, hit).accepted);
}

#[test]
fn radial_rejection_wins_over_matching_azimuth() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 0.4);
    let hit = Point3::from_cylindrical(60.0, 0.4, 10.0);

    assert_eq!(est.estimate(&pred, hit), Estimate::REJECTED);
}

#[test]
fn planar_hit_is_resolved_through_its_surface() {
    let est = Estimator::new(two_region_config());
    let pred = prediction_at(50.0, 0.0);
    let frame = SurfaceFrame::transverse(10.0);

    let near = PlanarHit::new(LocalPoint::new(53.0, 0.0), frame);
    assert_eq!(est.estimate_hit(&pred, &near), Estimate::ACCEPTED);
    assert_eq!(
        est.estimate_hit(&pred, &near),
        est.estimate(&pred, Point3::new(53.0, 0.0, 10.0))
    );

    let inside_band = PlanarHit::new(LocalPoint::new(53.0, 0.0), SurfaceFrame::transverse(100.0));
    assert_eq!(est.estimate_hit(&pred, &inside_band), Estimate::REJECTED);
}

#[test]
fn try_new_rejects_inverted_window() {
    let cfg = EstimatorConfig {
        r_min: 1.0,
        r_max: -1.0,
        ..two_region_config()
    };
    assert!(Estimator::try_new(cfg).is_err());
    assert!(Estimator::try_new(two_region_config()).is_ok());
    assert_eq!(Estimator::new(cfg).config(), &cfg);
}
