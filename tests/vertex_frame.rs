use trackgate::{Estimate, Estimator, EstimatorConfig, Frame, Point3, TrajectoryPrediction};

/// Windows skewed so that the sign convention of each frame is observable.
fn skewed_config() -> EstimatorConfig {
    EstimatorConfig {
        r_min: -1.0,
        r_max: 5.0,
        r_min_inner: -2.0,
        r_max_inner: 2.0,
        phi_min: -0.02,
        phi_max: 0.1,
    }
}

#[test]
fn vertex_frame_measures_hit_minus_prediction() {
    let est = Estimator::new(skewed_config());
    let pred = TrajectoryPrediction::new(Point3::new(50.0, 0.0, 0.0));
    let hit = Point3::new(53.0, 0.0, 10.0);
    let origin = Point3::default();

    // Surface frame: 50 - 53 = -3, below r_min.
    assert_eq!(est.estimate(&pred, hit), Estimate::REJECTED);
    // Vertex frame: 53 - 50 = +3, inside (-1, 5).
    assert_eq!(
        est.estimate_from_vertex(origin, &pred, hit),
        Estimate::ACCEPTED
    );
}

#[test]
fn vertex_frame_flips_azimuth_sign() {
    let est = Estimator::new(skewed_config());
    let pred = TrajectoryPrediction::new(Point3::from_cylindrical(50.0, 0.0, 0.0));
    let hit = Point3::from_cylindrical(50.5, 0.05, 10.0);
    let origin = Point3::default();

    // prediction - hit = -0.05, outside (-0.02, 0.1).
    assert!(!est.estimate(&pred, hit).accepted);
    // hit - prediction = +0.05, inside.
    assert!(est.estimate_from_vertex(origin, &pred, hit).accepted);
}

#[test]
fn band_is_evaluated_on_vertex_relative_z() {
    let est = Estimator::new(skewed_config());
    let pred = TrajectoryPrediction::new(Point3::new(50.0, 0.0, 0.0));
    let hit = Point3::new(53.0, 0.0, 30.0);

    // Relative z of 30 keeps the outer window.
    assert!(est
        .estimate_from_vertex(Point3::default(), &pred, hit)
        .accepted);
    // A vertex at z = -50 puts the hit at relative z = 80, inside the band,
    // where +3 exceeds the inner window.
    assert_eq!(
        est.estimate_from_vertex(Point3::new(0.0, 0.0, -50.0), &pred, hit),
        Estimate::REJECTED
    );
}

#[test]
fn transverse_vertex_offset_changes_geometry() {
    let est = Estimator::new(skewed_config());
    let pred = TrajectoryPrediction::new(Point3::new(10.0, 0.0, 0.0));
    let hit = Point3::new(0.0, 10.0, 10.0);

    // Seen from the beam line the two points are a quarter turn apart.
    assert!(!est.estimate_from_vertex(Point3::default(), &pred, hit).accepted);

    // Seen from a vertex far along the diagonal they are almost aligned.
    let vertex = Point3::new(-1000.0, -1000.0, 0.0);
    assert!(est.estimate_from_vertex(vertex, &pred, hit).accepted);
}

#[test]
fn frame_tag_selects_operation() {
    let est = Estimator::new(skewed_config());
    let pred = TrajectoryPrediction::new(Point3::new(50.0, 0.0, 0.0));
    let hit = Point3::new(53.0, 0.0, 10.0);

    assert!(!est.estimate_in(Frame::Surface, &pred, hit).accepted);
    assert!(
        est.estimate_in(Frame::Vertex(Point3::default()), &pred, hit)
            .accepted
    );
}
