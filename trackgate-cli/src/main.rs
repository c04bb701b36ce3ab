use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use trackgate::{
    Estimator, EstimatorConfig, Frame, HitSearch, LocalError, LocalPoint, LocalWindow,
    MeasuredHit, PlanarHit, Point3, PointHit, Span, SurfaceFrame, SurfacePatch,
    TrajectoryPrediction, Vector3,
};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Track-hit compatibility search (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the search pipeline.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EstimatorConfigJson {
    r_min: f32,
    r_max: f32,
    r_min_inner: f32,
    r_max_inner: f32,
    phi_min: f32,
    phi_max: f32,
}

impl Default for EstimatorConfigJson {
    fn default() -> Self {
        let cfg = EstimatorConfig::default();
        Self {
            r_min: cfg.r_min,
            r_max: cfg.r_max,
            r_min_inner: cfg.r_min_inner,
            r_max_inner: cfg.r_max_inner,
            phi_min: cfg.phi_min,
            phi_max: cfg.phi_max,
        }
    }
}

impl From<EstimatorConfigJson> for EstimatorConfig {
    fn from(value: EstimatorConfigJson) -> Self {
        Self {
            r_min: value.r_min,
            r_max: value.r_max,
            r_min_inner: value.r_min_inner,
            r_max_inner: value.r_max_inner,
            phi_min: value.phi_min,
            phi_max: value.phi_max,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocalErrorJson {
    xx: f32,
    yy: f32,
}

#[derive(Debug, Deserialize)]
struct PredictionJson {
    position: [f32; 3],
    #[serde(default)]
    local_position: Option<[f32; 2]>,
    #[serde(default)]
    local_error: Option<LocalErrorJson>,
}

#[derive(Debug, Deserialize)]
struct RectangleJson {
    origin: [f32; 3],
    u: [f32; 3],
    v: [f32; 3],
    half_u: f32,
    half_v: f32,
}

#[derive(Debug, Deserialize)]
struct SurfaceJson {
    name: String,
    #[serde(default)]
    r_span: Option<[f32; 2]>,
    #[serde(default)]
    phi_span: Option<[f32; 2]>,
    #[serde(default)]
    rectangle: Option<RectangleJson>,
}

#[derive(Debug, Deserialize)]
struct HitJson {
    surface: usize,
    local: [f32; 2],
    #[serde(default)]
    global: Option<[f32; 3]>,
}

#[derive(Debug, Deserialize)]
struct Config {
    #[serde(default)]
    estimator: EstimatorConfigJson,
    prediction: PredictionJson,
    #[serde(default)]
    vertex: Option<[f32; 3]>,
    #[serde(default)]
    parallel: bool,
    surfaces: Vec<SurfaceJson>,
    #[serde(default)]
    hits: Vec<HitJson>,
    #[serde(default)]
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct BoundedJson {
    dx: f32,
    dy: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum WindowRecord {
    Bounded(BoundedJson),
    Unbounded,
}

impl From<LocalWindow> for WindowRecord {
    fn from(value: LocalWindow) -> Self {
        match value {
            LocalWindow::Bounded { dx, dy } => WindowRecord::Bounded(BoundedJson { dx, dy }),
            LocalWindow::Unbounded => WindowRecord::Unbounded,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    hit: usize,
    score: f64,
}

#[derive(Debug, Serialize)]
struct SurfaceRecord {
    name: String,
    compatible: bool,
    window: Option<WindowRecord>,
    examined: usize,
    matches: Vec<MatchRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    surfaces: Vec<SurfaceRecord>,
}

fn point([x, y, z]: [f32; 3]) -> Point3 {
    Point3::new(x, y, z)
}

fn vector([x, y, z]: [f32; 3]) -> Vector3 {
    Vector3::new(x, y, z)
}

fn local([x, y]: [f32; 2]) -> LocalPoint {
    LocalPoint::new(x, y)
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn build_prediction(json: &PredictionJson) -> CliResult<TrajectoryPrediction> {
    let mut prediction = TrajectoryPrediction::new(point(json.position));
    if let Some(position) = json.local_position {
        prediction = prediction.with_local_position(local(position));
    }
    if let Some(error) = &json.local_error {
        prediction = prediction.with_local_error(LocalError::try_new(error.xx, error.yy)?);
    }
    Ok(prediction)
}

fn build_surface(json: &SurfaceJson) -> CliResult<SurfacePatch> {
    if let Some(rect) = &json.rectangle {
        let frame = SurfaceFrame::new(point(rect.origin), vector(rect.u), vector(rect.v));
        return Ok(SurfacePatch::from_rectangle(frame, rect.half_u, rect.half_v)?);
    }
    match (json.r_span, json.phi_span) {
        (Some([r_lo, r_hi]), Some([phi_lo, phi_hi])) => Ok(SurfacePatch::new(
            Span::new(r_lo, r_hi)?,
            // Azimuthal spans may cross the seam, so hi < lo is allowed.
            Span::new_unchecked(phi_lo, phi_hi),
        )),
        _ => Err(format!(
            "surface '{}' needs either a rectangle or both r_span and phi_span",
            json.name
        )
        .into()),
    }
}

fn build_hit(json: &HitJson, surface: &SurfacePatch) -> CliResult<PointHit> {
    let local = local(json.local);
    let global = match (json.global, surface.frame) {
        (Some(global), _) => point(global),
        (None, Some(frame)) => PlanarHit::new(local, frame).global_position(),
        (None, None) => {
            return Err(format!(
                "hit on surface {} has no global position and the surface has no frame",
                json.surface
            )
            .into())
        }
    };
    Ok(PointHit::new(local, global))
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    if cli.trace {
        let filter = EnvFilter::from_default_env().add_directive("trackgate=debug".parse()?);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.surfaces.is_empty() {
        return Err("at least one surface must be configured".into());
    }

    let estimator = Estimator::try_new(config.estimator.into())?;
    let prediction = build_prediction(&config.prediction)?;
    let frame = match config.vertex {
        Some(vertex) => Frame::Vertex(point(vertex)),
        None => Frame::Surface,
    };
    let surfaces = config
        .surfaces
        .iter()
        .map(build_surface)
        .collect::<Result<Vec<_>, _>>()?;

    // Hits grouped per surface, remembering their position in the config.
    let mut per_surface: Vec<(Vec<usize>, Vec<PointHit>)> =
        vec![(Vec::new(), Vec::new()); surfaces.len()];
    for (index, hit) in config.hits.iter().enumerate() {
        let surface = surfaces.get(hit.surface).ok_or_else(|| {
            format!(
                "hit {index} refers to surface {} but only {} are configured",
                hit.surface,
                surfaces.len()
            )
        })?;
        let (indices, hits) = &mut per_surface[hit.surface];
        indices.push(index);
        hits.push(build_hit(hit, surface)?);
    }

    let search = HitSearch::new(&estimator, &prediction)
        .with_frame(frame)
        .with_parallel(config.parallel);

    let mut records = Vec::with_capacity(surfaces.len());
    for ((surface, json), (indices, hits)) in surfaces
        .iter()
        .zip(config.surfaces.iter())
        .zip(per_surface.iter())
    {
        let record = match search.run(surface, hits) {
            Some(outcome) => {
                tracing::info!(
                    surface = %json.name,
                    examined = outcome.examined,
                    accepted = outcome.matches.len(),
                    "surface searched"
                );
                SurfaceRecord {
                    name: json.name.clone(),
                    compatible: true,
                    window: Some(outcome.window.into()),
                    examined: outcome.examined,
                    matches: outcome
                        .matches
                        .iter()
                        .map(|m| MatchRecord {
                            hit: indices[m.index],
                            score: m.estimate.score,
                        })
                        .collect(),
                }
            }
            None => {
                tracing::info!(surface = %json.name, "surface excluded by prefilter");
                SurfaceRecord {
                    name: json.name.clone(),
                    compatible: false,
                    window: None,
                    examined: 0,
                    matches: Vec::new(),
                }
            }
        };
        records.push(record);
    }

    let output = Output { surfaces: records };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
