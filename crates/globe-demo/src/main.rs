//! Generates the configured cube-sphere and reports its topology.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p globe-demo -- --divs 64` to build a 64-division sphere.

use std::process::ExitCode;

use clap::Parser;
use globe_config::{CliArgs, Config, MeshConfig};
use globe_cubesphere::{CubesphereError, CubesphereMesh, MeshCache, TopologyDefect, validate};
use tracing::{error, info, warn};

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("mesh generation failed: {0}")]
    Generate(#[from] CubesphereError),
    #[error("mesh defect: {0}")]
    Defect(#[from] TopologyDefect),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("globe")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    globe_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut cache = MeshCache::new();
    match run(&mut cache, &config.mesh) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cache: &mut MeshCache, mesh_config: &MeshConfig) -> Result<(), RunError> {
    let divs = mesh_config.clamped_divs();
    if divs != mesh_config.divs {
        warn!(
            requested = mesh_config.divs,
            divs, "subdivision level clamped to configured range"
        );
    }

    let mesh = cache.get_or_generate(divs)?;
    log_summary(mesh);

    if mesh_config.validate {
        let report = validate(mesh)?;
        info!(
            edges = report.edges,
            euler = report.euler_characteristic,
            max_radius_error = report.max_radius_error,
            "mesh is closed, manifold and outward-wound"
        );
    }

    Ok(())
}

fn log_summary(mesh: &CubesphereMesh) {
    info!(
        divs = mesh.divs(),
        vertices = mesh.vertex_count(),
        quads = mesh.quad_count(),
        triangles = mesh.triangle_count(),
        vertex_bytes = mesh.vertex_bytes().len(),
        index_bytes = mesh.index_bytes().len(),
        "generated cubesphere"
    );
}
