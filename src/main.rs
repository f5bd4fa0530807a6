//! vanadis - build, slice, concatenate and re-space colormaps
//!
//! This is the main entry point for the vanadis command-line tool.

use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use vanadis::colormaps::{get_builtin, parse_palette, save_colorbar};
use vanadis::config::Job;
use vanadis::{
    init_tracing, log_colormap_stats, log_error, log_operation_end, log_operation_start,
    log_timed_operation, BreakpointTable, Colormap, ColormapError, Config, Result,
};

const BUILTIN_PREFIX: &str = "builtin:";

fn main() -> Result<()> {
    // Load configuration
    let (config, job) = Config::load()?;

    init_tracing(&config.log_level);
    info!("Starting vanadis v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let start = Instant::now();
    log_operation_start("build", Some(&job.inputs.join(" + ")));

    let result = run(&config, &job);
    log_operation_end("build", start, result.is_ok());

    result.map_err(|e| {
        log_error(&e, "build");
        e
    })
}

fn run(config: &Config, job: &Job) -> Result<()> {
    let mut inputs = job.inputs.iter();
    let first = inputs.next().ok_or_else(|| ColormapError::Config {
        message: "at least one input is required".to_string(),
    })?;

    let mut cmap = load_input(first, config)?;
    for input in inputs {
        let next = load_input(input, config)?;
        cmap = log_timed_operation("concat", || cmap.concat(&next))?;
    }

    if let Some(spec) = job.slice {
        cmap = cmap.slice(spec)?;
    }
    if job.uniform {
        cmap = cmap.set_uniform()?;
    }

    log_colormap_stats(
        cmap.name(),
        cmap.table().red().len(),
        cmap.resolution(),
        cmap.gamma(),
    );

    if let Some(path) = &job.dump {
        let json = serde_json::to_string_pretty(cmap.table())?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "Breakpoint table written");
    }

    if let Some(path) = &job.output {
        let lut = cmap.lookup_table()?;
        save_colorbar(&lut, path, config.render.width, config.render.height)?;
    }

    Ok(())
}

/// Resolve one input into a colormap carrying the configured parameters
fn load_input(input: &str, config: &Config) -> Result<Colormap> {
    let cmap = if let Some(name) = input.strip_prefix(BUILTIN_PREFIX) {
        Colormap::from_external(&get_builtin(name)?.into())?
    } else {
        let path = Path::new(input);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let content = std::fs::read_to_string(path)?;
            let table: BreakpointTable = serde_json::from_str(&content)?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.to_string());
            Colormap::new(name, table)?
        } else {
            parse_palette(path)?
        }
    };

    info!(
        input = input,
        colormap = cmap.name(),
        "Loaded colormap"
    );
    cmap.reparameterized(config.colormap.resolution, config.colormap.gamma)
}
