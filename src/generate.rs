//! Generator module.
//! Renders one parameter card per (system, centrality bin) and writes it under the output directory.
//! Config is validated before the directory is touched; after that the first I/O error aborts
//! the run and files already written stay on disk.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::centrality::CentralityBin;
use crate::config::GeneratorConfig;
use crate::systems::{System, SystemParams};
use crate::template::{PARAM_TEMPLATE, format_float, render};

/// Paths written by a run, in write order
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

/// Creates `dir` if absent. An existing directory is fine; anything else
/// (permissions, a regular file in the way) is an error.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        bail!("Output path {} exists and is not a directory", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

pub fn file_name(system: System, bin: &CentralityBin) -> String {
    format!("input_{}_{}.dat", system, bin.token())
}

pub fn render_card(system: System, params: &SystemParams, bin: &CentralityBin) -> Result<String> {
    render(
        PARAM_TEMPLATE,
        &[
            ("system_and_sqrts", system.to_string()),
            ("normalization", format_float(params.normalization)),
            ("cent_low", bin.low.to_string()),
            ("cent_high", bin.high.to_string()),
            ("freestream_time", format_float(params.freestream_time)),
            ("trento_args", params.trento_args.clone()),
        ],
    )
    .with_context(|| format!("Failed to render card for {} {}", system, bin))
}

/// Writes every card for `config`. Progress goes to stderr unless `quiet`.
pub fn generate(config: &GeneratorConfig, quiet: bool) -> Result<GenerationReport> {
    let start = Instant::now();
    let bins = config.validate().context("Invalid generator config")?;
    ensure_output_dir(&config.output_dir)?;

    let mut report = GenerationReport::default();
    for &system in &config.systems {
        let params = config.table.get(system)?;
        for bin in &bins {
            let content = render_card(system, params, bin)?;
            let path = config.output_dir.join(file_name(system, bin));
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                eprintln!("wrote {}", path.display());
            }
            report.written.push(path);
        }
    }

    if !quiet {
        eprintln!("Generation latency: {:?}", start.elapsed());
    }
    Ok(report)
}
