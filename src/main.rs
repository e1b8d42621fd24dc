mod centrality;
mod config;
mod generate;
mod systems;
mod template;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

use crate::config::{GeneratorConfig, load_config};

fn main() -> Result<()> {
    // Parse CLI arguments
    let matches = Command::new("param-cards")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes hydro/trento parameter cards for every collision system and centrality bin")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("JSON file overriding systems, centrality bins or per-system constants")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .help("Directory the cards are written to (default: new_inputs)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only print the summary line")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("output-dir") {
        config.output_dir = dir.clone();
    }
    let quiet = matches.get_flag("quiet");

    if !quiet {
        println!(
            "Generating {} systems x {} centrality bins into {}",
            config.systems.len(),
            config.centralities.len(),
            config.output_dir.display()
        );
    }

    let report = generate::generate(&config, quiet)
        .with_context(|| format!("Card generation into {} failed", config.output_dir.display()))?;

    println!("Wrote {} parameter cards to {}", report.written.len(), config.output_dir.display());
    Ok(())
}
