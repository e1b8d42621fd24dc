//! Config module.
//! Run configuration: output directory, systems, centrality bins and the per-system table.
//! Uses serde for JSON; every field falls back to the built-in values, so a config file
//! only needs to name what it changes.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::centrality::{CentralityBin, DEFAULT_CENTRALITIES};
use crate::systems::{System, SystemTable};

pub const DEFAULT_OUTPUT_DIR: &str = "new_inputs";

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub systems: Vec<System>,
    pub centralities: Vec<String>,
    pub table: SystemTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            systems: System::ALL.to_vec(),
            centralities: DEFAULT_CENTRALITIES.iter().map(|c| c.to_string()).collect(),
            table: SystemTable::default(),
        }
    }
}

/// On-disk shape. `table` entries are merged over the defaults rather than replacing them.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_dir: Option<PathBuf>,
    systems: Option<Vec<System>>,
    centralities: Option<Vec<String>>,
    table: Option<SystemTable>,
}

impl GeneratorConfig {
    /// Parses a JSON config and overlays it on the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(json).context("Invalid config JSON")?;
        let mut config = GeneratorConfig::default();
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        if let Some(systems) = file.systems {
            config.systems = systems;
        }
        if let Some(centralities) = file.centralities {
            config.centralities = centralities;
        }
        if let Some(table) = file.table {
            config.table.merge(table);
        }
        Ok(config)
    }

    /// Checks everything a run depends on, so nothing is written for a bad config.
    /// Returns the parsed bins in configured order.
    pub fn validate(&self) -> Result<Vec<CentralityBin>> {
        if self.systems.is_empty() {
            bail!("No collision systems configured");
        }
        let mut seen = HashSet::new();
        for &sys in &self.systems {
            if !seen.insert(sys) {
                bail!("System {} listed twice", sys);
            }
            self.table.get(sys)?;
        }

        if self.centralities.is_empty() {
            bail!("No centrality bins configured");
        }
        let mut tokens = HashSet::new();
        let mut bins = Vec::with_capacity(self.centralities.len());
        for token in &self.centralities {
            if !tokens.insert(token.as_str()) {
                bail!("Centrality bin {} listed twice", token);
            }
            bins.push(token.parse::<CentralityBin>()?);
        }
        Ok(bins)
    }
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    GeneratorConfig::from_json(&json)
        .with_context(|| format!("Failed to load config: {}", path.display()))
}
