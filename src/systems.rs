//! Collision systems module.
//! Fixed set of collision systems and the per-system constants fed into each parameter card.
//! Normalization and free-streaming time are tuned per beam energy; trento args are passed through verbatim.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Collision system and beam energy (sqrt(s_NN) in GeV)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum System {
    AuAu200,
    PbPb2760,
    PbPb5020,
}

impl System {
    /// Iteration order for a default run
    pub const ALL: [System; 3] = [System::AuAu200, System::PbPb2760, System::PbPb5020];

    pub fn name(self) -> &'static str {
        match self {
            System::AuAu200 => "AuAu200",
            System::PbPb2760 => "PbPb2760",
            System::PbPb5020 => "PbPb5020",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for System {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        System::ALL
            .into_iter()
            .find(|sys| sys.name() == s)
            .ok_or_else(|| anyhow!("Unknown collision system '{}'", s))
    }
}

/// Constants substituted into a card for one system
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemParams {
    pub normalization: f64,
    pub freestream_time: f64,
    pub trento_args: String,
}

/// Lookup table keyed by system. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemTable(BTreeMap<System, SystemParams>);

impl SystemTable {
    pub fn new(entries: impl IntoIterator<Item = (System, SystemParams)>) -> Self {
        SystemTable(entries.into_iter().collect())
    }

    pub fn get(&self, system: System) -> Result<&SystemParams> {
        self.0
            .get(&system)
            .with_context(|| format!("No parameters defined for system {}", system))
    }

    /// Replaces entries for every system present in `other`
    pub fn merge(&mut self, other: SystemTable) {
        self.0.extend(other.0);
    }
}

impl Default for SystemTable {
    fn default() -> Self {
        SystemTable::new([
            (
                System::AuAu200,
                SystemParams {
                    normalization: 6.1,
                    freestream_time: 0.5,
                    trento_args: "Au Au -x 4.23 -p 0. -k 1.2 --ncoll".to_string(),
                },
            ),
            (
                System::PbPb2760,
                SystemParams {
                    normalization: 13.9,
                    freestream_time: 1.2,
                    trento_args: "Pb Pb -x 6.4 -p 0. -k 1.2 --ncoll".to_string(),
                },
            ),
            (
                System::PbPb5020,
                SystemParams {
                    normalization: 18.4,
                    freestream_time: 1.2,
                    trento_args: "Pb Pb -x 7.0 -p 0. -k 1.2 --ncoll".to_string(),
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_name_roundtrip() {
        for sys in System::ALL {
            assert_eq!(sys.to_string().parse::<System>().unwrap(), sys);
        }
        assert!("XeXe5440".parse::<System>().is_err());
    }

    #[test]
    fn test_default_table_covers_all_systems() {
        let table = SystemTable::default();
        for sys in System::ALL {
            assert!(table.get(sys).is_ok(), "missing {}", sys);
        }
    }

    #[test]
    fn test_pbpb2760_constants() {
        let table = SystemTable::default();
        let p = table.get(System::PbPb2760).unwrap();
        assert_eq!(p.normalization, 13.9);
        assert_eq!(p.freestream_time, 1.2);
        assert_eq!(p.trento_args, "Pb Pb -x 6.4 -p 0. -k 1.2 --ncoll");
    }

    #[test]
    fn test_missing_entry_is_error() {
        let table = SystemTable::new([]);
        let err = table.get(System::AuAu200).unwrap_err();
        assert!(err.to_string().contains("AuAu200"));
    }

    #[test]
    fn test_merge_overrides_single_system() {
        let mut table = SystemTable::default();
        table.merge(SystemTable::new([(
            System::AuAu200,
            SystemParams {
                normalization: 5.0,
                freestream_time: 0.8,
                trento_args: "Au Au".to_string(),
            },
        )]));
        assert_eq!(table.get(System::AuAu200).unwrap().normalization, 5.0);
        assert_eq!(table.get(System::PbPb5020).unwrap().normalization, 18.4);
    }
}
