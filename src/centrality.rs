//! Centrality bin parsing.
//! Tokens look like "20-30" (percentile range, most central first).
//! The raw token is kept so output file names keep their zero padding ("00-05").

use anyhow::{Context, Result, bail};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CENTRALITIES: [&str; 6] = ["00-05", "05-10", "10-20", "20-30", "30-40", "40-50"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CentralityBin {
    pub low: u8,
    pub high: u8,
    token: String,
}

impl CentralityBin {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for CentralityBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl FromStr for CentralityBin {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self> {
        let mut parts = token.split('-');
        let (Some(low), Some(high), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Malformed centrality token '{}': expected LOW-HIGH", token);
        };

        let low = parse_bound(low, token)?;
        let high = parse_bound(high, token)?;
        if low >= high {
            bail!("Centrality token '{}': low bound must be below high bound", token);
        }

        Ok(CentralityBin { low, high, token: token.to_string() })
    }
}

fn parse_bound(side: &str, token: &str) -> Result<u8> {
    let value: u8 = side
        .parse()
        .with_context(|| format!("Centrality token '{}': '{}' is not an integer", token, side))?;
    if value > 100 {
        bail!("Centrality token '{}': bound {} outside 0-100", token, value);
    }
    Ok(value)
}
