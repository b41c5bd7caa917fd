//! `/proc/uptime` reader.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{decode, parse_or_zero};
use crate::error::{FormatError, ReadError};

const RECORD: &str = "uptime";
const FIELDS: usize = 2;

/// Parsed data from `/proc/uptime`, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uptime {
    /// Time since boot.
    pub total: Duration,
    /// Idle time summed over all CPUs, so it can exceed `total` on SMP.
    pub idle: Duration,
}

impl Uptime {
    /// Time since boot, in whole seconds.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Idle time summed over all CPUs, in whole seconds.
    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// Share of time the machine spent idle.
    ///
    /// Always `0.0` for now.
    // TODO: return idle / (total * online CPUs) once the CPU count is passed in.
    pub fn idle_fraction(&self) -> f64 {
        0.0
    }
}

/// Decodes `/proc/uptime` content.
///
/// Exactly two values are required. Sub-second precision is dropped.
pub fn read_uptime_from_bytes(data: &[u8]) -> Result<Uptime, ReadError> {
    let text = decode(data);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.len() != FIELDS {
        debug!(actual = tokens.len(), "unexpected uptime layout");
        return Err(FormatError::FieldCount {
            record: RECORD,
            expected: FIELDS,
            actual: tokens.len(),
        }
        .into());
    }

    Ok(Uptime {
        total: whole_seconds(tokens[0]),
        idle: whole_seconds(tokens[1]),
    })
}

/// Reads and decodes an `uptime` file.
pub fn read_uptime(path: impl AsRef<Path>) -> Result<Uptime, ReadError> {
    let data = std::fs::read(path)?;
    read_uptime_from_bytes(&data)
}

fn whole_seconds(token: &str) -> Duration {
    let secs: f64 = parse_or_zero(token);
    // Saturating cast: negative and NaN become 0.
    Duration::from_secs(secs.trunc() as u64)
}
