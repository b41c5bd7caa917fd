//! `/proc/stat` reader.
//!
//! Format: one keyword per line followed by its values. `cpu` is the sum over
//! all cores, `cpuN` lines follow in core order, and scalar counters such as
//! `ctxt` or `btime` carry a single value. Unknown keywords are skipped.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::fields::{Fields, decode};
use crate::error::ReadError;

/// Tick counters for one CPU line of `/proc/stat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuStat {
    /// `cpu` for the aggregate line, `cpuN` for a core.
    pub id: String,
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuStat {
    /// Builds a CPU record from a tokenized line, keyword included.
    ///
    /// Older kernels print fewer columns; missing ones are zero.
    pub(crate) fn from_fields(tokens: &[&str]) -> Self {
        let f = Fields::new(tokens);
        Self {
            id: f.str(0).to_string(),
            user: f.parse_or_zero(1),
            nice: f.parse_or_zero(2),
            system: f.parse_or_zero(3),
            idle: f.parse_or_zero(4),
            iowait: f.parse_or_zero(5),
            irq: f.parse_or_zero(6),
            softirq: f.parse_or_zero(7),
            steal: f.parse_or_zero(8),
            guest: f.parse_or_zero(9),
            guest_nice: f.parse_or_zero(10),
        }
    }
}

/// Parsed data from `/proc/stat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub cpu_all: CpuStat,
    /// Per-core records in the order the kernel listed them.
    pub cpus: Vec<CpuStat>,
    /// Total interrupts serviced since boot.
    #[serde(rename = "intr")]
    pub interrupts: u64,
    #[serde(rename = "ctxt")]
    pub context_switches: u64,
    #[serde(rename = "btime")]
    pub boot_time: DateTime<Utc>,
    /// Forks since boot.
    pub processes: u64,
    pub procs_running: u64,
    pub procs_blocked: u64,
}

/// Decodes `/proc/stat` content.
///
/// Never fails on content. A repeated `cpu` line replaces the earlier one.
pub fn read_stat_from_bytes(data: &[u8]) -> Result<Stat, ReadError> {
    let text = decode(data);
    let mut stat = Stat::default();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            continue;
        };
        let f = Fields::new(&tokens);

        match keyword {
            "intr" => stat.interrupts = f.parse_or_zero(1),
            "ctxt" => stat.context_switches = f.parse_or_zero(1),
            "btime" => stat.boot_time = boot_time(f.parse_or_zero(1)),
            "processes" => stat.processes = f.parse_or_zero(1),
            "procs_running" => stat.procs_running = f.parse_or_zero(1),
            "procs_blocked" => stat.procs_blocked = f.parse_or_zero(1),
            "cpu" => stat.cpu_all = CpuStat::from_fields(&tokens),
            _ if keyword.starts_with("cpu") => stat.cpus.push(CpuStat::from_fields(&tokens)),
            _ => trace!(keyword, "ignoring stat line"),
        }
    }

    Ok(stat)
}

/// Reads and decodes a `stat` file.
pub fn read_stat(path: impl AsRef<Path>) -> Result<Stat, ReadError> {
    let data = std::fs::read(path)?;
    read_stat_from_bytes(&data)
}

/// Converts `btime` seconds to a timestamp; out-of-range values map to the epoch.
fn boot_time(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
