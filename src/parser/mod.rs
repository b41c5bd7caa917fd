//! Parsers for `/proc` status files.
//!
//! Each file has a bytes entry point (`read_*_from_bytes`) and a path entry
//! point (`read_*`) that reads the whole file first. `loadavg` and `uptime`
//! are strict about their shape; `meminfo`, `stat` and `[pid]/stat` grow new
//! columns across kernel versions, so they default whatever they cannot parse.

mod fields;
pub mod loadavg;
pub mod meminfo;
pub mod process_stat;
pub mod stat;
pub mod uptime;

pub use loadavg::{LoadAvg, read_load_avg, read_load_avg_from_bytes};
pub use meminfo::{MemInfo, read_mem_info, read_mem_info_from_bytes};
pub use process_stat::{
    PROCESS_STAT_FIELDS, ProcessStat, read_process_stat, read_process_stat_from_bytes,
};
pub use stat::{CpuStat, Stat, read_stat, read_stat_from_bytes};
pub use uptime::{Uptime, read_uptime, read_uptime_from_bytes};
