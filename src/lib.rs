//! procstat — typed readers for Linux `/proc` status files.
//!
//! Provides:
//! - `parser` — decoders for `/proc/loadavg`, `/proc/meminfo`, `/proc/stat`,
//!   `/proc/uptime` and `/proc/[pid]/stat`, each with a bytes and a path
//!   entry point
//! - `reader` — `ProcFs`, which reads those files from a configurable proc
//!   root through the `FileSystem` trait (real or in-memory)
//! - `error` — `ReadError` / `FormatError`
//!
//! Every call returns a fresh, independently owned record; nothing is cached
//! and no state is shared between calls, so readers can be used from many
//! threads at once.
//!
//! ```
//! let load = procstat::read_load_avg_from_bytes(b"0.10 0.20 0.30 1/200 12345\n").unwrap();
//! assert_eq!(load.process_total, 200);
//! ```

pub mod error;
pub mod parser;
pub mod reader;

pub use error::{FormatError, ReadError};
pub use parser::{
    CpuStat, LoadAvg, MemInfo, PROCESS_STAT_FIELDS, ProcessStat, Stat, Uptime, read_load_avg,
    read_load_avg_from_bytes, read_mem_info, read_mem_info_from_bytes, read_process_stat,
    read_process_stat_from_bytes, read_stat, read_stat_from_bytes, read_uptime,
    read_uptime_from_bytes,
};
pub use reader::{DEFAULT_PROC_PATH, FileSystem, MockFs, ProcFs, RealFs};
