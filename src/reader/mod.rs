//! Filesystem-backed readers.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │          ProcFs          │
//!                 │  loadavg  meminfo  stat  │
//!                 │  uptime   [pid]/stat     │
//!                 └────────────┬─────────────┘
//!                              │
//!                       ┌──────▼──────┐
//!                       │  FileSystem │ (trait)
//!                       └──────┬──────┘
//!                    ┌─────────┴─────────┐
//!             ┌──────▼──────┐     ┌──────▼──────┐
//!             │   RealFs    │     │   MockFs    │
//!             │  (Linux)    │     │  (Testing)  │
//!             └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use procstat::reader::{ProcFs, RealFs};
//!
//! let procfs: ProcFs<RealFs> = ProcFs::default();
//! let mem = procfs.mem_info().unwrap();
//! println!("{} bytes available", mem.mem_available);
//! ```
//!
//! ```
//! use procstat::reader::{MockFs, ProcFs};
//!
//! let procfs = ProcFs::new(MockFs::typical_system(), "/proc");
//! assert_eq!(procfs.stat().unwrap().cpus.len(), 4);
//! ```

pub mod mock;
mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{DEFAULT_PROC_PATH, ProcFs};
pub use traits::{FileSystem, RealFs};
