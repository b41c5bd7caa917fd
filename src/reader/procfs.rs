//! Reader for the well-known files under a `/proc` mount.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ReadError;
use crate::parser::{
    LoadAvg, MemInfo, ProcessStat, Stat, Uptime, read_load_avg_from_bytes,
    read_mem_info_from_bytes, read_process_stat_from_bytes, read_stat_from_bytes,
    read_uptime_from_bytes,
};
use crate::reader::traits::{FileSystem, RealFs};

/// Where procfs is mounted on Linux.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// Reads and decodes records from a proc tree.
///
/// Holds no cache: every call reads the file again and returns a fresh record.
pub struct ProcFs<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
}

impl Default for ProcFs<RealFs> {
    fn default() -> Self {
        Self::new(RealFs::new(), DEFAULT_PROC_PATH)
    }
}

impl<F: FileSystem> ProcFs<F> {
    /// Creates a new reader.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    pub fn proc_path(&self) -> &Path {
        &self.proc_path
    }

    /// Reads `/proc/loadavg`.
    pub fn load_avg(&self) -> Result<LoadAvg, ReadError> {
        read_load_avg_from_bytes(&self.read("loadavg")?)
    }

    /// Reads `/proc/meminfo`.
    pub fn mem_info(&self) -> Result<MemInfo, ReadError> {
        read_mem_info_from_bytes(&self.read("meminfo")?)
    }

    /// Reads `/proc/stat`.
    pub fn stat(&self) -> Result<Stat, ReadError> {
        read_stat_from_bytes(&self.read("stat")?)
    }

    /// Reads `/proc/uptime`.
    pub fn uptime(&self) -> Result<Uptime, ReadError> {
        read_uptime_from_bytes(&self.read("uptime")?)
    }

    /// Reads `/proc/[pid]/stat`.
    ///
    /// A process that exits between listing and reading surfaces as
    /// `ReadError::Io` with `NotFound`.
    pub fn process_stat(&self, pid: u32) -> Result<ProcessStat, ReadError> {
        read_process_stat_from_bytes(&self.read(Path::new(&pid.to_string()).join("stat"))?)
    }

    /// Returns true while `/proc/[pid]` exists.
    pub fn has_process(&self, pid: u32) -> bool {
        self.fs.exists(&self.proc_path.join(pid.to_string()))
    }

    /// Lists the PIDs present under the proc root, ascending.
    pub fn pids(&self) -> Result<Vec<u32>, ReadError> {
        let mut pids: Vec<u32> = self
            .fs
            .read_dir(&self.proc_path)?
            .iter()
            .filter_map(|entry| entry.file_name()?.to_str()?.parse().ok())
            .collect();
        pids.sort_unstable();
        Ok(pids)
    }

    fn read(&self, relative: impl AsRef<Path>) -> Result<Vec<u8>, ReadError> {
        let path = self.proc_path.join(relative);
        self.fs.read(&path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "failed to read proc file");
            ReadError::Io(e)
        })
    }
}
