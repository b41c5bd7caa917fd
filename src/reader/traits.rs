//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait lets [`ProcFs`](super::ProcFs) read from the real
//! `/proc` on Linux or from an in-memory tree in tests and on other platforms.

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction for the filesystem operations the readers need.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file.
    ///
    /// `/proc` files report a size of zero, so implementations must read to
    /// EOF rather than trusting metadata.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists entries in a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}
