//! In-memory mock filesystem.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::reader::traits::FileSystem;

/// In-memory filesystem for testing.
///
/// Stores files and directories in memory so tests can simulate any `/proc`
/// state, including files the real kernel would never produce.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, Vec<u8>>,
    /// Set of directories (for read_dir support).
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content. Parent directories are created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Adds `/proc/[pid]/stat` for a process.
    pub fn add_process(&mut self, pid: u32, stat: impl Into<Vec<u8>>) {
        let base = PathBuf::from(format!("/proc/{pid}"));
        self.add_dir(&base);
        self.add_file(base.join("stat"), stat);
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", path.display()),
            ));
        }

        let children = self
            .files
            .keys()
            .chain(self.directories.iter())
            .filter(|child| child.parent() == Some(path))
            .cloned()
            .collect::<HashSet<_>>();

        Ok(children.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 16384 kB\n");

        assert!(fs.exists(Path::new("/proc/meminfo")));
        assert!(fs.exists(Path::new("/proc")));

        let content = fs.read(Path::new("/proc/meminfo")).unwrap();
        assert_eq!(content, b"MemTotal: 16384 kB\n");
    }

    #[test]
    fn test_mock_fs_binary_content() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/7/stat", &b"7 (\xff) R 1"[..]);

        assert_eq!(fs.read(Path::new("/proc/7/stat")).unwrap(), b"7 (\xff) R 1");
    }

    #[test]
    fn test_mock_fs_read_dir() {
        let mut fs = MockFs::new();
        fs.add_process(1, "1 (init) S 0");
        fs.add_process(2, "2 (kthreadd) S 0");
        fs.add_file("/proc/uptime", "1.0 2.0");

        let mut proc_entries = fs.read_dir(Path::new("/proc")).unwrap();
        proc_entries.sort();
        assert_eq!(
            proc_entries,
            [
                PathBuf::from("/proc/1"),
                PathBuf::from("/proc/2"),
                PathBuf::from("/proc/uptime"),
            ]
        );

        let proc1_entries = fs.read_dir(Path::new("/proc/1")).unwrap();
        assert_eq!(proc1_entries, [PathBuf::from("/proc/1/stat")]);
    }

    #[test]
    fn test_mock_fs_not_found() {
        let fs = MockFs::new();

        let err = fs.read(Path::new("/proc/loadavg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.read_dir(Path::new("/proc")).is_err());
        assert!(!fs.exists(Path::new("/proc")));
    }
}
