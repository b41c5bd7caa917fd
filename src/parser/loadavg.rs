//! `/proc/loadavg` reader.
//!
//! Format: `0.15 0.10 0.05 1/150 1234`. The running/total pair is written by
//! the kernel with a slash; it may also appear as two separate tokens.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{decode, split_tokens};
use crate::error::{FormatError, ReadError};

const RECORD: &str = "loadavg";
const FIELDS: usize = 6;

/// Parsed data from `/proc/loadavg`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadAvg {
    #[serde(rename = "last1min")]
    pub last_1min: f64,
    #[serde(rename = "last5min")]
    pub last_5min: f64,
    #[serde(rename = "last15min")]
    pub last_15min: f64,
    /// Currently runnable scheduling entities.
    pub process_running: u64,
    /// Scheduling entities that exist on the system.
    pub process_total: u64,
    /// PID most recently handed out by the kernel.
    pub last_pid: u64,
}

/// Decodes `/proc/loadavg` content.
///
/// All six values must be present and numeric; anything else is a
/// [`FormatError`]. Tokens after the sixth are ignored.
pub fn read_load_avg_from_bytes(data: &[u8]) -> Result<LoadAvg, ReadError> {
    let text = decode(data);
    let tokens: Vec<&str> = split_tokens(&text, &['/']).take(FIELDS).collect();

    if tokens.len() < FIELDS {
        debug!(actual = tokens.len(), "short loadavg line");
        return Err(FormatError::FieldCount {
            record: RECORD,
            expected: FIELDS,
            actual: tokens.len(),
        }
        .into());
    }

    Ok(LoadAvg {
        last_1min: parse_strict(tokens[0], "last1min")?,
        last_5min: parse_strict(tokens[1], "last5min")?,
        last_15min: parse_strict(tokens[2], "last15min")?,
        process_running: parse_strict(tokens[3], "process_running")?,
        process_total: parse_strict(tokens[4], "process_total")?,
        last_pid: parse_strict(tokens[5], "last_pid")?,
    })
}

/// Reads and decodes a `loadavg` file.
pub fn read_load_avg(path: impl AsRef<Path>) -> Result<LoadAvg, ReadError> {
    let data = std::fs::read(path)?;
    read_load_avg_from_bytes(&data)
}

fn parse_strict<T: FromStr>(token: &str, field: &'static str) -> Result<T, FormatError> {
    token.parse().map_err(|_| {
        debug!(field, token, "invalid loadavg value");
        FormatError::InvalidValue {
            record: RECORD,
            field,
            value: token.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_loadavg_six_tokens() {
        let load = read_load_avg_from_bytes(b"0.10 0.20 0.30 1 200 12345").unwrap();

        assert!((load.last_1min - 0.10).abs() < 1e-9);
        assert!((load.last_5min - 0.20).abs() < 1e-9);
        assert!((load.last_15min - 0.30).abs() < 1e-9);
        assert_eq!(load.process_running, 1);
        assert_eq!(load.process_total, 200);
        assert_eq!(load.last_pid, 12345);
    }

    #[test]
    fn test_parse_loadavg_kernel_layout() {
        let load = read_load_avg_from_bytes(b"0.15 0.10 0.05 1/150 1234\n").unwrap();

        assert!((load.last_1min - 0.15).abs() < 1e-9);
        assert_eq!(load.process_running, 1);
        assert_eq!(load.process_total, 150);
        assert_eq!(load.last_pid, 1234);
    }

    #[test]
    fn test_parse_loadavg_too_few_fields() {
        let err = read_load_avg_from_bytes(b"0.10 0.20 0.30 1").unwrap_err();
        assert_eq!(
            err.as_format(),
            Some(&FormatError::FieldCount {
                record: "loadavg",
                expected: 6,
                actual: 4,
            })
        );

        let err = read_load_avg_from_bytes(b"").unwrap_err();
        assert!(matches!(
            err.as_format(),
            Some(FormatError::FieldCount { actual: 0, .. })
        ));
    }

    #[test]
    fn test_parse_loadavg_rejects_non_numeric() {
        let err = read_load_avg_from_bytes(b"0.10 high 0.30 1 200 12345").unwrap_err();
        assert_eq!(
            err.as_format(),
            Some(&FormatError::InvalidValue {
                record: "loadavg",
                field: "last5min",
                value: "high".to_string(),
            })
        );

        // A negative count is not a valid unsigned value.
        let err = read_load_avg_from_bytes(b"0.10 0.20 0.30 -1 200 12345").unwrap_err();
        assert!(matches!(
            err.as_format(),
            Some(FormatError::InvalidValue {
                field: "process_running",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_loadavg_ignores_trailing_tokens() {
        let load = read_load_avg_from_bytes(b"1.00 2.00 3.00 4 5 6 7 8").unwrap();
        assert_eq!(load.last_pid, 6);
    }

    #[test]
    fn test_read_loadavg_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"2.50 1.25 0.75 3/420 9876\n").unwrap();

        let load = read_load_avg(file.path()).unwrap();
        assert_eq!(load.process_running, 3);
        assert_eq!(load.process_total, 420);
        assert_eq!(load.last_pid, 9876);
    }

    #[test]
    fn test_read_loadavg_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_load_avg(dir.path().join("loadavg")).unwrap_err();
        assert!(matches!(err, ReadError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_loadavg_field_names() {
        let load = read_load_avg_from_bytes(b"0.10 0.20 0.30 1 200 12345").unwrap();
        let json = serde_json::to_value(load).unwrap();

        for key in [
            "last1min",
            "last5min",
            "last15min",
            "process_running",
            "process_total",
            "last_pid",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
