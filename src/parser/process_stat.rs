//! `/proc/[pid]/stat` reader.
//!
//! Format: `pid (comm) state ppid pgrp ...`. The comm field is the only
//! free-form value and may contain spaces and parentheses, so the line is
//! split on the first `(` after the pid and the last `) ` before the state.
//! See proc_pid_stat(5) for the meaning of each column.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::{Fields, decode};
use crate::error::{FormatError, ReadError};

const RECORD: &str = "process stat";

/// Number of columns in the record, pid and comm included.
pub const PROCESS_STAT_FIELDS: usize = 52;

static PROCESS_STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([0-9]+) \((.*)\) (.*)$").expect("process stat pattern is valid")
});

/// Parsed data from `/proc/[pid]/stat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStat {
    pub pid: u64,
    /// Executable name without the surrounding parentheses, otherwise as
    /// the kernel printed it (spaces and newlines included).
    pub comm: String,
    /// Single-letter state code (`R`, `S`, `D`, `Z`, ...).
    pub state: String,
    pub ppid: i64,
    pub pgrp: i64,
    pub session: i64,
    pub tty_nr: i64,
    pub tpgid: i64,
    pub flags: u64,
    pub minflt: u64,
    pub cminflt: u64,
    pub majflt: u64,
    pub cmajflt: u64,
    /// User mode time in clock ticks.
    pub utime: u64,
    /// Kernel mode time in clock ticks.
    pub stime: u64,
    pub cutime: i64,
    pub cstime: i64,
    pub priority: i64,
    pub nice: i64,
    pub num_threads: i64,
    pub itrealvalue: i64,
    /// Start time after boot, in clock ticks.
    pub starttime: u64,
    /// Virtual memory size in bytes.
    pub vsize: u64,
    /// Resident set size in pages.
    pub rss: i64,
    pub rsslim: u64,
    pub startcode: u64,
    pub endcode: u64,
    pub startstack: u64,
    pub kstkesp: u64,
    pub kstkeip: u64,
    pub signal: u64,
    pub blocked: u64,
    pub sigignore: u64,
    pub sigcatch: u64,
    pub wchan: u64,
    pub nswap: u64,
    pub cnswap: u64,
    pub exit_signal: i64,
    pub processor: i64,
    pub rt_priority: u64,
    pub policy: u64,
    pub delayacct_blkio_ticks: u64,
    pub guest_time: u64,
    pub cguest_time: i64,
    pub start_data: u64,
    pub end_data: u64,
    pub start_brk: u64,
    pub arg_start: u64,
    pub arg_end: u64,
    pub env_start: u64,
    pub env_end: u64,
    pub exit_code: i64,
}

/// Decodes `/proc/[pid]/stat` content.
///
/// Fails only when the line cannot be split into pid, comm and the rest.
/// Columns missing from the end of the line (older kernels) and columns that
/// do not parse are zero.
pub fn read_process_stat_from_bytes(data: &[u8]) -> Result<ProcessStat, ReadError> {
    let text = decode(data);
    let Some(caps) = PROCESS_STAT_RE.captures(text.trim()) else {
        debug!("process stat line does not match `pid (comm) rest`");
        return Err(FormatError::Layout { record: RECORD }.into());
    };

    let mut tokens = Vec::with_capacity(PROCESS_STAT_FIELDS);
    tokens.push(&caps[1]);
    tokens.push(&caps[2]);
    tokens.extend(caps[3].split_whitespace().take(PROCESS_STAT_FIELDS - 2));
    let f = Fields::new(&tokens);

    Ok(ProcessStat {
        pid: f.parse_or_zero(0),
        comm: f.str(1).to_string(),
        state: f.str(2).to_string(),
        ppid: f.parse_or_zero(3),
        pgrp: f.parse_or_zero(4),
        session: f.parse_or_zero(5),
        tty_nr: f.parse_or_zero(6),
        tpgid: f.parse_or_zero(7),
        flags: f.parse_or_zero(8),
        minflt: f.parse_or_zero(9),
        cminflt: f.parse_or_zero(10),
        majflt: f.parse_or_zero(11),
        cmajflt: f.parse_or_zero(12),
        utime: f.parse_or_zero(13),
        stime: f.parse_or_zero(14),
        cutime: f.parse_or_zero(15),
        cstime: f.parse_or_zero(16),
        priority: f.parse_or_zero(17),
        nice: f.parse_or_zero(18),
        num_threads: f.parse_or_zero(19),
        itrealvalue: f.parse_or_zero(20),
        starttime: f.parse_or_zero(21),
        vsize: f.parse_or_zero(22),
        rss: f.parse_or_zero(23),
        rsslim: f.parse_or_zero(24),
        startcode: f.parse_or_zero(25),
        endcode: f.parse_or_zero(26),
        startstack: f.parse_or_zero(27),
        kstkesp: f.parse_or_zero(28),
        kstkeip: f.parse_or_zero(29),
        signal: f.parse_or_zero(30),
        blocked: f.parse_or_zero(31),
        sigignore: f.parse_or_zero(32),
        sigcatch: f.parse_or_zero(33),
        wchan: f.parse_or_zero(34),
        nswap: f.parse_or_zero(35),
        cnswap: f.parse_or_zero(36),
        exit_signal: f.parse_or_zero(37),
        processor: f.parse_or_zero(38),
        rt_priority: f.parse_or_zero(39),
        policy: f.parse_or_zero(40),
        delayacct_blkio_ticks: f.parse_or_zero(41),
        guest_time: f.parse_or_zero(42),
        cguest_time: f.parse_or_zero(43),
        start_data: f.parse_or_zero(44),
        end_data: f.parse_or_zero(45),
        start_brk: f.parse_or_zero(46),
        arg_start: f.parse_or_zero(47),
        arg_end: f.parse_or_zero(48),
        env_start: f.parse_or_zero(49),
        env_end: f.parse_or_zero(50),
        exit_code: f.parse_or_zero(51),
    })
}

/// Reads and decodes a `/proc/[pid]/stat` file.
pub fn read_process_stat(path: impl AsRef<Path>) -> Result<ProcessStat, ReadError> {
    let data = std::fs::read(path)?;
    read_process_stat_from_bytes(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASH_STAT: &str = "1234 (bash) S 1233 1234 1234 34816 1235 4194304 5000 50000 10 20 100 50 200 100 20 0 1 0 100000 25000000 2000 18446744073709551615 94000 95000 140000 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 5 0 0 96000 97000 98000 140001 140002 140003 140004 0\n";

    #[test]
    fn test_parse_process_stat_full_line() {
        let stat = read_process_stat_from_bytes(BASH_STAT.as_bytes()).unwrap();

        assert_eq!(stat.pid, 1234);
        assert_eq!(stat.comm, "bash");
        assert_eq!(stat.state, "S");
        assert_eq!(stat.ppid, 1233);
        assert_eq!(stat.tty_nr, 34816);
        assert_eq!(stat.flags, 4194304);
        assert_eq!(stat.minflt, 5000);
        assert_eq!(stat.majflt, 10);
        assert_eq!(stat.utime, 100);
        assert_eq!(stat.stime, 50);
        assert_eq!(stat.cutime, 200);
        assert_eq!(stat.priority, 20);
        assert_eq!(stat.nice, 0);
        assert_eq!(stat.num_threads, 1);
        assert_eq!(stat.starttime, 100000);
        assert_eq!(stat.vsize, 25000000);
        assert_eq!(stat.rss, 2000);
        assert_eq!(stat.rsslim, u64::MAX);
        assert_eq!(stat.startcode, 94000);
        assert_eq!(stat.sigcatch, 1266777851);
        assert_eq!(stat.exit_signal, 17);
        assert_eq!(stat.processor, 2);
        assert_eq!(stat.delayacct_blkio_ticks, 5);
        assert_eq!(stat.start_data, 96000);
        assert_eq!(stat.env_end, 140004);
        assert_eq!(stat.exit_code, 0);
    }

    #[test]
    fn test_parse_process_stat_comm_with_spaces() {
        let stat = read_process_stat_from_bytes(b"42 (my proc) R 1 2 3 0 -1 0 0 0 0").unwrap();

        assert_eq!(stat.pid, 42);
        assert_eq!(stat.comm, "my proc");
        assert_eq!(stat.state, "R");
        assert_eq!(stat.ppid, 1);
        assert_eq!(stat.pgrp, 2);
        assert_eq!(stat.session, 3);
        assert_eq!(stat.tpgid, -1);
    }

    #[test]
    fn test_parse_process_stat_comm_with_newline() {
        let stat = read_process_stat_from_bytes(b"42 (a\nb) R 1 2 3").unwrap();

        assert_eq!(stat.pid, 42);
        assert_eq!(stat.comm, "a\nb");
        assert_eq!(stat.state, "R");
        assert_eq!(stat.ppid, 1);
        assert_eq!(stat.session, 3);

        let stat = read_process_stat_from_bytes(b"43 (x)\n y) S 7").unwrap();
        assert_eq!(stat.comm, "x)\n y");
        assert_eq!(stat.state, "S");
        assert_eq!(stat.ppid, 7);
    }

    #[test]
    fn test_parse_process_stat_comm_keeps_inner_whitespace() {
        let stat = read_process_stat_from_bytes(b"42 ( x ) R 1").unwrap();

        assert_eq!(stat.comm, " x ");
        assert_eq!(stat.state, "R");
        assert_eq!(stat.ppid, 1);
    }

    #[test]
    fn test_parse_process_stat_comm_with_parentheses() {
        let stat = read_process_stat_from_bytes(b"5001 (test(1)) S 1 5001").unwrap();
        assert_eq!(stat.comm, "test(1)");
        assert_eq!(stat.state, "S");
        assert_eq!(stat.ppid, 1);

        let stat = read_process_stat_from_bytes(b"7 (a) b) Z 3 4").unwrap();
        assert_eq!(stat.comm, "a) b");
        assert_eq!(stat.state, "Z");
        assert_eq!(stat.ppid, 3);
    }

    #[test]
    fn test_parse_process_stat_short_line_is_padded() {
        let stat = read_process_stat_from_bytes(b"42 (init) S 1 2 3 4 5 6 7 8 9").unwrap();

        assert_eq!(stat.tpgid, 5);
        assert_eq!(stat.cminflt, 8);
        assert_eq!(stat.majflt, 9);
        assert_eq!(stat.cmajflt, 0);
        assert_eq!(stat.utime, 0);
        assert_eq!(stat.vsize, 0);
        assert_eq!(stat.exit_code, 0);
    }

    #[test]
    fn test_parse_process_stat_bad_tokens_default_to_zero() {
        let stat = read_process_stat_from_bytes(b"42 (x) R -5 abc 3 4 5 -6").unwrap();

        assert_eq!(stat.ppid, -5);
        assert_eq!(stat.pgrp, 0);
        assert_eq!(stat.session, 3);
        // flags is unsigned
        assert_eq!(stat.flags, 0);
    }

    #[test]
    fn test_parse_process_stat_extra_columns_dropped() {
        let mut line = BASH_STAT.trim_end().to_string();
        line.push_str(" 111 222 333");
        let stat = read_process_stat_from_bytes(line.as_bytes()).unwrap();

        assert_eq!(stat.exit_code, 0);
        assert_eq!(stat.env_end, 140004);
    }

    #[test]
    fn test_parse_process_stat_layout_errors() {
        let inputs: [&[u8]; 5] = [
            b"",
            b"bash S 1 2 3",
            b"42 bash S 1 2",
            b"42 (bash)",
            b"(bash) S 1 2",
        ];
        for input in inputs {
            let err = read_process_stat_from_bytes(input).unwrap_err();
            assert_eq!(
                err.as_format(),
                Some(&FormatError::Layout {
                    record: "process stat"
                }),
                "input {:?}",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_read_process_stat_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stat");
        std::fs::write(&path, BASH_STAT).unwrap();

        let stat = read_process_stat(&path).unwrap();
        assert_eq!(stat.comm, "bash");
    }

    #[test]
    fn test_process_stat_serializes_all_fields() {
        let stat = read_process_stat_from_bytes(BASH_STAT.as_bytes()).unwrap();
        let json = serde_json::to_value(&stat).unwrap();

        assert_eq!(json.as_object().unwrap().len(), PROCESS_STAT_FIELDS);
        assert_eq!(json["comm"], "bash");
        assert_eq!(json["tty_nr"], 34816);
        assert_eq!(json["delayacct_blkio_ticks"], 5);
        assert_eq!(json["cguest_time"], 0);
    }
}
