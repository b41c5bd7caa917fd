//! Pre-built mock filesystem scenarios for testing.
//!
//! These provide realistic `/proc` contents rooted at `/proc`.

use super::filesystem::MockFs;

impl MockFs {
    /// A quiet four-core machine with a handful of processes.
    ///
    /// Includes: init (PID 1), kthreadd (PID 2), a bash shell and a browser
    /// tab whose comm contains a space.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
Active(anon):    1024000 kB
Inactive(anon):   256000 kB
Active(file):    3072000 kB
Inactive(file):  1792000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
SUnreclaim:       256000 kB
HugePages_Total:       0
Hugepagesize:       2048 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
softirq 40000 0 10000 0 5000 0 0 20000 0 0 5000
",
        );

        fs.add_process(
            1,
            "1 (systemd) S 0 1 1 0 -1 4194560 50000 500000 100 1000 500 300 5000 3000 20 0 1 0 10 170000000 3000 18446744073709551615 1 1 0 0 0 0 671173123 4096 1260 0 0 0 17 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n",
        );
        fs.add_process(
            2,
            "2 (kthreadd) S 0 0 0 0 -1 2129984 0 0 0 0 0 10 0 0 20 0 1 0 10 0 0 18446744073709551615 0 0 0 0 0 0 0 2147483647 0 0 0 0 17 1 0 0 0 0 0 0 0 0 0 0 0 0 0\n",
        );
        fs.add_process(
            1234,
            "1234 (bash) S 1233 1234 1234 34816 1235 4194304 5000 50000 10 20 100 50 200 100 20 0 1 0 100000 25000000 2000 18446744073709551615 94000 95000 140000 0 0 0 65536 3670020 1266777851 0 0 0 17 2 0 0 5 0 0 96000 97000 98000 140001 140002 140003 140004 0\n",
        );
        fs.add_process(
            5000,
            "5000 (Web Content) R 4999 5000 4999 0 -1 4194304 100000 0 500 0 5000 1000 0 0 20 0 20 0 500000 2000000000 50000 18446744073709551615 0 0 0 0 0 0 0 0 0 0 0 0 17 3 0 0 0 0 0 0 0 0 0 0 0 0 0\n",
        );

        // Non-process entries next to the PID directories
        fs.add_dir("/proc/self");
        fs.add_dir("/proc/sys");

        fs
    }

    /// A loaded 2-core machine on an older kernel: high load, low free
    /// memory, swap in use and short `cpu` rows without guest columns.
    pub fn busy_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/uptime", "86400.99 12000.50\n");
        fs.add_file("/proc/loadavg", "4.50 3.20 2.10 8/612 31337\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        4096000 kB
MemFree:          256000 kB
MemAvailable:     300000 kB
Buffers:           10000 kB
Cached:           100000 kB
SwapCached:        50000 kB
SwapTotal:       2048000 kB
SwapFree:         512000 kB
Committed_AS:    6000000 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  900000 1000 200000 50000 30000 500 800 1200
cpu0 450000 500 100000 25000 15000 250 400 600
cpu1 450000 500 100000 25000 15000 250 400 600
intr 99999999
ctxt 88888888
btime 1600000000
processes 500000
procs_running 8
procs_blocked 3
",
        );

        fs.add_process(
            31337,
            "31337 (stress-ng: cpu) R 31000 31000 31000 0 -1 4194368 10 0 0 0 80000 20 0 0 20 0 1 0 8000000 20000000 1500 18446744073709551615\n",
        );

        fs
    }
}
