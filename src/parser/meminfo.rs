//! `/proc/meminfo` reader.
//!
//! Format: one `Key: value [kB]` counter per line. Values with a `kB` suffix
//! are stored in bytes; bare values (the `HugePages_*` counts) are stored as
//! written.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::fields::{KB, decode, is_kb, parse_or_zero, split_tokens};
use crate::error::ReadError;

/// Parsed data from `/proc/meminfo`. Every size is in bytes.
///
/// Counters missing from the input stay zero, so the same record works on
/// kernels that predate (or postdate) any given key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub mem_available: u64,
    pub buffers: u64,
    pub cached: u64,
    pub swap_cached: u64,
    pub active: u64,
    pub inactive: u64,
    pub active_anon: u64,
    pub inactive_anon: u64,
    pub active_file: u64,
    pub inactive_file: u64,
    pub unevictable: u64,
    pub mlocked: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub dirty: u64,
    #[serde(rename = "write_back")]
    pub writeback: u64,
    pub anon_pages: u64,
    pub mapped: u64,
    pub shmem: u64,
    pub slab: u64,
    pub s_reclaimable: u64,
    #[serde(rename = "s_unclaim")]
    pub s_unreclaim: u64,
    pub kernel_stack: u64,
    pub page_tables: u64,
    pub nfs_unstable: u64,
    pub bounce: u64,
    pub writeback_tmp: u64,
    pub commit_limit: u64,
    pub committed_as: u64,
    pub vmalloc_total: u64,
    pub vmalloc_used: u64,
    pub vmalloc_chunk: u64,
    pub hardware_corrupted: u64,
    pub anon_huge_pages: u64,
    pub huge_pages_total: u64,
    pub huge_pages_free: u64,
    pub huge_pages_rsvd: u64,
    pub huge_pages_surp: u64,
    pub hugepagesize: u64,
    pub direct_map_4k: u64,
    #[serde(rename = "direct_map_2M")]
    pub direct_map_2m: u64,
    #[serde(rename = "direct_map_1G")]
    pub direct_map_1g: u64,
}

impl MemInfo {
    /// Maps a meminfo key, spelled exactly as the kernel prints it, to its
    /// counter.
    fn counter_mut(&mut self, key: &str) -> Option<&mut u64> {
        let counter = match key {
            "MemTotal" => &mut self.mem_total,
            "MemFree" => &mut self.mem_free,
            "MemAvailable" => &mut self.mem_available,
            "Buffers" => &mut self.buffers,
            "Cached" => &mut self.cached,
            "SwapCached" => &mut self.swap_cached,
            "Active" => &mut self.active,
            "Inactive" => &mut self.inactive,
            "Active(anon)" => &mut self.active_anon,
            "Inactive(anon)" => &mut self.inactive_anon,
            "Active(file)" => &mut self.active_file,
            "Inactive(file)" => &mut self.inactive_file,
            "Unevictable" => &mut self.unevictable,
            "Mlocked" => &mut self.mlocked,
            "SwapTotal" => &mut self.swap_total,
            "SwapFree" => &mut self.swap_free,
            "Dirty" => &mut self.dirty,
            "Writeback" => &mut self.writeback,
            "AnonPages" => &mut self.anon_pages,
            "Mapped" => &mut self.mapped,
            "Shmem" => &mut self.shmem,
            "Slab" => &mut self.slab,
            "SReclaimable" => &mut self.s_reclaimable,
            "SUnreclaim" => &mut self.s_unreclaim,
            "KernelStack" => &mut self.kernel_stack,
            "PageTables" => &mut self.page_tables,
            "NFS_Unstable" => &mut self.nfs_unstable,
            "Bounce" => &mut self.bounce,
            "WritebackTmp" => &mut self.writeback_tmp,
            "CommitLimit" => &mut self.commit_limit,
            "Committed_AS" => &mut self.committed_as,
            "VmallocTotal" => &mut self.vmalloc_total,
            "VmallocUsed" => &mut self.vmalloc_used,
            "VmallocChunk" => &mut self.vmalloc_chunk,
            "HardwareCorrupted" => &mut self.hardware_corrupted,
            "AnonHugePages" => &mut self.anon_huge_pages,
            "HugePages_Total" => &mut self.huge_pages_total,
            "HugePages_Free" => &mut self.huge_pages_free,
            "HugePages_Rsvd" => &mut self.huge_pages_rsvd,
            "HugePages_Surp" => &mut self.huge_pages_surp,
            "Hugepagesize" => &mut self.hugepagesize,
            "DirectMap4k" => &mut self.direct_map_4k,
            "DirectMap2M" => &mut self.direct_map_2m,
            "DirectMap1G" => &mut self.direct_map_1g,
            _ => return None,
        };
        Some(counter)
    }
}

/// Decodes `/proc/meminfo` content.
///
/// Never fails on content: short lines and unknown keys are skipped, and a
/// value that does not parse is stored as zero.
pub fn read_mem_info_from_bytes(data: &[u8]) -> Result<MemInfo, ReadError> {
    let text = decode(data);
    let mut info = MemInfo::default();

    for line in text.lines() {
        let fields: Vec<&str> = split_tokens(line, &[':']).collect();
        if fields.len() < 2 {
            if !fields.is_empty() {
                trace!(line, "skipping meminfo line without a value");
            }
            continue;
        }

        let mut value: u64 = parse_or_zero(fields[1]);
        if fields.get(2).is_some_and(|unit| is_kb(unit)) {
            value = value.saturating_mul(KB);
        }

        match info.counter_mut(fields[0]) {
            Some(counter) => *counter = value,
            None => trace!(key = fields[0], "ignoring unknown meminfo key"),
        }
    }

    Ok(info)
}

/// Reads and decodes a `meminfo` file.
pub fn read_mem_info(path: impl AsRef<Path>) -> Result<MemInfo, ReadError> {
    let data = std::fs::read(path)?;
    read_mem_info_from_bytes(&data)
}
