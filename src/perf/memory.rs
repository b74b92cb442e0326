//! Process memory sampling.

/// Resident set size of this process in whole MiB.
///
/// Reads `VmRSS` from `/proc/self/status`; returns `None` where that file
/// does not exist or cannot be parsed.
pub fn resident_memory_mb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss_mb(&status)
}

/// Extract `VmRSS` (reported in kB) from a `/proc/<pid>/status` body.
fn parse_vm_rss_mb(status: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb: u64 = line
        .trim_start_matches("VmRSS:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kb / 1024)
}
