//! Threshold rules applied to a single [`Snapshot`].
//!
//! Each rule is checked independently. A rule whose denominator is zero or
//! negative is skipped. Reported quantities are truncated toward zero, and
//! free capacity is clamped at zero when `used` exceeds `total`.

use statwatch_core::constants::{
    BITS_PER_BYTE, BYTES_PER_MEGABYTE, DISK_USAGE_LIMIT, LOAD_AVERAGE_LIMIT,
    MEMORY_USAGE_LIMIT, NETWORK_USAGE_LIMIT,
};
use statwatch_core::models::{Snapshot, Warning};

/// Evaluate every threshold rule, returning warnings in rule order:
/// load, memory, disk, network.
pub fn evaluate(snapshot: &Snapshot) -> Vec<Warning> {
    [
        check_load(snapshot),
        check_memory(snapshot),
        check_disk(snapshot),
        check_network(snapshot),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_load(snapshot: &Snapshot) -> Option<Warning> {
    (snapshot.load_average > LOAD_AVERAGE_LIMIT).then_some(Warning::LoadAverageHigh {
        load_average: snapshot.load_average,
    })
}

fn check_memory(snapshot: &Snapshot) -> Option<Warning> {
    let ratio = usage_ratio(snapshot.used_memory_bytes, snapshot.total_memory_bytes)?;
    (ratio > MEMORY_USAGE_LIMIT).then(|| Warning::MemoryUsageHigh {
        percent: truncate(ratio * 100.0),
    })
}

fn check_disk(snapshot: &Snapshot) -> Option<Warning> {
    let ratio = usage_ratio(snapshot.used_disk_bytes, snapshot.total_disk_bytes)?;
    (ratio > DISK_USAGE_LIMIT).then(|| {
        let free_bytes = free_capacity(snapshot.used_disk_bytes, snapshot.total_disk_bytes);
        Warning::DiskSpaceLow {
            free_mb: truncate(free_bytes / BYTES_PER_MEGABYTE),
        }
    })
}

fn check_network(snapshot: &Snapshot) -> Option<Warning> {
    let ratio = usage_ratio(
        snapshot.used_network_bytes_per_sec,
        snapshot.total_network_bytes_per_sec,
    )?;
    (ratio > NETWORK_USAGE_LIMIT).then(|| {
        let free_bytes = free_capacity(
            snapshot.used_network_bytes_per_sec,
            snapshot.total_network_bytes_per_sec,
        );
        Warning::NetworkBandwidthLow {
            free_mbit_per_sec: truncate(free_bytes * BITS_PER_BYTE / BYTES_PER_MEGABYTE),
        }
    })
}

/// `used / total`, or `None` when `total` is not strictly positive.
fn usage_ratio(used: f64, total: f64) -> Option<f64> {
    (total > 0.0).then(|| used / total)
}

fn free_capacity(used: f64, total: f64) -> f64 {
    (total - used).max(0.0)
}

/// Float-to-integer conversion truncates toward zero and saturates,
/// so NaN and negative inputs become 0.
fn truncate(value: f64) -> u64 {
    value as u64
}
