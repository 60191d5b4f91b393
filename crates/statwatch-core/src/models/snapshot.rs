use serde::{Deserialize, Serialize};

use crate::constants::SNAPSHOT_FIELD_COUNT;

/// One parsed statistics payload.
///
/// Field order matches the wire order of the comma-separated payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub load_average: f64,
    pub total_memory_bytes: f64,
    pub used_memory_bytes: f64,
    pub total_disk_bytes: f64,
    pub used_disk_bytes: f64,
    pub total_network_bytes_per_sec: f64,
    pub used_network_bytes_per_sec: f64,
}

impl Snapshot {
    /// Build a snapshot from values in wire order.
    pub fn from_values(values: [f64; SNAPSHOT_FIELD_COUNT]) -> Self {
        let [
            load_average,
            total_memory_bytes,
            used_memory_bytes,
            total_disk_bytes,
            used_disk_bytes,
            total_network_bytes_per_sec,
            used_network_bytes_per_sec,
        ] = values;
        Self {
            load_average,
            total_memory_bytes,
            used_memory_bytes,
            total_disk_bytes,
            used_disk_bytes,
            total_network_bytes_per_sec,
            used_network_bytes_per_sec,
        }
    }

    /// Values in wire order.
    pub fn values(&self) -> [f64; SNAPSHOT_FIELD_COUNT] {
        [
            self.load_average,
            self.total_memory_bytes,
            self.used_memory_bytes,
            self.total_disk_bytes,
            self.used_disk_bytes,
            self.total_network_bytes_per_sec,
            self.used_network_bytes_per_sec,
        ]
    }
}
