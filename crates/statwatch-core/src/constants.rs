/// statwatch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Statistics endpoint polled when no config file overrides it.
pub const DEFAULT_ENDPOINT_URL: &str = "http://srv.msk01.gigacorp.local/_stats";

/// Seconds between the end of one cycle and the start of the next.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Number of comma-separated fields in a statistics payload.
pub const SNAPSHOT_FIELD_COUNT: usize = 7;

/// Consecutive failed cycles before the unreachable alert fires.
pub const UNREACHABLE_STREAK_THRESHOLD: u32 = 3;

/// Load average above which a warning is emitted.
pub const LOAD_AVERAGE_LIMIT: f64 = 30.0;

/// Used/total memory ratio above which a warning is emitted.
pub const MEMORY_USAGE_LIMIT: f64 = 0.8;

/// Used/total disk ratio above which a warning is emitted.
pub const DISK_USAGE_LIMIT: f64 = 0.9;

/// Used/total network ratio above which a warning is emitted.
pub const NETWORK_USAGE_LIMIT: f64 = 0.9;

/// Bytes in one megabyte (binary).
pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Bits in one byte.
pub const BITS_PER_BYTE: f64 = 8.0;
