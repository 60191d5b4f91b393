use crate::errors::FetchError;

/// Retrieves the current statistics payload from a fixed endpoint.
pub trait IStatsSource: Send + Sync {
    /// Fetch the raw payload text. Blocks until the payload arrives or
    /// the transport gives up.
    fn fetch(&self) -> Result<String, FetchError>;

    /// Human-readable description of where payloads come from.
    fn describe(&self) -> String;
}
