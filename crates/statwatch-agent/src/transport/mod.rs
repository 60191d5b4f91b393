//! Transport layer — fetching the statistics payload over HTTP.

pub mod http_source;

pub use http_source::HttpStatsSource;
