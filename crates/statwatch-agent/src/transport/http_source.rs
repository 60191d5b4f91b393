//! Blocking HTTP statistics source with a request timeout.

use statwatch_core::config::EndpointConfig;
use statwatch_core::constants::VERSION;
use statwatch_core::errors::FetchError;
use statwatch_core::traits::IStatsSource;

/// Fetches the payload with one `GET` per call. No retries: each attempt
/// is one poll cycle, and the streak decides when failures matter.
#[derive(Debug)]
pub struct HttpStatsSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpStatsSource {
    pub fn new(config: &EndpointConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(format!("statwatch/{VERSION}"))
            // The endpoint is an internal host; always connect directly.
            .no_proxy()
            .build()
            .map_err(|e| FetchError::Transport {
                reason: format!("client build failed: {e}"),
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IStatsSource for HttpStatsSource {
    fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Transport {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Dropping the response discards the body.
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| FetchError::Read {
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
