use std::path::Path;

use anyhow::Context;
use statwatch_agent::{HttpStatsSource, StdoutSink, ThreadSleeper};
use statwatch_core::config::{StatwatchConfig, PROJECT_CONFIG_FILE};
use statwatch_core::tracing::init_tracing;
use statwatch_monitor::Poller;

fn main() -> anyhow::Result<()> {
    let config = StatwatchConfig::load(Path::new(PROJECT_CONFIG_FILE))
        .with_context(|| format!("failed to load {PROJECT_CONFIG_FILE}"))?;
    init_tracing(&config.observability.log_level);

    let source =
        HttpStatsSource::new(&config.endpoint).context("failed to set up statistics source")?;
    let mut poller = Poller::from_config(source, StdoutSink::new(), ThreadSleeper, &config);
    poller.run()
}
