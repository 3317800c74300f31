//! # remote-demo
//!
//! Loads configuration, sets up logging on stderr and runs the demo with
//! output on stdout. Configuration problems are logged and skipped, so the
//! demo always runs and the process always exits successfully.

use std::rc::Rc;

use homeremote_adapter_console::ConsoleSink;
use remote_demo::config::{Config, LoggingConfig};
use remote_demo::scenario;
use tracing_subscriber::EnvFilter;

fn main() {
    let (config, problems) = Config::load();

    let (filter, filter_error) = match config.logging.env_filter() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(LoggingConfig::default().filter), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for err in &problems {
        tracing::warn!(%err, source = ?std::error::Error::source(err), "ignoring configuration problem");
    }
    if let Some(err) = filter_error {
        tracing::warn!(%err, filter = %config.logging.filter, "invalid log filter, using default");
    }

    tracing::info!(
        language = %config.output.language,
        format = %config.output.format,
        "starting remote control demo"
    );

    let sink = Rc::new(ConsoleSink::stdout(config.output));
    let outcome = scenario::run(sink);

    tracing::info!(
        light = %outcome.light,
        television = %outcome.television,
        remaining_history = outcome.remaining_history,
        "demo finished"
    );
}
