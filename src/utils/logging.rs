//! Logging utilities
//!
//! Records always go to a file in the data directory, so they never mix with
//! the JSON the CLI prints on stdout. `--verbose` adds a compact stderr layer.

use color_eyre::eyre::Result;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
}

/// Filter directive used when neither `RUST_LOG` nor `SITEUI_LOGLEVEL` is set
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

pub fn initialize_logging(verbose: bool) -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(directory.clone())?;
    let log_path = directory.join(LOG_FILE.clone());
    let log_file = std::fs::File::create(&log_path)?;
    std::env::set_var(
        "RUST_LOG",
        std::env::var("RUST_LOG")
            .or_else(|_| std::env::var(LOG_ENV.clone()))
            .unwrap_or_else(|_| default_directive(verbose)),
    );
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::from_default_env());
    let stderr_subscriber = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(EnvFilter::from_default_env())
    });
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(stderr_subscriber)
        .with(ErrorLayer::default())
        .init();
    tracing::debug!("logging to {}", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "siteui=info");
        assert_eq!(default_directive(true), "siteui=debug");
        assert_eq!(PROJECT_NAME.as_str(), "SITEUI");
    }
}
