use std::{env, path::PathBuf, sync::Once};

use chrono::{Local, NaiveDate};
use dirs::home_dir;
use tracing_subscriber::{
    filter::{Directive, ParseError},
    fmt, EnvFilter,
};

const DEFAULT_DIR_NAME: &str = ".warehouse_core";
const HOME_ENV: &str = "WAREHOUSE_CORE_HOME";
pub const DEFAULT_LOG_DIRECTIVE: &str = "warehouse_core=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with the default directive.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_DIRECTIVE);
}

/// Initializes the global tracing subscriber; `RUST_LOG` is layered under `directive`.
///
/// Only the first call has an effect. An unparsable directive falls back to
/// the environment filter alone and is reported once the subscriber is up.
pub fn init_tracing_with(directive: &str) {
    TRACING_INIT.call_once(|| {
        let parsed = parse_directive(directive);
        let mut filter = EnvFilter::from_default_env();
        if let Ok(parsed) = &parsed {
            filter = filter.add_directive(parsed.clone());
        }

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();

        if let Err(err) = parsed {
            tracing::warn!(directive, error = %err, "ignoring unparsable log directive");
        }
    });
}

pub fn parse_directive(directive: &str) -> Result<Directive, ParseError> {
    directive.trim().parse()
}

/// Returns the application data directory, defaulting to `~/.warehouse_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Local calendar date, for callers that want "now" as the reference date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
