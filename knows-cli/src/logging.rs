//! Logging initialisation for the knows CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr`, so rendered
//! graphs on `stdout` stay parseable, and bridges the `log` facade.
//! `KNOWS_LOG_FORMAT` selects human or JSON lines; `RUST_LOG` selects levels.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "KNOWS_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `KNOWS_LOG_FORMAT` named an encoding other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Resolved subscriber settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LoggingConfig {
    format: LogFormat,
}

impl LoggingConfig {
    fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(env::var)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let format = match lookup(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse()?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(source @ env::VarError::NotUnicode(_)) => {
                return Err(LoggingError::InvalidUnicode {
                    name: LOG_FORMAT_ENV,
                    source,
                });
            }
        };
        Ok(Self { format })
    }

    fn install(self) -> Result<(), LoggingError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let base = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr);
        let output = match self.format {
            LogFormat::Json => base
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
            LogFormat::Human => base.with_target(false).boxed(),
        };

        // Another logger may already own the `log` slot.
        let _ = LogTracer::init();

        tracing_subscriber::registry()
            .with(filter)
            .with(output)
            .try_init()
            .map_err(|source| LoggingError::InstallFailed { source })
    }
}

/// Install global structured logging if it has not already been configured.
///
/// A subscriber installed by someone else is reported on `stderr` and left in
/// place.
///
/// # Errors
/// Returns [`LoggingError`] if `KNOWS_LOG_FORMAT` is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match LoggingConfig::from_env()?.install() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            eprintln!("structured logging already configured elsewhere: {source}");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn format_names_parse(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[test]
    fn unknown_format_is_reported_verbatim() {
        let err = "yaml".parse::<LogFormat>().expect_err("yaml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absent_variable_selects_human_output() {
        let config = LoggingConfig::from_lookup(|_| Err(env::VarError::NotPresent))
            .expect("absent variable is valid");
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn lookup_reads_the_format_variable() {
        let config = LoggingConfig::from_lookup(|name| {
            assert_eq!(name, LOG_FORMAT_ENV);
            Ok("json".to_owned())
        })
        .expect("json is supported");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn non_unicode_value_names_the_variable() {
        let err = LoggingConfig::from_lookup(|_| {
            Err(env::VarError::NotUnicode(OsString::from("bad")))
        })
        .expect_err("non-unicode value must fail");
        assert!(matches!(
            err,
            LoggingError::InvalidUnicode { name: LOG_FORMAT_ENV, .. }
        ));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
