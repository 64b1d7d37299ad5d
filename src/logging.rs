//! Logging setup for the `svg-minify` binary.
//!
//! The library only emits `tracing` events; embedding hosts install their own
//! subscriber.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors
    Error,
    #[default]
    Warn,
    Info,
    /// Per-step detail: bytes read, optimizer rounds, resolved output path
    Debug,
}

impl LogLevel {
    /// Map `-v` occurrences to a level.
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Level for the CLI flags: `--quiet` means errors only, otherwise `-v` counts.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            LogLevel::Error
        } else {
            Self::from_verbosity(verbose)
        }
    }

    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Only the first call has any effect.
pub fn init_logging(level: LogLevel) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("svg_minify={}", level.as_filter())));

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        // A host may already have installed a global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
