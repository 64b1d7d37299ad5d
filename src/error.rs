use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while optimizing SVG text.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Invalid path data: {0}")]
    InvalidPath(String),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Errors surfaced to the build host from the build-start hook.
///
/// The underlying I/O or optimizer error is kept as the `source`.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve the build output directory: {source}")]
    ResolveOutput {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to optimize {}: {source}", path.display())]
    Optimize {
        path: PathBuf,
        #[source]
        source: SvgError,
    },
}

impl PluginError {
    /// True for failures that came from the file system rather than the optimizer.
    pub fn is_io(&self) -> bool {
        !matches!(self, PluginError::Optimize { .. })
    }
}

/// Errors loading plugin options from a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
