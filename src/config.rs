//! Plugin options and their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default SVG to read, relative to the working directory of the build.
pub const DEFAULT_INPUT: &str = "./static/sprites.svg";

/// Default destination, relative to the build output directory.
pub const DEFAULT_OUTPUT: &str = "./static/sprites.svg";

/// Options set when the plugin is created. Every field has its own default.
///
/// ```
/// use svg_minify::PluginOptions;
///
/// let options = PluginOptions {
///     multipass: false,
///     ..PluginOptions::default()
/// };
/// assert!(!options.silent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginOptions {
    /// SVG file to minify, relative to the working directory
    pub input: PathBuf,
    /// Where to write the result, relative to the build output directory
    pub output: PathBuf,
    /// Re-run the optimizer until the output stops shrinking
    pub multipass: bool,
    /// Suppress the completion message
    pub silent: bool,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            multipass: true,
            silent: false,
        }
    }
}

impl PluginOptions {
    /// Parse options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and parse a TOML options file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
