//! The build plugin: read an SVG, minify it, write it into the build output.
//!
//! ```no_run
//! use svg_minify::{BuildContext, BuildParticipant, PluginOptions, svg_minify};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plugin = svg_minify(PluginOptions::default());
//! plugin.on_build_start(&BuildContext::new("./_fresh"))?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use path_clean::PathClean;
use tracing::{debug, debug_span};

use crate::config::PluginOptions;
use crate::error::PluginError;
use crate::optimizer::{Minifier, OptimizeConfig, Optimizer};
use crate::preset::{Pass, Preset};

/// Name the plugin reports to the build host.
pub const PLUGIN_NAME: &str = "svg-minify";

/// What the host knows at build start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Build output directory, absolute or relative to the working directory
    pub output_directory: PathBuf,
}

impl BuildContext {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }
}

/// A participant in the host's build lifecycle.
///
/// The host calls [`BuildParticipant::on_build_start`] once per build, after
/// it has resolved its own configuration. An error aborts the build.
pub trait BuildParticipant {
    type Error: std::error::Error + Send + Sync + 'static;

    fn name(&self) -> &str;

    fn on_build_start(&self, ctx: &BuildContext) -> Result<(), Self::Error>;
}

/// Minifies one SVG file into the build output when the build starts.
#[derive(Debug, Clone)]
pub struct SvgMinifyPlugin<O = Minifier> {
    options: PluginOptions,
    optimizer: O,
}

/// Create the plugin with the built-in minifier.
pub fn svg_minify(options: PluginOptions) -> SvgMinifyPlugin {
    SvgMinifyPlugin::new(options)
}

impl SvgMinifyPlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self::with_optimizer(options, Minifier)
    }
}

impl<O: Optimizer> SvgMinifyPlugin<O> {
    /// Use a different optimizer backend.
    pub fn with_optimizer(options: PluginOptions, optimizer: O) -> Self {
        Self { options, optimizer }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// The optimizer settings used for every build.
    ///
    /// Hidden-element removal stays off: sprite sheets keep symbols with an
    /// empty viewBox and `display="none"` wrappers that are only referenced
    /// from `<use>` elsewhere.
    pub fn optimize_config(&self) -> OptimizeConfig {
        OptimizeConfig {
            path: Some(self.options.input.clone()),
            multipass: self.options.multipass,
            preset: Preset::default().with_override(Pass::RemoveHiddenElems, false),
        }
    }
}

impl<O: Optimizer> BuildParticipant for SvgMinifyPlugin<O> {
    type Error = PluginError;

    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn on_build_start(&self, ctx: &BuildContext) -> Result<(), PluginError> {
        let _span = debug_span!("build_start", plugin = PLUGIN_NAME).entered();

        let input = &self.options.input;
        let svg = fs::read_to_string(input).map_err(|source| PluginError::Read {
            path: input.clone(),
            source,
        })?;
        debug!(path = %input.display(), bytes = svg.len(), "read input");

        let minified = self
            .optimizer
            .optimize(&svg, &self.optimize_config())
            .map_err(|source| PluginError::Optimize {
                path: input.clone(),
                source,
            })?;

        let target = resolve_output(&ctx.output_directory, &self.options.output)
            .map_err(|source| PluginError::ResolveOutput { source })?;
        fs::write(&target, &minified).map_err(|source| PluginError::Write {
            path: target.clone(),
            source,
        })?;
        debug!(path = %target.display(), bytes = minified.len(), "wrote output");

        if !self.options.silent {
            println!("{}", "SVG has been minified.".green().bold());
        }

        Ok(())
    }
}

/// Resolve `output` against the build output directory.
///
/// An absolute `output` is returned unchanged. Otherwise it is joined onto the
/// output directory, which is itself made absolute against the working
/// directory, and `.`/`..` components are collapsed.
pub fn resolve_output(output_directory: &Path, output: &Path) -> std::io::Result<PathBuf> {
    if output.is_absolute() {
        return Ok(output.to_path_buf());
    }

    let base = if output_directory.is_absolute() {
        output_directory.to_path_buf()
    } else {
        std::env::current_dir()?.join(output_directory)
    };
    Ok(base.join(output).clean())
}
