//! The optimizer seam used by the build plugin, and the built-in minifier.

use std::path::PathBuf;

use tracing::{debug, debug_span};

use crate::error::SvgError;
use crate::optimize::optimize;
use crate::parse::parse_svg;
use crate::preset::Preset;
use crate::serialize::serialize;

/// Upper bound on optimization rounds when multipass is on.
pub const MAX_MULTIPASS: usize = 10;

/// Settings for a single optimizer invocation.
#[derive(Debug, Clone, Default)]
pub struct OptimizeConfig {
    /// Where the SVG came from. Only used for diagnostics.
    pub path: Option<PathBuf>,
    /// Repeat the passes until the output stops shrinking
    pub multipass: bool,
    pub preset: Preset,
}

/// Something that turns SVG text into optimized SVG text.
pub trait Optimizer {
    fn optimize(&self, svg: &str, config: &OptimizeConfig) -> Result<String, SvgError>;
}

/// The built-in SVG minifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier;

impl Optimizer for Minifier {
    fn optimize(&self, svg: &str, config: &OptimizeConfig) -> Result<String, SvgError> {
        let _span = debug_span!("optimize", path = ?config.path).entered();

        let rounds = if config.multipass { MAX_MULTIPASS } else { 1 };
        let mut best = round(svg, &config.preset)?;
        debug!(round = 1, bytes = best.len(), "optimized");

        for n in 2..=rounds {
            let next = round(&best, &config.preset)?;
            debug!(round = n, bytes = next.len(), "optimized");
            if next.len() >= best.len() {
                break;
            }
            best = next;
        }

        Ok(best)
    }
}

fn round(svg: &str, preset: &Preset) -> Result<String, SvgError> {
    let mut doc = parse_svg(svg)?;
    optimize(&mut doc, preset);
    Ok(serialize(&doc))
}
