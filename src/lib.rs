//! svg-minify - minify an SVG sprite sheet as part of a build
//!
//! The plugin reads an SVG (by default `./static/sprites.svg`), runs it
//! through an [`Optimizer`], and writes the result into the build output
//! directory when the host signals build start. The built-in [`Minifier`]
//! does the optimization; any other backend can be plugged in with
//! [`SvgMinifyPlugin::with_optimizer`].

mod ast;
mod config;
mod error;
pub mod logging;
mod optimize;
mod optimizer;
mod parse;
mod path;
mod plugin;
mod preset;
mod serialize;

pub use ast::*;
pub use config::*;
pub use error::*;
pub use optimize::optimize;
pub use optimizer::*;
pub use parse::*;
pub use path::*;
pub use plugin::*;
pub use preset::*;
pub use serialize::*;

/// Minify an SVG string with the full default preset.
pub fn minify(svg: &str) -> Result<String, SvgError> {
    Minifier.optimize(svg, &OptimizeConfig::default())
}
