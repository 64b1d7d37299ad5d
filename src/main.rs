use std::path::PathBuf;

use clap::Parser;
use svg_minify::logging::{LogLevel, init_logging};
use svg_minify::{BuildContext, BuildParticipant, PluginOptions, svg_minify};

/// Runs the plugin's build-start hook once, the way a build host would.
#[derive(Parser)]
#[command(name = "svg-minify")]
#[command(about = "Minify an SVG sprite sheet into a build output directory", long_about = None)]
struct Cli {
    /// TOML file with plugin options; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SVG file to minify, relative to the working directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination, relative to the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Build output directory
    #[arg(short = 'd', long, default_value = ".")]
    out_dir: PathBuf,

    /// Run the optimizer once instead of until the output stops shrinking
    #[arg(long)]
    no_multipass: bool,

    /// Don't print the completion message
    #[arg(short, long)]
    silent: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(LogLevel::from_flags(cli.verbose, cli.quiet));

    let mut options = match &cli.config {
        Some(path) => PluginOptions::load(path)?,
        None => PluginOptions::default(),
    };
    if let Some(input) = cli.input {
        options.input = input;
    }
    if let Some(output) = cli.output {
        options.output = output;
    }
    if cli.no_multipass {
        options.multipass = false;
    }
    if cli.silent {
        options.silent = true;
    }

    let plugin = svg_minify(options);
    tracing::info!(plugin = plugin.name(), "running build start hook");
    plugin.on_build_start(&BuildContext::new(cli.out_dir))?;

    Ok(())
}
