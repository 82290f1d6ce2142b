//! svg2glif CLI
//!
//! Usage:
//!   svg2glif [OPTIONS] [FILE]
//!   svg2glif --path <D> --name <NAME> [--unicode <CHAR>]
//!
//! Options:
//!   -o, --output <DIR>   Output directory for .glif files
//!   -c, --config <FILE>  Conversion config (TOML format)
//!   --strict             Reject incomplete coordinate groups
//!   -v, --verbose        Increase log verbosity
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, LevelFilter};

use svg2glif::source::read_svg_font_file;
use svg2glif::{
    assemble, convert_glyphs, render_glif, save_glif, ConversionConfig, ConvertConfig, Metrics,
    PathError,
};

#[derive(Parser)]
#[command(name = "svg2glif")]
#[command(about = "Convert SVG font glyphs and path data into GLIF files")]
struct Cli {
    /// SVG font file whose glyphs are converted
    #[arg(required_unless_present = "path")]
    input: Option<PathBuf>,

    /// Convert a single path-data string instead of a font
    #[arg(long, conflicts_with = "input")]
    path: Option<String>,

    /// Glyph name for --path
    #[arg(long, default_value = "unnamed_glyph")]
    name: String,

    /// Unicode character for --path
    #[arg(long)]
    unicode: Option<char>,

    /// Output directory (for --path, prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Conversion config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject commands whose arguments don't fill whole coordinate groups
    #[arg(long)]
    strict: bool,

    /// Default advance width
    #[arg(long)]
    width: Option<f64>,

    /// Default advance height
    #[arg(long)]
    height: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const DEFAULT_OUTPUT_DIR: &str = "glif_output";

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Load conversion config
    let mut conversion = match &cli.config {
        Some(path) => match ConversionConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ConversionConfig::default(),
    };
    if cli.strict {
        conversion = conversion.with_strict(true);
    }
    if cli.width.is_some() || cli.height.is_some() {
        let metrics = Metrics::new(
            cli.width.unwrap_or(conversion.defaults.advance_width),
            cli.height.unwrap_or(conversion.defaults.advance_height),
        );
        conversion = conversion.with_metrics(metrics);
    }
    let config = ConvertConfig::new().with_conversion(conversion);

    let ok = match &cli.path {
        Some(path) => convert_single(&cli, path, &config),
        None => convert_font(&cli, &config),
    };
    if !ok {
        std::process::exit(1);
    }
}

fn convert_single(cli: &Cli, path: &str, config: &ConvertConfig) -> bool {
    let options = config.conversion.options_for(&cli.name, None);
    let record = match assemble(&cli.name, cli.unicode, path, &options) {
        Ok(record) => record,
        Err(e) => {
            report_path_error(&e.source, path, &cli.name);
            return false;
        }
    };
    let glif = render_glif(&record, &config.glif);

    match &cli.output {
        Some(dir) => match save_glif(&cli.name, &glif, dir) {
            Ok(_) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        },
        None => {
            print!("{}", glif);
            true
        }
    }
}

fn convert_font(cli: &Cli, config: &ConvertConfig) -> bool {
    let Some(input) = &cli.input else {
        error!("No input file given");
        return false;
    };
    let glyphs = match read_svg_font_file(input) {
        Ok(glyphs) => glyphs,
        Err(e) => {
            error!("{}: {}", input.display(), e);
            return false;
        }
    };

    let out_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let report = convert_glyphs(&glyphs, &out_dir, config);

    info!(
        "Converted {} glyph(s) into {} ({} skipped, {} failed)",
        report.written.len(),
        out_dir.display(),
        report.skipped.len(),
        report.failures.len()
    );
    report.is_success()
}

fn report_path_error(err: &PathError, path: &str, name: &str) {
    eprint!("{}", err.format(path, name));
}
