//! padsheet: per-value PCB placement-assist sheet generator
//!
//! Converts an EAGLE-style board file into a PDF with one page per
//! (layer, value, name-prefix) component group, highlighting that group's
//! pads against the rest of the layer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use padsheet::board::Extractor;
use padsheet::config;
use padsheet::render::{build_sheets, PdfCanvas, SheetStyle};

/// Generates placement-assist sheets from a board file.
///
/// LAYER is a numeric layer identifier, or "top"/"bottom" (case-insensitive)
/// to use the board's declared copper layers.
#[derive(Parser, Debug)]
#[command(name = "padsheet")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board XML file
    #[arg(value_name = "BOARD_FILE")]
    board_file: PathBuf,

    /// Layer to generate sheets for: a layer number, "top" or "bottom"
    #[arg(value_name = "LAYER")]
    layer: String,

    /// Path of the PDF to write
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Path to a style configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the padsheet converter.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load the optional style configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Extract the board model
    let extractor = Extractor::new();
    let board = match extractor.extract_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            error!(error = %e, "Board extraction failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        width = board.bounds.width(),
        height = board.bounds.height(),
        components = board.components().len(),
        "Extracted board"
    );

    // Resolve the layer argument against the board's declared copper layers
    let layer = if args.layer.eq_ignore_ascii_case("top") {
        board.top_layer.clone()
    } else if args.layer.eq_ignore_ascii_case("bottom") {
        board.bottom_layer.clone()
    } else {
        args.layer.clone()
    };

    // Lay out and write the sheets
    let style = SheetStyle::from(&cfg.style);
    let mut canvas = PdfCanvas::new();
    build_sheets(&mut canvas, &board, &layer, &style);

    info!(pages = canvas.page_count(), layer = %layer, "Writing output");

    match canvas.finish(&args.output_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Output failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(get_log_level(3, true, "warn"), Level::ERROR);
    }

    #[test]
    fn config_level_applies_without_verbosity_flags() {
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "bogus"), Level::WARN);
    }

    #[test]
    fn verbosity_flags_escalate() {
        assert_eq!(get_log_level(1, false, "warn"), Level::INFO);
        assert_eq!(get_log_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(get_log_level(3, false, "warn"), Level::TRACE);
    }
}
