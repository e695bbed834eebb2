//! FPC Matrix Decoder - scan-matrix header generator
//!
//! Reads a scancode file describing which FPC pins each key switch bridges
//! and writes the `keymap.h` consumed by the Teensy matrix scanner.

use clap::Parser;
use fpc_matrix::cli::common::{usage_line, SCANCODE_FORMAT_HELP};
use fpc_matrix::cli::GenerateArgs;
use tracing_subscriber::EnvFilter;

/// FPC Matrix Decoder - generate keymap.h from a scancode list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = SCANCODE_FORMAT_HELP)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fpc_matrix={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = cli.generate.execute() {
        eprintln!("Error: {err}");
        if err.shows_usage() {
            eprintln!();
            eprintln!("{}", usage_line());
            eprintln!("{SCANCODE_FORMAT_HELP}");
        }
        std::process::exit(err.exit_code.code());
    }
}
