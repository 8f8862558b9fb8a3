//! fixstem CLI binary.

use std::io::Write;
use std::process;

use env_logger::Builder;
use log::LevelFilter;

use fixstem::cli::args::*;
use fixstem::cli::commands::*;

fn main() {
    // Accept the single-dash -stemmlength before handing off to clap
    let args = FixStemArgs::parse_normalized();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
