//! # Brace
//!
//! Interactive prompt and file runner for the Brace language.

use brace::mach::Config;
use clap::Parser;
use std::path::PathBuf;

mod term;

/// A small concatenative stack language
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Run this file instead of starting the interactive prompt
    file: Option<PathBuf>,

    /// How many quotations may run inside each other
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: usize,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let config = Config {
        max_depth: args.max_depth,
    };
    match args.file {
        None => term::main(config),
        Some(path) => match term::run_file(&path, config) {
            Ok(0) => {}
            Ok(_) => std::process::exit(1),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(2);
            }
        },
    }
}

/// Enable with `RUST_LOG=brace=debug` or `RUST_LOG=brace=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
