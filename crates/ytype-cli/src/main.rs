//! # ytype CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// ytype — canonicalize and check YANG scalar values.
#[derive(Parser, Debug)]
#[command(name = "ytype", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a wire value and print its canonical form.
    Canon(ytype_cli::canon::CanonArgs),
    /// Print the inclusive bounds of a numeric type.
    Bounds(ytype_cli::bounds::BoundsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Canon(args) => ytype_cli::canon::run(&args)?,
        Commands::Bounds(args) => ytype_cli::bounds::run(&args)?,
    };
    println!("{output}");

    Ok(())
}
