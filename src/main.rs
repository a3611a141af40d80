//! xml-to-steiner - CLI tool to convert XML net descriptions to Steiner solver input.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use xml_to_steiner::convert;

/// Convert an XML net description into the numeric format of the Steiner solver.
#[derive(Parser, Debug)]
#[command(name = "xml-to-steiner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XML with net configuration
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output net configuration file in raw format
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Print the extracted net as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let net = convert(&args.input, &args.output)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if args.debug {
        let json = serde_json::to_string_pretty(&net)?;
        println!("{}", json);
    }

    Ok(())
}
