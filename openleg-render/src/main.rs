//! OpenLeg fixture renderer
//!
//! Prints the JSON API document the conversion engine produces for an
//! entity fixture.
//!
//! Usage:
//!   openleg-render --type bill fixtures/S1234-2013.json --pretty

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use openleg_model::EntityKind;
use openleg_render::{RenderOptions, render_file};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "openleg-render")]
#[command(about = "Render an OpenLeg entity fixture as its JSON API document")]
struct Args {
    /// Path to the JSON fixture (an entity object, or null)
    input: PathBuf,

    /// Entity type of the fixture root, e.g. bill, meeting, calendar
    #[arg(short = 't', long = "type")]
    kind: EntityKind,

    /// Indent the output
    #[arg(long)]
    pretty: bool,

    /// Print a null document instead of failing when conversion fails
    #[arg(long)]
    best_effort: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let options = RenderOptions {
        pretty: args.pretty,
        best_effort: args.best_effort,
    };
    let output = render_file(&args.input, args.kind, &options)?;
    println!("{output}");
    Ok(())
}
