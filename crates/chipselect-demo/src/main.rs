//! ChipSelect demo entry point.

mod catalog;
mod error;
mod script;
mod session;

use clap::Parser;
use error::DemoResult;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chipselect-demo", about, long_about = None)]
struct Cli {
    /// Option catalog (JSON)
    catalog: PathBuf,

    /// Scripted session (JSON list of steps)
    script: PathBuf,

    /// Open the suggestion panel on first focus
    #[arg(long)]
    auto_open: bool,

    /// Grow the input horizontally instead of wrapping
    #[arg(long)]
    single_line: bool,

    /// Ignore responses to requests older than the last applied one
    #[arg(long)]
    latest_wins: bool,

    /// Width available to the input, in pixels
    #[arg(long, default_value_t = 240.0)]
    width: f64,
}

fn main() {
    env_logger::init();
    log::info!("Starting ChipSelect demo");

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> DemoResult<()> {
    let catalog = catalog::load_catalog(&cli.catalog)?;
    let steps = script::load_script(&cli.script)?;

    let mut config = catalog.config.clone();
    config.auto_open_menu |= cli.auto_open;
    config.single_line |= cli.single_line;
    if cli.latest_wins {
        config.race_policy = chipselect_core::RacePolicy::LatestRequestWins;
    }

    let transcript = session::Session::new(&catalog, config, cli.width).run(&steps)?;
    println!("{}", serde_json::to_string_pretty(&transcript)?);
    Ok(())
}
