use clap::Parser;
use color_eyre::Result;
use std::io;
use tracing::Level;

use smart_city::ui::{App, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "smart-city")]
#[command(about = "Smart City Management System - manage the buildings of a simulated city")]
#[command(version)]
struct Args {
    /// Print building listings and city statistics as JSON
    #[arg(long)]
    json: bool,

    /// Diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    tracing::info!(?format, "starting");
    let mut app = App::new(io::stdin().lock(), io::stdout().lock()).with_format(format);
    app.run()?;
    tracing::info!(buildings = app.city().len(), "stopped");
    Ok(())
}
