//! ansi2svg - CLI entry point

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ansi2svg::cli::Cli;
use ansi2svg::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config.render);

    ansi2svg::convert(&cli.input, &cli.output, &config.render)?;

    println!(
        "Successfully converted {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags.
fn init_logging(cli: &Cli) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
