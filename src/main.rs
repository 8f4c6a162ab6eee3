use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use slcsp::cli::Cli;
use slcsp::pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Results own stdout, diagnostics go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let inputs = cli.inputs();
    let stdout = io::stdout();
    pipeline::run(&inputs, stdout.lock())?;

    Ok(())
}
