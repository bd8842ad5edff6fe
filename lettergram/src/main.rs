#![forbid(unsafe_code)]

use anyhow::{anyhow, Context, Result};
use lettergram::helpers::{config, pipeline, source::StdinSource};
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::fmt;

async fn histogram() -> Result<()> {
    let config = config::read()
        .map_err(|error| anyhow!(error))
        .with_context(|| format!("failed to load {}", config::path().display()))?;

    info!(
        "Reading standard input in chunks of {} bytes.",
        config.chunk_size()
    );

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    let counter = pipeline::run(
        StdinSource::stdin(config.chunk_size()),
        &mut sink,
        &config.histogram(),
    )
    .await
    .map_err(|error| anyhow!(error))
    .context("failed to build the histogram")?;

    info!("Histogram built from {} letters.", counter.total());

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout only carries the report.
    #[cfg(not(debug_assertions))]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    #[cfg(debug_assertions)]
    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    match histogram().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{:#}", error);
            ExitCode::FAILURE
        },
    }
}
