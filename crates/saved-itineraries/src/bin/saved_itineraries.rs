//! Inspect and edit the saved-itinerary collection stored on this device.
//!
//! This binary delegates to `saved_itineraries::cli` for option resolution
//! and command execution, keeping the behaviour testable without spawning a
//! process.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use saved_itineraries::cli::{CliArgs, CliError, execute, open_store, resolve_options};
use saved_itineraries::config::SavedItinerariesSettings;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            write_stderr(&format!("create Tokio runtime: {err}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&args)) {
        Ok(lines) => {
            write_lines(&lines);
            ExitCode::SUCCESS
        }
        Err(err) => {
            write_stderr(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs) -> Result<Vec<String>, CliError> {
    let settings =
        SavedItinerariesSettings::load_from_iter([OsString::from("saved-itineraries")])
            .map_err(|err| CliError::LoadSettings {
                message: err.to_string(),
            })?;
    let options = resolve_options(args, settings)?;
    let store = open_store(&options, Arc::new(DefaultClock))?;
    execute(&store, &args.command, options.locale).await
}

fn write_lines(lines: &[String]) {
    let mut out = io::stdout().lock();
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}

fn write_stderr(message: &str) {
    if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
        drop(err);
    }
}
