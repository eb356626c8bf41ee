//! `calendar-server`: serves the calendar task API.
//!
//! Configuration is read from `calendar.toml` (or the file named by
//! `CALENDAR_CONFIG`) and `CALENDAR__*` environment variables; a `.env` file
//! in the working directory is loaded first.

use calendar_tasks::{config::Settings, server, telemetry};
use std::process::ExitCode;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            telemetry::init("info");
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&settings.log.filter);
    if let Err(err) = dotenv {
        debug!(error = %err, "no .env file loaded");
    }

    match server::run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server terminated");
            ExitCode::FAILURE
        }
    }
}
