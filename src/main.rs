mod domain;
mod clients;
mod users;

mod app_system;

#[cfg(test)]
mod mock_framework;

use goose::prelude::*;
use tracing::info;

use crate::app_system::{register_scenarios, setup_tracing};

/// Host, user count, hatch rate and run time come from goose's own command
/// line (`--host`, `-u`, `-r`, `-t`).
#[tokio::main]
async fn main() -> Result<(), GooseError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let metrics = register_scenarios(GooseAttack::initialize()?)?.execute().await?;

    info!(request_names = metrics.requests.len(), "Load test finished");
    Ok(())
}
