use std::time::Duration;

use goose::prelude::*;

use crate::clients;

/// Pause between two admin transactions.
pub const ADMIN_WAIT: (Duration, Duration) = (Duration::from_secs(2), Duration::from_secs(5));

/// An operator polling the gateway's metrics. Stateless.
pub fn admin_scenario() -> Result<Scenario, GooseError> {
    let (min_wait, max_wait) = ADMIN_WAIT;

    Ok(scenario!("AdminUser")
        .set_weight(1)?
        .set_wait_time(min_wait, max_wait)?
        .register_transaction(transaction!(view_metrics).set_name("view_metrics").set_weight(1)?)
        .register_transaction(transaction!(view_prometheus).set_name("view_prometheus").set_weight(1)?))
}

pub async fn view_metrics(user: &mut GooseUser) -> TransactionResult {
    clients::metrics(user).await?;
    Ok(())
}

pub async fn view_prometheus(user: &mut GooseUser) -> TransactionResult {
    clients::prometheus(user).await?;
    Ok(())
}
