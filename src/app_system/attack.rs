use goose::prelude::*;

use crate::users::{admin_scenario, shopper_scenario};

/// Registers both user classes on `attack`. Equal scenario weights split the
/// users evenly between shoppers and admins.
pub fn register_scenarios(attack: GooseAttack) -> Result<GooseAttack, GooseError> {
    Ok(attack
        .register_scenario(shopper_scenario()?)
        .register_scenario(admin_scenario()?))
}
