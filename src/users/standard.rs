use std::time::Duration;

use goose::prelude::*;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::clients;
use crate::domain::{random_product_id, random_user_id, FavoriteRequest, OrderCreated, OrderRequest, PaymentRequest};

/// Pause between two shopper transactions.
pub const SHOPPER_WAIT: (Duration, Duration) = (Duration::from_secs(1), Duration::from_secs(3));

/// Per-user session state kept in goose session data.
#[derive(Debug, Clone, Default)]
pub struct ShopperSession {
    /// Ids of orders this user created, oldest first.
    orders: Vec<u64>,
}

impl ShopperSession {
    fn record_order(&mut self, order_id: u64) -> usize {
        self.orders.push(order_id);
        self.orders.len()
    }

    fn pick_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u64> {
        self.orders.choose(rng).copied()
    }
}

/// A shopper browsing, favoriting, ordering and paying.
///
/// Browsing dominates: the two product reads carry 5 of the 12 weight units.
pub fn shopper_scenario() -> Result<Scenario, GooseError> {
    let (min_wait, max_wait) = SHOPPER_WAIT;

    Ok(scenario!("StandardUser")
        .set_weight(1)?
        .set_wait_time(min_wait, max_wait)?
        .register_transaction(transaction!(start_session).set_name("start_session").set_on_start())
        .register_transaction(transaction!(browse_products).set_name("browse_products").set_weight(3)?)
        .register_transaction(transaction!(list_products).set_name("list_products").set_weight(2)?)
        .register_transaction(transaction!(get_user_profile).set_name("get_user_profile").set_weight(1)?)
        .register_transaction(transaction!(add_to_favorites).set_name("add_to_favorites").set_weight(2)?)
        .register_transaction(transaction!(create_order).set_name("create_order").set_weight(1)?)
        .register_transaction(transaction!(get_order).set_name("get_order").set_weight(1)?)
        .register_transaction(transaction!(process_payment).set_name("process_payment").set_weight(1)?)
        .register_transaction(transaction!(check_health).set_name("check_health").set_weight(1)?))
}

/// Starts every shopper with no known orders.
pub async fn start_session(user: &mut GooseUser) -> TransactionResult {
    user.set_session_data(ShopperSession::default());
    debug!("Shopper session started");
    Ok(())
}

#[instrument(skip_all)]
pub async fn browse_products(user: &mut GooseUser) -> TransactionResult {
    let product_id = random_product_id(&mut rand::rng());
    clients::get_product(user, product_id).await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn list_products(user: &mut GooseUser) -> TransactionResult {
    clients::list_products(user).await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn get_user_profile(user: &mut GooseUser) -> TransactionResult {
    let user_id = random_user_id(&mut rand::rng());
    clients::get_user(user, user_id).await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn add_to_favorites(user: &mut GooseUser) -> TransactionResult {
    let (user_id, favorite) = {
        let mut rng = rand::rng();
        let favorite = FavoriteRequest {
            product_id: random_product_id(&mut rng),
        };
        (random_user_id(&mut rng), favorite)
    };
    clients::add_favorite(user, user_id, &favorite).await?;
    Ok(())
}

/// Places a one-line order and remembers its id when the API accepts it.
///
/// A 200/201 whose body has no numeric `id` fails the transaction and leaves
/// the session's orders untouched.
#[instrument(skip_all)]
pub async fn create_order(user: &mut GooseUser) -> TransactionResult {
    let order = {
        let mut rng = rand::rng();
        let customer_id = random_user_id(&mut rng);
        let product_id = random_product_id(&mut rng);
        OrderRequest::single_line(customer_id, product_id, &mut rng)
    };

    let mut goose = clients::create_order(user, &order).await?;
    if !matches!(goose.request.status_code, 200 | 201) {
        return Ok(());
    }

    let body = goose.response?.text().await?;
    match serde_json::from_str::<OrderCreated>(&body) {
        Ok(created) => {
            let total_orders = match user.get_session_data_mut::<ShopperSession>() {
                Some(session) => session.record_order(created.id),
                None => {
                    let mut session = ShopperSession::default();
                    let total = session.record_order(created.id);
                    user.set_session_data(session);
                    total
                }
            };
            info!(order_id = created.id, total_orders, "Order recorded");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Accepted order carried no id");
            user.set_failure("order response carried no id", &mut goose.request, None, Some(&body))
        }
    }
}

/// Reads back one of this session's orders. Does nothing until one exists.
#[instrument(skip_all)]
pub async fn get_order(user: &mut GooseUser) -> TransactionResult {
    let order_id = user
        .get_session_data::<ShopperSession>()
        .and_then(|session| session.pick_order(&mut rand::rng()));

    let Some(order_id) = order_id else {
        debug!("No orders yet, skipping");
        return Ok(());
    };
    clients::get_order(user, order_id).await?;
    Ok(())
}

/// Pays for a random order id in 1..=100, created by this session or not.
#[instrument(skip_all)]
pub async fn process_payment(user: &mut GooseUser) -> TransactionResult {
    let payment = PaymentRequest::random(&mut rand::rng());
    clients::create_payment(user, &payment).await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn check_health(user: &mut GooseUser) -> TransactionResult {
    clients::health(user).await?;
    Ok(())
}
