use goose::goose::GooseResponse;
use goose::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::domain::{FavoriteRequest, OrderRequest, PaymentRequest};

/// Outcome of one named request. Non-2xx statuses are still `Ok`; goose marks
/// them failed in the request metrics.
pub type RequestResult = Result<GooseResponse, Box<TransactionError>>;

/// GET `path`, reported under `label`.
pub async fn named_get(user: &mut GooseUser, path: &str, label: &str) -> RequestResult {
    let request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path)
        .name(label)
        .build();

    send(user, request, label).await
}

/// POST `body` as JSON to `path`, reported under `label`.
pub async fn named_post<T: Serialize + ?Sized>(
    user: &mut GooseUser,
    path: &str,
    label: &str,
    body: &T,
) -> RequestResult {
    let request_builder = user.get_request_builder(&GooseMethod::Post, path)?.json(body);

    let request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path(path)
        .name(label)
        .set_request_builder(request_builder)
        .build();

    send(user, request, label).await
}

async fn send(user: &mut GooseUser, request: GooseRequest<'_>, label: &str) -> RequestResult {
    let goose = user.request(request).await?;
    let metric = &goose.request;

    if metric.success {
        debug!(label, status = metric.status_code, elapsed_ms = metric.response_time, "Request succeeded");
    } else {
        warn!(
            label,
            status = metric.status_code,
            elapsed_ms = metric.response_time,
            error = %metric.error,
            "Request failed"
        );
    }

    Ok(goose)
}

get_endpoint!(fn get_product(product_id: u32) at "/app/api/products/{product_id}" as "/app/api/products/[id]");
get_endpoint!(fn list_products() at "/app/api/products" as "/app/api/products");
get_endpoint!(fn get_user(user_id: u32) at "/app/api/users/{user_id}" as "/app/api/users/[id]");
get_endpoint!(fn get_order(order_id: u64) at "/app/api/orders/{order_id}" as "/app/api/orders/[id]");
get_endpoint!(fn health() at "/app/actuator/health" as "/actuator/health");
get_endpoint!(fn metrics() at "/app/actuator/metrics" as "/actuator/metrics");
get_endpoint!(fn prometheus() at "/app/actuator/prometheus" as "/actuator/prometheus");

#[instrument(skip(user, favorite))]
pub async fn add_favorite(user: &mut GooseUser, user_id: u32, favorite: &FavoriteRequest) -> RequestResult {
    debug!(product_id = favorite.product_id, "Sending request");
    let path = format!("/app/api/users/{user_id}/favorites");
    named_post(user, &path, "/app/api/users/[id]/favorites", favorite).await
}

#[instrument(skip_all)]
pub async fn create_order(user: &mut GooseUser, order: &OrderRequest) -> RequestResult {
    debug!(customer_id = order.customer_id, "Sending request");
    named_post(user, "/app/api/orders", "/app/api/orders", order).await
}

#[instrument(skip_all)]
pub async fn create_payment(user: &mut GooseUser, payment: &PaymentRequest) -> RequestResult {
    debug!(order_id = payment.order_id, "Sending request");
    named_post(user, "/app/api/payments", "/app/api/payments", payment).await
}
