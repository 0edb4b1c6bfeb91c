//! Order endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path};
use crate::domain::order::{LineItem, Order, OrderId};
use crate::domain::user::{User, UserId};

/// Request to place an order
///
/// `items` is kept as raw JSON so that a missing or non-list value can be
/// rejected with a client error before it reaches the ledger.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderApiRequest {
    #[serde(default)]
    pub items: Value,
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<String>,
}

/// Order representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub user_id: u64,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub status: String,
    pub created_at: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id().to_string(),
            user_id: order.user_id().value(),
            items: order.items().to_vec(),
            total: order.total(),
            status: order.status().to_string(),
            created_at: order.created_at().to_rfc3339(),
        }
    }
}

/// Newly created order with details about the ordering user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrderResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub items_count: usize,
}

impl CreatedOrderResponse {
    fn new(order: &Order, user: Option<&User>) -> Self {
        Self {
            order: OrderResponse::from(order),
            user_email: user.and_then(User::email).map(String::from),
            user_name: user.map(|u| u.name().to_string()),
            items_count: order.items().len(),
        }
    }
}

/// List orders response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub count: usize,
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<Order>> for ListOrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        let orders: Vec<OrderResponse> = orders.iter().map(OrderResponse::from).collect();

        Self {
            count: orders.len(),
            orders,
        }
    }
}

/// Parse the `items` field, which must be a non-empty list of line items
fn parse_items(items: Value) -> Result<Vec<LineItem>, ApiError> {
    match items {
        Value::Array(list) if !list.is_empty() => serde_json::from_value(Value::Array(list))
            .map_err(|e| ApiError::bad_request(format!("invalid items: {}", e))),
        _ => Err(ApiError::bad_request("items must be a non-empty list")),
    }
}

/// POST /users/{user_id}/orders
pub async fn create_order(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(request): Json<CreateOrderApiRequest>,
) -> Result<(StatusCode, Json<CreatedOrderResponse>), ApiError> {
    debug!(user_id, "Creating order");

    let items = parse_items(request.items).inspect_err(|e| {
        warn!(user_id, error = %e.response.error, "Order items rejected");
    })?;

    let user_id = UserId::new(user_id);
    let user = state.user_directory.get_by_id(user_id).await?;
    let order = state.order_ledger.create(user_id, items).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedOrderResponse::new(&order, user.as_ref())),
    ))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    let orders = match query.status.as_deref() {
        Some(status) => {
            debug!(status, "Listing orders by status");
            state.order_ledger.list_by_status(status).await?
        }
        None => {
            debug!("Listing all orders");
            state.order_ledger.list_all().await?
        }
    };

    Ok(Json(ListOrdersResponse::from(orders)))
}

/// GET /users/{user_id}/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<ListOrdersResponse>, ApiError> {
    debug!(user_id, "Listing orders for user");

    let orders = state.order_ledger.list_by_user(UserId::new(user_id)).await?;

    Ok(Json(ListOrdersResponse::from(orders)))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    debug!(order_id = %order_id, "Getting order");

    let order = state
        .order_ledger
        .get_by_id(&OrderId::new(order_id))
        .await?
        .ok_or_else(|| ApiError::not_found("Order not found"))?;

    Ok(Json(OrderResponse::from(&order)))
}
