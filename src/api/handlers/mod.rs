//! Resource endpoints for users and orders

pub mod orders;
pub mod users;

use axum::{
    routing::get,
    Router,
};

use super::state::AppState;

/// Create the user and order router
pub fn create_resource_router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{user_id}/profile", get(users::get_user_profile))
        // Orders
        .route(
            "/users/{user_id}/orders",
            get(orders::list_user_orders).post(orders::create_order),
        )
        .route("/orders", get(orders::list_orders))
        .route("/orders/{order_id}", get(orders::get_order))
}
