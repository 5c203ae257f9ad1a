//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// The route set is fixed at startup; unmatched requests get axum's
/// default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/user/v1/users", get(handlers::list_users))
        .route("/user/v1/users/id/:user_id", get(handlers::get_user))
        .route("/user/v1/users/:user_id", post(handlers::create_user))
        .route("/product/v1/products", get(handlers::list_products))
        .route(
            "/product/v1/products/id/:product_id",
            get(handlers::get_product),
        )
        .route(
            "/product/v1/products/:product_id",
            post(handlers::create_product),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
