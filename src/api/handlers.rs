//! API handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::api::AppState;
use crate::types::{Product, RecordId, User};

/// Get all users
#[utoipa::path(
    get,
    path = "/user/v1/users",
    tag = "users",
    responses((status = 200, description = "All users in seed order", body = [User]))
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.catalog.users().to_vec())
}

/// Get a user by id
///
/// A non-numeric or unknown id matches no record and yields `null`.
#[utoipa::path(
    get,
    path = "/user/v1/users/id/{userId}",
    tag = "users",
    params(("userId" = u64, Path, description = "Numeric id of the user")),
    responses((status = 200, description = "The matching user, or null when absent"))
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Option<User>> {
    let user = parse_id(&user_id).and_then(|id| state.catalog.user(id).cloned());

    Json(user)
}

/// Acknowledge a user creation request
///
/// No record is stored; the endpoint only echoes the id back.
#[utoipa::path(
    post,
    path = "/user/v1/users/{userId}",
    tag = "users",
    params(("userId" = u64, Path, description = "Numeric id of the user")),
    responses((status = 200, description = "Plain-text acknowledgement"))
)]
pub async fn create_user(Path(user_id): Path<String>) -> String {
    format!("Hello {user_id}")
}

/// Get all products
#[utoipa::path(
    get,
    path = "/product/v1/products",
    tag = "products",
    responses((status = 200, description = "All products in seed order", body = [Product]))
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Get a product by id
///
/// A non-numeric or unknown id matches no record and yields `null`.
#[utoipa::path(
    get,
    path = "/product/v1/products/id/{productId}",
    tag = "products",
    params(("productId" = u64, Path, description = "Numeric id of the product")),
    responses((status = 200, description = "The matching product, or null when absent"))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Json<Option<Product>> {
    let product = parse_id(&product_id).and_then(|id| state.catalog.product(id).cloned());

    Json(product)
}

/// Acknowledge a product creation request
///
/// No record is stored; the endpoint only echoes the id back.
#[utoipa::path(
    post,
    path = "/product/v1/products/{productId}",
    tag = "products",
    params(("productId" = u64, Path, description = "Numeric id of the product")),
    responses((status = 200, description = "Plain-text acknowledgement"))
)]
pub async fn create_product(Path(product_id): Path<String>) -> String {
    format!("This is product {product_id}")
}

/// Ids arrive as raw path segments; anything that fails to parse can
/// never equal a stored id, so it degrades to an absent lookup.
fn parse_id(raw: &str) -> Option<RecordId> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_digits_only() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id(""), None);
    }
}
