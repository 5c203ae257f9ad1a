//! OpenAPI schema aggregation
//!
//! The schema document is a pure function of the static route
//! annotations in [`crate::api::handlers`]. It is assembled once at
//! startup and served verbatim alongside the interactive UI.

use utoipa::OpenApi;

use crate::api::handlers;
use crate::types::{Product, User};

/// Aggregated schema covering every operation the router exposes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Minimart API",
        description = "A minimal catalog API serving seeded users and products"
    ),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::list_products,
        handlers::get_product,
        handlers::create_product,
    ),
    components(schemas(User, Product)),
    tags(
        (name = "users", description = "User collection endpoints"),
        (name = "products", description = "Product collection endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_every_operation() {
        let doc = ApiDoc::openapi();

        for path in [
            "/user/v1/users",
            "/user/v1/users/id/{userId}",
            "/user/v1/users/{userId}",
            "/product/v1/products",
            "/product/v1/products/id/{productId}",
            "/product/v1/products/{productId}",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "schema is missing {path}"
            );
        }
    }

    #[test]
    fn schema_declares_record_components() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components section");

        assert!(components.schemas.contains_key("User"));
        assert!(components.schemas.contains_key("Product"));
    }
}
