//! Core types for minimart

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Record ID type shared by both collections
pub type RecordId = u64;

/// A member of the user collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub role: String,
}

/// A member of the product collection
///
/// `price` is free text and carries its own currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: String,
}
