//! Immutable in-memory resource store

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{Product, RecordId, User};

/// The static dataset backing the API.
///
/// Both collections are seeded once at startup and never mutated
/// afterwards, so concurrent reads need no coordination. The create
/// endpoints acknowledge requests without ever touching the store.
#[derive(Debug)]
pub struct Catalog {
    users: Vec<User>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from explicit collections, enforcing id
    /// uniqueness within each one.
    pub fn new(users: Vec<User>, products: Vec<Product>) -> Result<Self> {
        check_unique("user", users.iter().map(|u| u.id))?;
        check_unique("product", products.iter().map(|p| p.id))?;

        Ok(Self { users, products })
    }

    /// The fixed seed dataset served by the API.
    pub fn seeded() -> Result<Self> {
        let users = vec![
            User {
                id: 1,
                name: "Tang".to_string(),
                role: "software developer".to_string(),
            },
            User {
                id: 2,
                name: "Dew".to_string(),
                role: "software developer".to_string(),
            },
            User {
                id: 3,
                name: "Game".to_string(),
                role: "software developer".to_string(),
            },
        ];

        let products = vec![
            Product {
                id: 1,
                name: "milk".to_string(),
                price: "10 bath".to_string(),
            },
            Product {
                id: 2,
                name: "moo".to_string(),
                price: "200 bath".to_string(),
            },
            Product {
                id: 3,
                name: "mee".to_string(),
                price: "1000 bath".to_string(),
            },
        ];

        Self::new(users, products)
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by exact id.
    pub fn user(&self, id: RecordId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by exact id.
    pub fn product(&self, id: RecordId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

fn check_unique(
    collection: &'static str,
    ids: impl Iterator<Item = RecordId>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId { collection, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_collections_keep_insertion_order() {
        let catalog = Catalog::seeded().unwrap();

        let users: Vec<&str> = catalog.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(users, ["Tang", "Dew", "Game"]);

        let products: Vec<&str> = catalog
            .products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(products, ["milk", "moo", "mee"]);
    }

    #[test]
    fn lookup_hits_and_misses() {
        let catalog = Catalog::seeded().unwrap();

        assert_eq!(catalog.user(2).map(|u| u.name.as_str()), Some("Dew"));
        assert!(catalog.user(999).is_none());

        assert_eq!(
            catalog.product(3).map(|p| p.price.as_str()),
            Some("1000 bath")
        );
        assert!(catalog.product(0).is_none());
    }

    #[test]
    fn duplicate_seed_ids_are_rejected() {
        let users = vec![
            User {
                id: 1,
                name: "a".to_string(),
                role: "r".to_string(),
            },
            User {
                id: 1,
                name: "b".to_string(),
                role: "r".to_string(),
            },
        ];

        let err = Catalog::new(users, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { id: 1, .. }));
    }
}
