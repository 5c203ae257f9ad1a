//! Error types for minimart

use thiserror::Error;

use crate::types::RecordId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
