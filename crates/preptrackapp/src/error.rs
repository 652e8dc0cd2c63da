use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
