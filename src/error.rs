use thiserror::Error;

use crate::catalog::{CategoryId, OptionId};

pub type Result<T> = std::result::Result<T, CreatorError>;

// Enum for handling errors raised while operating a character creator session.
#[derive(Debug, Error)]
pub enum CreatorError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String), // The category is not part of the catalog the store was seeded from.

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

// Errors raised while loading or validating a catalog. All of them are fatal at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Template for '{category}' must contain exactly one {{value}} placeholder, found {found}")]
    PlaceholderCount { category: CategoryId, found: usize },

    #[error("Category '{0}' has no options")]
    EmptyOptions(CategoryId),

    #[error("Category '{0}' is declared more than once")]
    DuplicateCategory(CategoryId),

    #[error("Option '{option}' is declared more than once in '{category}'")]
    DuplicateOption { category: CategoryId, option: OptionId },

    #[error("Options given for undeclared category '{0}'")]
    UndeclaredCategory(CategoryId),

    #[error("Prompt order does not match the declared categories: {0}")]
    PromptOrderMismatch(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}
