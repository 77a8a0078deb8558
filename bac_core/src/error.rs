//! Error types for the bac_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bac_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Body weight missing, non-numeric or not positive.
    ///
    /// This is the only validation failure that blocks a calculation.
    #[error("Por favor, introduce un peso válido.")]
    InvalidWeight,

    /// Drink quantity is not a positive integer
    #[error("Invalid quantity '{0}': must be a positive whole number")]
    InvalidQuantity(String),

    /// Elapsed hours negative or non-numeric
    #[error("Invalid elapsed time '{0}': must be zero or more hours")]
    InvalidHours(String),

    /// Drink key not present in the catalog
    #[error("Unknown drink type '{0}'")]
    UnknownDrink(String),

    /// Biological sex not recognised
    #[error("Unknown sex '{0}' (expected male or female)")]
    UnknownSex(String),

    /// No more entry ids can be handed out
    #[error("Drink list is full")]
    LedgerFull,

    /// Unparseable interactive command
    #[error("{0}")]
    InvalidCommand(String),
}
