#![forbid(unsafe_code)]

//! Core domain model and business logic for the BAC estimator.
//!
//! This crate provides:
//! - Domain types (drinks, ledger entries, calculation input/result)
//! - The fixed drink catalog
//! - The drink ledger and session state
//! - Widmark BAC estimation and status tiers
//! - Input parsing, report formatting and configuration

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod tiers;
pub mod ledger;
pub mod estimator;
pub mod input;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{get_default_catalog, DrinkCatalog};
pub use config::Config;
pub use tiers::{classify, StatusTier, TierBand, TierClass};
pub use ledger::DrinkLedger;
pub use estimator::calculate;
pub use session::Session;
