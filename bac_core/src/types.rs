//! Core domain types for the BAC estimator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Drink types and ledger entries
//! - Biological sex and its Widmark distribution ratio
//! - Calculation inputs and results

use crate::tiers::{StatusTier, TierClass};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Drink Types
// ============================================================================

/// Mass of one millilitre of ethanol, in grams
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

/// A drink definition from the catalog (e.g. "Cerveza (330ml)")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrinkType {
    pub key: String,
    pub display_name: String,
    pub volume_ml: f64,
    /// Alcohol by volume as a fraction (0.05 = 5%)
    pub abv: f64,
}

impl DrinkType {
    /// Grams of ethanol in a single serving
    pub fn alcohol_grams(&self) -> f64 {
        self.volume_ml * self.abv * ETHANOL_DENSITY_G_PER_ML
    }
}

/// Stable identifier handed out by the ledger when an entry is added
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        digits
            .parse::<u64>()
            .map(EntryId)
            .map_err(|_| Error::InvalidCommand(format!("Invalid entry id '{}'", s)))
    }
}

/// A recorded drink: one catalog type consumed `quantity` times
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrinkEntry {
    pub id: EntryId,
    pub drink: DrinkType,
    pub quantity: u32,
}

impl DrinkEntry {
    /// Grams of ethanol across all servings of this entry
    pub fn alcohol_grams(&self) -> f64 {
        self.drink.alcohol_grams() * f64::from(self.quantity)
    }
}

// ============================================================================
// Body Profile
// ============================================================================

/// Biological sex, selecting the Widmark distribution ratio
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    #[default]
    Male,
    Female,
}

impl BiologicalSex {
    /// Widmark `r`: approximate body-water fraction
    pub fn distribution_ratio(&self) -> f64 {
        match self {
            BiologicalSex::Male => 0.68,
            BiologicalSex::Female => 0.55,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "hombre" | "a" => Ok(BiologicalSex::Male),
            "female" | "f" | "mujer" | "b" => Ok(BiologicalSex::Female),
            _ => Err(Error::UnknownSex(s.to_string())),
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Calculation Types
// ============================================================================

/// Everything the estimator needs for one calculation
///
/// Built fresh for each request. `new` performs the caller-side validation;
/// the estimator itself trusts these fields.
#[derive(Clone, Debug)]
pub struct CalculationInput<'a> {
    pub entries: &'a [DrinkEntry],
    pub body_weight_kg: f64,
    pub sex: BiologicalSex,
    pub elapsed_hours: f64,
}

impl<'a> CalculationInput<'a> {
    /// Validate form inputs and build a calculation request
    ///
    /// Fails with [`Error::InvalidWeight`] for a non-positive or non-finite
    /// weight and [`Error::InvalidHours`] for negative or non-finite hours.
    pub fn new(
        entries: &'a [DrinkEntry],
        body_weight_kg: f64,
        sex: BiologicalSex,
        elapsed_hours: f64,
    ) -> Result<Self> {
        if !body_weight_kg.is_finite() || body_weight_kg <= 0.0 {
            return Err(Error::InvalidWeight);
        }
        if !elapsed_hours.is_finite() || elapsed_hours < 0.0 {
            return Err(Error::InvalidHours(elapsed_hours.to_string()));
        }

        Ok(Self {
            entries,
            body_weight_kg,
            sex,
            elapsed_hours,
        })
    }
}

/// Outcome of a BAC estimate
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CalculationResult {
    pub total_alcohol_grams: f64,
    /// BAC before elimination, in percent
    pub peak_bac: f64,
    /// BAC after elimination, in percent, never negative
    pub bac: f64,
    pub time_to_sober_hours: f64,
    pub tier: StatusTier,
    pub class: TierClass,
    pub label: &'static str,
    pub warnings: Vec<String>,
}
