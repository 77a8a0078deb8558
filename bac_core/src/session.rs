//! Session state: the drink ledger plus the body/time form inputs.
//!
//! The controller (the CLI) owns one `Session` and hands the ledger to the
//! estimator by reference for each calculation.

use crate::config::ProfileConfig;
use crate::estimator::calculate;
use crate::{BiologicalSex, CalculationInput, CalculationResult, DrinkLedger, Error, Result};

#[derive(Clone, Debug, Default)]
pub struct Session {
    ledger: DrinkLedger,
    weight_kg: Option<f64>,
    sex: BiologicalSex,
    elapsed_hours: f64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session pre-filled from the configured profile
    pub fn from_profile(profile: &ProfileConfig) -> Self {
        Self {
            ledger: DrinkLedger::new(),
            weight_kg: profile.weight_kg,
            sex: profile.sex,
            elapsed_hours: profile.elapsed_hours.max(0.0),
        }
    }

    pub fn ledger(&self) -> &DrinkLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut DrinkLedger {
        &mut self.ledger
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn set_weight_kg(&mut self, weight_kg: f64) -> Result<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidWeight);
        }
        self.weight_kg = Some(weight_kg);
        Ok(())
    }

    pub fn sex(&self) -> BiologicalSex {
        self.sex
    }

    pub fn set_sex(&mut self, sex: BiologicalSex) {
        self.sex = sex;
    }

    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_hours
    }

    pub fn set_elapsed_hours(&mut self, hours: f64) -> Result<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(Error::InvalidHours(hours.to_string()));
        }
        self.elapsed_hours = hours;
        Ok(())
    }

    /// Estimate BAC from the current ledger and form inputs
    ///
    /// Fails with [`Error::InvalidWeight`] until a weight has been set.
    pub fn calculate(&self) -> Result<CalculationResult> {
        let weight = self.weight_kg.ok_or(Error::InvalidWeight)?;
        let input =
            CalculationInput::new(self.ledger.list(), weight, self.sex, self.elapsed_hours)?;
        Ok(calculate(&input))
    }
}
