//! Widmark BAC estimation.
//!
//! Pure, stateless computation:
//! - Sum ethanol mass over the ledger
//! - Peak BAC = grams / (weight_kg * 1000 * r) * 100
//! - Subtract linear elimination, clamped at zero
//! - Derive time to sober and the status tier
//!
//! Weight is scaled kg to g before applying `r`; that is the formula this
//! estimator reproduces.

use crate::tiers::classify;
use crate::{BiologicalSex, CalculationInput, CalculationResult, DrinkEntry};

/// BAC percentage points metabolized per hour
pub const ELIMINATION_RATE_PER_HOUR: f64 = 0.015;

/// Total grams of ethanol across all entries
pub fn total_alcohol_grams(entries: &[DrinkEntry]) -> f64 {
    entries.iter().map(DrinkEntry::alcohol_grams).sum()
}

/// BAC percentage immediately after drinking, before any elimination
pub fn peak_bac(alcohol_grams: f64, body_weight_kg: f64, sex: BiologicalSex) -> f64 {
    let r = sex.distribution_ratio();
    (alcohol_grams / (body_weight_kg * 1000.0 * r)) * 100.0
}

/// BAC remaining after `elapsed_hours`, never negative
pub fn bac_after(peak: f64, elapsed_hours: f64) -> f64 {
    (peak - ELIMINATION_RATE_PER_HOUR * elapsed_hours).max(0.0)
}

/// Hours until `bac` is fully eliminated
pub fn time_to_sober_hours(bac: f64) -> f64 {
    if bac > 0.0 {
        bac / ELIMINATION_RATE_PER_HOUR
    } else {
        0.0
    }
}

/// Estimate BAC, tier and warnings for a validated input
pub fn calculate(input: &CalculationInput<'_>) -> CalculationResult {
    let grams = total_alcohol_grams(input.entries);
    let peak = peak_bac(grams, input.body_weight_kg, input.sex);
    let bac = bac_after(peak, input.elapsed_hours);
    let band = classify(bac);

    tracing::debug!(
        "Estimated {:.4}% from {:.3} g ({} entries, {} kg, {}, {} h) -> {:?}",
        bac,
        grams,
        input.entries.len(),
        input.body_weight_kg,
        input.sex,
        input.elapsed_hours,
        band.tier
    );

    CalculationResult {
        total_alcohol_grams: grams,
        peak_bac: peak,
        bac,
        time_to_sober_hours: time_to_sober_hours(bac),
        tier: band.tier,
        class: band.class,
        label: band.label,
        warnings: band.warnings.iter().map(|w| w.to_string()).collect(),
    }
}
