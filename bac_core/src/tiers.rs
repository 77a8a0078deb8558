//! Status tiers for an estimated BAC.
//!
//! The bands are an ordered table of half-open ranges: a BAC belongs to the
//! first band whose exclusive upper bound is above it.

use serde::Serialize;

/// Severity class used to colour the result
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TierClass {
    Safe,
    Warn,
    Danger,
}

impl TierClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierClass::Safe => "safe",
            TierClass::Warn => "warn",
            TierClass::Danger => "danger",
        }
    }
}

/// Classification of a BAC value
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Sober,
    MildEuphoria,
    Disinhibition,
    Intoxication,
    Stupor,
    Coma,
}

impl StatusTier {
    /// The table row describing this tier
    pub fn band(&self) -> &'static TierBand {
        TIER_TABLE
            .iter()
            .find(|band| band.tier == *self)
            .unwrap_or(&TIER_TABLE[TIER_TABLE.len() - 1])
    }

    pub fn label(&self) -> &'static str {
        self.band().label
    }

    pub fn class(&self) -> TierClass {
        self.band().class
    }
}

/// One row of the tier table
#[derive(Debug, Serialize)]
pub struct TierBand {
    /// Exclusive upper bound, BAC percent
    pub upper_bound: f64,
    pub tier: StatusTier,
    pub label: &'static str,
    pub class: TierClass,
    pub warnings: &'static [&'static str],
}

/// Tier bands in ascending order of BAC
pub static TIER_TABLE: [TierBand; 6] = [
    TierBand {
        upper_bound: 0.02,
        tier: StatusTier::Sober,
        label: "Sobrio / Efectos mínimos",
        class: TierClass::Safe,
        warnings: &[],
    },
    TierBand {
        upper_bound: 0.05,
        tier: StatusTier::MildEuphoria,
        label: "Euforia leve / Relajación",
        class: TierClass::Safe,
        warnings: &[
            "Ligera pérdida de timidez.",
            "La capacidad de conducción puede estar levemente afectada.",
        ],
    },
    TierBand {
        upper_bound: 0.08,
        tier: StatusTier::Disinhibition,
        label: "Alegría / Desinhibición",
        class: TierClass::Warn,
        warnings: &[
            "Reflejos disminuidos.",
            "Menor razonamiento y percepción de profundidad.",
            "LEGALMENTE NO APTO PARA CONDUCIR en muchos países.",
        ],
    },
    TierBand {
        upper_bound: 0.15,
        tier: StatusTier::Intoxication,
        label: "Embriaguez / Torpeza motora",
        class: TierClass::Danger,
        warnings: &[
            "Reflejos y tiempos de reacción muy lentos.",
            "Posible náusea y vómitos.",
            "Peligro severo al volante.",
        ],
    },
    TierBand {
        upper_bound: 0.30,
        tier: StatusTier::Stupor,
        label: "Confusión / Estupor",
        class: TierClass::Danger,
        warnings: &[
            "Posible pérdida de consciencia.",
            "Pérdida de comprensión.",
        ],
    },
    TierBand {
        upper_bound: f64::INFINITY,
        tier: StatusTier::Coma,
        label: "Peligro grave / Coma etílico",
        class: TierClass::Danger,
        warnings: &[
            "POSIBILIDAD DE MUERTE.",
            "Atención médica urgente necesaria.",
        ],
    },
];

/// Map a BAC percentage to its band
///
/// Anything not below a finite bound (including NaN) lands in the last band.
pub fn classify(bac: f64) -> &'static TierBand {
    TIER_TABLE
        .iter()
        .find(|band| bac < band.upper_bound)
        .unwrap_or(&TIER_TABLE[TIER_TABLE.len() - 1])
}
