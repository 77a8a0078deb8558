//! Default catalog of drink types.
//!
//! The catalog is fixed: four servings with their volume and strength.

use crate::types::DrinkType;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<DrinkCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static DrinkCatalog {
    &DEFAULT_CATALOG
}

/// Ordered, read-only list of drink types
#[derive(Clone, Debug)]
pub struct DrinkCatalog {
    drinks: Vec<DrinkType>,
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> DrinkCatalog {
    let drinks = vec![
        drink("beer", "Cerveza (330ml)", 330.0, 0.05),
        drink("wine", "Vino (150ml)", 150.0, 0.12),
        drink("spirit", "Licor/Chupito (45ml)", 45.0, 0.40),
        // Mixed drink, approximate strength
        drink("cocktail", "Combinado (250ml)", 250.0, 0.07),
    ];

    DrinkCatalog { drinks }
}

fn drink(key: &str, display_name: &str, volume_ml: f64, abv: f64) -> DrinkType {
    DrinkType {
        key: key.into(),
        display_name: display_name.into(),
        volume_ml,
        abv,
    }
}

impl DrinkCatalog {
    /// Look up a drink type by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&DrinkType> {
        let key = key.trim();
        self.drinks.iter().find(|d| d.key.eq_ignore_ascii_case(key))
    }

    /// Look up a drink type, failing with [`Error::UnknownDrink`]
    pub fn lookup(&self, key: &str) -> Result<&DrinkType> {
        self.get(key)
            .ok_or_else(|| Error::UnknownDrink(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrinkType> {
        self.drinks.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.drinks.iter().map(|d| d.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for drink in &self.drinks {
            if drink.key.is_empty() {
                errors.push("Drink has empty key".to_string());
            }
            if !seen.insert(drink.key.to_lowercase()) {
                errors.push(format!("Duplicate drink key '{}'", drink.key));
            }
            if drink.display_name.is_empty() {
                errors.push(format!("Drink '{}' has empty name", drink.key));
            }
            if !(drink.volume_ml > 0.0) {
                errors.push(format!(
                    "Drink '{}': volume {} ml must be positive",
                    drink.key, drink.volume_ml
                ));
            }
            if !(drink.abv > 0.0 && drink.abv <= 1.0) {
                errors.push(format!(
                    "Drink '{}': ABV {} must be within (0, 1]",
                    drink.key, drink.abv
                ));
            }
        }

        if self.drinks.is_empty() {
            errors.push("Catalog has no drinks".to_string());
        }

        errors
    }
}
