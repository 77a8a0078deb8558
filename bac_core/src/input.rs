//! Parsing of raw form values.
//!
//! Bad input is rejected here, before it reaches the ledger or the estimator.

use crate::{Error, Result};

/// Parse a body weight in kilograms; must be a finite number above zero
pub fn parse_weight(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(kg) if kg.is_finite() && kg > 0.0 => Ok(kg),
        _ => Err(Error::InvalidWeight),
    }
}

/// Parse a drink count; must be a whole number above zero
pub fn parse_quantity(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(qty) if qty > 0 => Ok(qty),
        _ => Err(Error::InvalidQuantity(raw.trim().to_string())),
    }
}

/// Parse elapsed hours; blank means no time has passed
pub fn parse_hours(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours >= 0.0 => Ok(hours),
        _ => Err(Error::InvalidHours(raw.to_string())),
    }
}

/// A drink key with a quantity, as written on the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrinkSpec {
    pub key: String,
    pub quantity: u32,
}

/// Parse `beer=2`, `beer:2` or a bare `beer` (one serving)
///
/// Only the shape and quantity are checked; the key is resolved against the
/// catalog when the drink is added.
pub fn parse_drink_spec(raw: &str) -> Result<DrinkSpec> {
    let raw = raw.trim();
    let (key, quantity) = match raw.split_once(['=', ':']) {
        Some((key, qty)) => (key.trim(), parse_quantity(qty)?),
        None => (raw, 1),
    };

    if key.is_empty() {
        return Err(Error::UnknownDrink(raw.to_string()));
    }

    Ok(DrinkSpec {
        key: key.to_lowercase(),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("70").unwrap(), 70.0);
        assert_eq!(parse_weight(" 62.5 ").unwrap(), 62.5);
        for bad in ["", "0", "-3", "abc", "NaN", "inf"] {
            assert!(matches!(parse_weight(bad), Err(Error::InvalidWeight)), "{}", bad);
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        for bad in ["0", "-1", "1.5", "two", ""] {
            assert!(
                matches!(parse_quantity(bad), Err(Error::InvalidQuantity(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("").unwrap(), 0.0);
        assert_eq!(parse_hours("0").unwrap(), 0.0);
        assert_eq!(parse_hours("2.5").unwrap(), 2.5);
        assert!(matches!(parse_hours("-1"), Err(Error::InvalidHours(_))));
        assert!(matches!(parse_hours("soon"), Err(Error::InvalidHours(_))));
    }

    #[test]
    fn test_parse_drink_spec() {
        assert_eq!(
            parse_drink_spec("beer=2").unwrap(),
            DrinkSpec { key: "beer".into(), quantity: 2 }
        );
        assert_eq!(
            parse_drink_spec("Wine:3").unwrap(),
            DrinkSpec { key: "wine".into(), quantity: 3 }
        );
        assert_eq!(parse_drink_spec("spirit").unwrap().quantity, 1);
        assert!(matches!(
            parse_drink_spec("beer=0"),
            Err(Error::InvalidQuantity(_))
        ));
        assert!(parse_drink_spec("=2").is_err());
    }
}
