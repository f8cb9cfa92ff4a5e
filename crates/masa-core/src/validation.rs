//! # Validation Module
//!
//! Input validation and explicit numeric parsing for masa.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: serde deserialization                                        │
//! │  ├── JSON shape, field types (RawNumber accepts number or string)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── presence, numeric well-formedness, range and sign rules           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL, CHECK, UNIQUE, foreign keys                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The system this replaces coerced request fields with parseInt/parseFloat
//! and stored whatever came out - including NaN. Every numeric field here
//! goes through an explicit fallible parse instead, and malformed input is
//! rejected before it can reach persistence.

use serde::Deserialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Raw Wire Numbers
// =============================================================================

/// A numeric request field as it arrives over the wire.
///
/// Clients send quantities and amounts as JSON numbers or as numeric
/// strings (HTML form values pass through unchanged). Deserialization
/// keeps the raw shape; the `parse_*` functions below decide whether it
/// is acceptable.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Interprets the raw value as a whole number.
    fn as_integer(&self, field: &str) -> ValidationResult<i64> {
        match self {
            RawNumber::Int(n) => Ok(*n),
            RawNumber::Float(f) => {
                if !f.is_finite() || *f < i64::MIN as f64 || *f > i64::MAX as f64 {
                    return Err(ValidationError::InvalidNumber {
                        field: field.to_string(),
                        value: f.to_string(),
                    });
                }
                if f.fract() != 0.0 {
                    return Err(ValidationError::NotAnInteger {
                        field: field.to_string(),
                    });
                }
                Ok(*f as i64)
            }
            RawNumber::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<i64>() {
                    return Ok(n);
                }
                // "5.0" is fine, "5.7" is not a whole number, "abc" is noise
                match s.parse::<f64>() {
                    Ok(f) => RawNumber::Float(f).as_integer(field),
                    Err(_) => Err(ValidationError::InvalidNumber {
                        field: field.to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }
    }

    /// Interprets the raw value as a peso amount in centavos.
    fn as_amount(&self, field: &str) -> ValidationResult<Money> {
        let pesos = match self {
            RawNumber::Int(n) => *n as f64,
            RawNumber::Float(f) => *f,
            RawNumber::Text(s) => {
                let s = s.trim();
                s.parse::<f64>()
                    .map_err(|_| ValidationError::InvalidNumber {
                        field: field.to_string(),
                        value: s.to_string(),
                    })?
            }
        };

        Money::from_pesos(pesos).ok_or_else(|| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: pesos.to_string(),
        })
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses an absolute production quantity: required, whole, >= 0.
///
/// ## Example
/// ```rust
/// use masa_core::validation::{parse_quantity, RawNumber};
///
/// assert_eq!(parse_quantity("quantity", Some(&RawNumber::Int(0))).unwrap(), 0);
/// assert!(parse_quantity("quantity", Some(&RawNumber::Int(-1))).is_err());
/// assert!(parse_quantity("quantity", None).is_err());
/// ```
pub fn parse_quantity(field: &str, value: Option<&RawNumber>) -> ValidationResult<i64> {
    let quantity = required(field, value)?.as_integer(field)?;

    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(quantity)
}

/// Parses a relative production increment: required, whole, != 0.
///
/// Negative increments are valid (they walk the quantity back down,
/// clamped at zero); a zero increment is a no-op and rejected.
pub fn parse_increment(field: &str, value: Option<&RawNumber>) -> ValidationResult<i64> {
    let increment = required(field, value)?.as_integer(field)?;

    if increment == 0 {
        return Err(ValidationError::Zero {
            field: field.to_string(),
        });
    }

    Ok(increment)
}

/// Parses a sale quantity: required, whole, >= 1.
pub fn parse_sale_quantity(field: &str, value: Option<&RawNumber>) -> ValidationResult<i64> {
    let quantity = required(field, value)?.as_integer(field)?;

    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(quantity)
}

/// Parses a non-negative count (e.g. a register's totalProduction):
/// required, whole, >= 0.
pub fn parse_count(field: &str, value: Option<&RawNumber>) -> ValidationResult<i64> {
    parse_quantity(field, value)
}

/// Parses a peso amount: required, well-formed, >= 0. Zero is legitimate
/// (a day with no production has an expected amount of $0.00).
pub fn parse_amount(field: &str, value: Option<&RawNumber>) -> ValidationResult<Money> {
    let amount = required(field, value)?.as_amount(field)?;

    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(amount)
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// Returns the trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(name.to_string())
}

fn required<'a>(field: &str, value: Option<&'a RawNumber>) -> ValidationResult<&'a RawNumber> {
    value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> RawNumber {
        RawNumber::Int(n)
    }

    fn text(s: &str) -> RawNumber {
        RawNumber::Text(s.to_string())
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", Some(&int(0))).unwrap(), 0);
        assert_eq!(parse_quantity("quantity", Some(&int(25))).unwrap(), 25);
        assert_eq!(parse_quantity("quantity", Some(&text("12"))).unwrap(), 12);
        assert_eq!(parse_quantity("quantity", Some(&text(" 7 "))).unwrap(), 7);

        assert!(parse_quantity("quantity", None).is_err());
        assert!(parse_quantity("quantity", Some(&int(-1))).is_err());
        assert!(parse_quantity("quantity", Some(&text("abc"))).is_err());
        assert!(parse_quantity("quantity", Some(&text("5.7"))).is_err());
        assert!(parse_quantity("quantity", Some(&RawNumber::Float(2.5))).is_err());
        assert!(parse_quantity("quantity", Some(&RawNumber::Float(f64::NAN))).is_err());
    }

    #[test]
    fn test_parse_quantity_accepts_integral_floats() {
        // JSON clients may send 5.0 for 5; form strings too
        assert_eq!(
            parse_quantity("quantity", Some(&RawNumber::Float(5.0))).unwrap(),
            5
        );
        assert_eq!(parse_quantity("quantity", Some(&text("5.0"))).unwrap(), 5);
    }

    #[test]
    fn test_parse_increment() {
        assert_eq!(parse_increment("increment", Some(&int(5))).unwrap(), 5);
        assert_eq!(parse_increment("increment", Some(&int(-3))).unwrap(), -3);

        assert!(parse_increment("increment", Some(&int(0))).is_err());
        assert!(parse_increment("increment", None).is_err());
        assert!(parse_increment("increment", Some(&text("nope"))).is_err());
    }

    #[test]
    fn test_parse_sale_quantity() {
        assert_eq!(parse_sale_quantity("quantity", Some(&int(1))).unwrap(), 1);
        assert!(parse_sale_quantity("quantity", Some(&int(0))).is_err());
        assert!(parse_sale_quantity("quantity", Some(&int(-2))).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("price", Some(&int(15))).unwrap(),
            Money::from_cents(1500)
        );
        assert_eq!(
            parse_amount("price", Some(&RawNumber::Float(15.5))).unwrap(),
            Money::from_cents(1550)
        );
        assert_eq!(
            parse_amount("price", Some(&text("22"))).unwrap(),
            Money::from_cents(2200)
        );
        assert_eq!(
            parse_amount("price", Some(&int(0))).unwrap(),
            Money::zero()
        );

        assert!(parse_amount("price", None).is_err());
        assert!(parse_amount("price", Some(&int(-5))).is_err());
        assert!(parse_amount("price", Some(&text("abc"))).is_err());
    }

    #[test]
    fn test_parse_amount_rejects_nan_strings() {
        // "NaN" and "inf" parse as f64 but must never reach storage
        assert!(parse_amount("price", Some(&text("NaN"))).is_err());
        assert!(parse_amount("price", Some(&text("inf"))).is_err());
        assert!(parse_amount("price", Some(&RawNumber::Float(f64::NAN))).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Agua").unwrap(), "Agua");
        assert_eq!(validate_product_name("  Café  ").unwrap(), "Café");

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_raw_number_deserializes_from_json() {
        let n: RawNumber = serde_json::from_str("5").unwrap();
        assert_eq!(parse_quantity("q", Some(&n)).unwrap(), 5);

        let n: RawNumber = serde_json::from_str("15.5").unwrap();
        assert_eq!(
            parse_amount("price", Some(&n)).unwrap(),
            Money::from_cents(1550)
        );

        let n: RawNumber = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(parse_quantity("q", Some(&n)).unwrap(), 12);
    }
}
