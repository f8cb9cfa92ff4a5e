//! # Reconciliation Policy
//!
//! How the expected cash amount for a day is derived.
//!
//! ## Two Strategies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Expected-Cash Derivation                                │
//! │                                                                         │
//! │  production strategy:                                                   │
//! │    Production Ledger ──► Σ quantity ──► total × unit cost              │
//! │                                                                         │
//! │  sales strategy:                                                        │
//! │    Sales Ledger ──► Σ (product price × quantity)                       │
//! │                                                                         │
//! │  Either way:                                                            │
//! │    CashRegister.expected_cents ◄── snapshot, refreshed on every        │
//! │                                    production mutation for that day    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The business switched from the sales-based derivation to the
//! production-based one at some point; which is authoritative is a
//! business decision, so the strategy is explicit configuration with no
//! default. This module is the pure half: masa-db feeds it the day's
//! aggregates inside the mutation's transaction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Strategy
// =============================================================================

/// Which ledger the expected cash amount is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileStrategy {
    /// Expected = total daily production × unit cost.
    Production,
    /// Expected = sum of (product price × quantity) over the day's sales.
    Sales,
}

/// Error for unrecognized strategy names in configuration.
#[derive(Debug, Error)]
#[error("unknown reconcile strategy: '{0}' (expected 'production' or 'sales')")]
pub struct UnknownStrategy(pub String);

impl FromStr for ReconcileStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(ReconcileStrategy::Production),
            "sales" => Ok(ReconcileStrategy::Sales),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

// =============================================================================
// Policy
// =============================================================================

/// Strategy plus the unit cost it needs: everything reconciliation has to
/// know that is not ledger state.
#[derive(Debug, Clone, Copy)]
pub struct ReconcilePolicy {
    pub strategy: ReconcileStrategy,
    pub unit_cost: Money,
}

impl ReconcilePolicy {
    pub const fn new(strategy: ReconcileStrategy, unit_cost: Money) -> Self {
        ReconcilePolicy {
            strategy,
            unit_cost,
        }
    }

    /// Expected cash under the production strategy: `total × unit cost`,
    /// exact for every non-negative total.
    #[inline]
    pub const fn expected_from_production(&self, total_production: i64) -> Money {
        self.unit_cost.multiply_quantity(total_production)
    }
}

// =============================================================================
// Increment Clamping
// =============================================================================

/// Applies a relative increment to a quantity, clamping at zero.
///
/// Quantities never go negative: walking a count below zero leaves it at
/// zero, and the "lost" underflow is not remembered.
///
/// ## Example
/// ```rust
/// use masa_core::reconcile::clamp_increment;
///
/// assert_eq!(clamp_increment(5, -3), 2);
/// assert_eq!(clamp_increment(2, -10), 0);
/// assert_eq!(clamp_increment(0, 4), 4);
/// ```
#[inline]
pub const fn clamp_increment(current: i64, delta: i64) -> i64 {
    let next = current + delta;
    if next < 0 {
        0
    } else {
        next
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_UNIT_COST_CENTS;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "production".parse::<ReconcileStrategy>().unwrap(),
            ReconcileStrategy::Production
        );
        assert_eq!(
            "Sales".parse::<ReconcileStrategy>().unwrap(),
            ReconcileStrategy::Sales
        );
        assert!("ventas".parse::<ReconcileStrategy>().is_err());
        assert!("".parse::<ReconcileStrategy>().is_err());
    }

    #[test]
    fn test_expected_is_exact_multiple_of_unit_cost() {
        let policy = ReconcilePolicy::new(
            ReconcileStrategy::Production,
            Money::from_cents(DEFAULT_UNIT_COST_CENTS),
        );

        for total in 0..=500 {
            let expected = policy.expected_from_production(total);
            assert_eq!(expected.cents(), total * DEFAULT_UNIT_COST_CENTS);
        }
    }

    #[test]
    fn test_expected_with_custom_unit_cost() {
        let policy =
            ReconcilePolicy::new(ReconcileStrategy::Production, Money::from_cents(2500));
        assert_eq!(policy.expected_from_production(4).cents(), 10000);
    }

    #[test]
    fn test_clamp_basic() {
        assert_eq!(clamp_increment(0, 5), 5);
        assert_eq!(clamp_increment(5, -3), 2);
        assert_eq!(clamp_increment(2, -10), 0);
    }

    #[test]
    fn test_increment_then_negation_clamps() {
        // q + d followed by -d returns to q only if no clamping occurred
        let q = 5;
        assert_eq!(clamp_increment(clamp_increment(q, 3), -3), q);

        // With intermediate clamping the naive sum is NOT recovered:
        // 5 - 10 -> 0, then +10 -> 10 (not 5)
        assert_eq!(clamp_increment(clamp_increment(q, -10), 10), 10);

        // Opposite ordering: 5 + 10 -> 15, then -10 -> 5
        assert_eq!(clamp_increment(clamp_increment(q, 10), -10), q);
    }
}
