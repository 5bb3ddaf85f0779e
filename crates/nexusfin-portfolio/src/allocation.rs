//! Allocation aggregation.
//!
//! Turns a holdings list into the sorted allocation table both
//! calculators key off.

use log::debug;
use nexusfin_core::{Allocation, Holding};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Returns the total invested value across all holdings.
#[must_use]
pub fn total_investment(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(Holding::value).sum()
}

/// Builds the allocation table for a holdings list.
///
/// Each allocation carries the holding's invested value and its
/// percentage of the total. The result is sorted descending by value;
/// ties keep insertion order. When the total is zero every percentage is
/// zero.
#[must_use]
pub fn build_allocations(holdings: &[Holding]) -> Vec<Allocation> {
    let total = total_investment(holdings);
    debug!(
        "building allocations for {} holdings, total investment {}",
        holdings.len(),
        total
    );

    let mut allocations: Vec<Allocation> = holdings
        .iter()
        .map(|h| {
            let value = h.value();
            let pct = if total > Decimal::ZERO {
                (value / total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
            Allocation {
                symbol: h.symbol.clone(),
                sector: h.sector.clone(),
                value,
                pct,
            }
        })
        .collect();

    allocations.sort_by(|a, b| b.value.cmp(&a.value));
    allocations
}

/// Returns the largest allocation percentage, or 0 for an empty table.
///
/// This is the figure the concentration penalty and spread bonuses key
/// off; with the table sorted descending by value it is simply the first
/// entry, but the scan keeps the function correct for any input order.
#[must_use]
pub fn max_allocation_pct(allocations: &[Allocation]) -> f64 {
    allocations.iter().map(|a| a.pct).fold(0.0, f64::max)
}
