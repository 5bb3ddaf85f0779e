//! Derived allocation view of a holding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The value and percentage share one holding contributes to a portfolio.
///
/// Allocations are derived, never persisted. A portfolio's allocations are
/// kept sorted descending by `value`; the first entry is the one treated
/// as "largest" by the concentration checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Symbol of the underlying holding.
    pub symbol: String,

    /// Sector of the underlying holding, if classified.
    pub sector: Option<String>,

    /// Invested value (`shares * avg_cost`) in base currency.
    pub value: Decimal,

    /// Percentage of total investment (0-100). Zero when the portfolio
    /// total is zero.
    pub pct: f64,
}

impl Allocation {
    /// Returns true if this allocation belongs to the given sector.
    ///
    /// Matching is exact-string; unclassified allocations match nothing.
    #[must_use]
    pub fn in_sector(&self, sector: &str) -> bool {
        self.sector.as_deref() == Some(sector)
    }
}
