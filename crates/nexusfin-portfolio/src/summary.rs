//! Portfolio summary.
//!
//! The aggregate result the dashboard renders: total investment,
//! allocations, risk score and label, diversification score.

use crate::allocation::{build_allocations, max_allocation_pct, total_investment};
use crate::config::RiskConfig;
use crate::diversification::diversification_score;
use crate::risk::{risk_score, RiskLabel};
use log::debug;
use nexusfin_core::{Allocation, Holding};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The aggregate scoring result for one user's portfolio.
///
/// Recomputed from scratch on every call; callers that cache it must
/// replace it wholesale, never patch individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// The holdings the summary was computed from.
    pub holdings: Vec<Holding>,

    /// Total invested value across all holdings.
    pub total_investment: Decimal,

    /// Weighted risk score, one decimal. 0 for an empty portfolio,
    /// otherwise in [1.0, 3.0].
    pub risk_score: f64,

    /// Discrete label for the risk score.
    pub risk_label: RiskLabel,

    /// Diversification score, 0-100.
    pub diversification_score: u32,

    /// Allocation table, sorted descending by value.
    pub allocations: Vec<Allocation>,
}

impl PortfolioSummary {
    /// Returns the degenerate summary for a portfolio with no holdings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            holdings: Vec::new(),
            total_investment: Decimal::ZERO,
            risk_score: 0.0,
            risk_label: RiskLabel::Low,
            diversification_score: 0,
            allocations: Vec::new(),
        }
    }

    /// Returns the largest allocation, if any.
    #[must_use]
    pub fn top_allocation(&self) -> Option<&Allocation> {
        self.allocations.first()
    }

    /// Returns the largest allocation percentage, or 0 when empty.
    #[must_use]
    pub fn max_allocation_pct(&self) -> f64 {
        max_allocation_pct(&self.allocations)
    }

    /// Returns true if the largest allocation exceeds the concentration
    /// threshold.
    ///
    /// This drives the dashboard's concentration callout and coincides
    /// with the condition under which the risk score took the
    /// concentration penalty.
    #[must_use]
    pub fn is_concentrated(&self, config: &RiskConfig) -> bool {
        self.max_allocation_pct() > config.concentration_threshold
    }
}

/// Computes the portfolio summary for a holdings list.
///
/// Pure and total: no I/O, no failure paths. The caller is responsible
/// for short-circuiting to the empty case when it never obtained
/// holdings (for example, an unauthenticated session).
///
/// # Example
///
/// ```
/// use nexusfin_portfolio::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let holdings = vec![Holding::builder()
///     .symbol("AAPL")
///     .shares(dec!(100))
///     .avg_cost(dec!(10))
///     .sector("Technology")
///     .build()
///     .unwrap()];
///
/// let summary = summarize(holdings, &RiskConfig::default());
/// assert_eq!(summary.total_investment, dec!(1000));
/// assert_eq!(summary.risk_score, 2.5);
/// ```
#[must_use]
pub fn summarize(holdings: Vec<Holding>, config: &RiskConfig) -> PortfolioSummary {
    if holdings.is_empty() {
        return PortfolioSummary::empty();
    }

    debug!("summarizing portfolio of {} holdings", holdings.len());

    let total = total_investment(&holdings);
    let allocations = build_allocations(&holdings);
    let score = risk_score(&allocations, config);
    let label = RiskLabel::from_score(score, config);
    let diversification = diversification_score(&allocations, config);

    PortfolioSummary {
        holdings,
        total_investment: total,
        risk_score: score,
        risk_label: label,
        diversification_score: diversification,
        allocations,
    }
}
