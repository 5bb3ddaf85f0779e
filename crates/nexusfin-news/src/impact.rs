//! News impact calculations.
//!
//! Annotates one news item at a time against the portfolio's allocation
//! table. All outputs are display-ready: pre-rounded numbers and
//! pre-formatted percentage strings.

use crate::config::ImpactConfig;
use crate::types::{NewsItem, Vulnerability};
use log::debug;
use nexusfin_core::format::{round_to, signed_pct};
use nexusfin_core::Allocation;
use serde::{Deserialize, Serialize};

/// Deterministic portfolio-impact fields derived for one news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsImpactAnnotation {
    /// Fraction of portfolio value exposed to the item's sector (0-1,
    /// three decimals).
    pub portfolio_exposure: f64,

    /// Magnitude-driven impact score (0-100), amplified by exposure and
    /// independent of sentiment sign.
    pub impact_score: u32,

    /// How much the portfolio could be hurt by this item.
    pub portfolio_vulnerability: Vulnerability,

    /// Simulated historical price reaction, a linear scaling of
    /// sentiment (e.g. `"+5.6%"`, `"-3.1%"`).
    pub historical_avg_reaction: String,

    /// Simulated projected drawdown: at most zero, or exactly
    /// `"+0.00%"` for non-negative sentiment.
    pub projected_drawdown: String,
}

/// Returns the portfolio's exposure to a sector as a 0-1 fraction.
///
/// Exposure is read from the first allocation whose sector exactly
/// matches; with the table in its usual descending-value order that is
/// the largest matching position. No fuzzy or hierarchical matching, and
/// a sector with no allocation yields zero.
#[must_use]
pub fn sector_exposure(allocations: &[Allocation], sector: &str) -> f64 {
    allocations
        .iter()
        .find(|a| a.in_sector(sector))
        .map_or(0.0, |a| a.pct / 100.0)
}

/// Annotates one news item against the portfolio's allocations.
///
/// Pure and total: sector mismatch is zero exposure, not an error, and
/// positive or neutral sentiment never raises vulnerability.
///
/// # Example
///
/// ```
/// use nexusfin_core::Allocation;
/// use nexusfin_news::{annotate, ImpactConfig, NewsItem, Vulnerability};
/// use rust_decimal_macros::dec;
///
/// let allocations = vec![Allocation {
///     symbol: "NVDA".to_string(),
///     sector: Some("Semiconductors".to_string()),
///     value: dec!(5000),
///     pct: 50.0,
/// }];
///
/// let item = NewsItem::new("Semiconductors", -0.8);
/// let annotation = annotate(&item, &allocations, &ImpactConfig::default());
///
/// assert_eq!(annotation.portfolio_vulnerability, Vulnerability::High);
/// assert_eq!(annotation.projected_drawdown, "-4.80%");
/// ```
#[must_use]
pub fn annotate(
    item: &NewsItem,
    allocations: &[Allocation],
    config: &ImpactConfig,
) -> NewsImpactAnnotation {
    let exposure = sector_exposure(allocations, &item.sector);

    // Only negative sentiment contributes to vulnerability.
    let neg_sentiment = (-item.sentiment_score).max(0.0);
    let vuln_score = exposure * neg_sentiment * config.volatility_amplification;

    let impact_raw = item.sentiment_score.abs() * 100.0 * (1.0 + exposure / 2.0);
    let impact_score = (impact_raw.round() as u32).min(100);

    let historical_avg_reaction = signed_pct(item.sentiment_score * config.reaction_beta, 1);

    let projected_drawdown = if item.sentiment_score >= 0.0 {
        signed_pct(0.0, 2)
    } else {
        signed_pct(vuln_score * -config.drawdown_multiplier, 2)
    };

    NewsImpactAnnotation {
        portfolio_exposure: round_to(exposure, 3),
        impact_score,
        portfolio_vulnerability: Vulnerability::from_score(vuln_score, config),
        historical_avg_reaction,
        projected_drawdown,
    }
}

/// Annotates a batch of news items, preserving order.
///
/// Items are independent; there is no cross-item state. Batch size is
/// bounded by the upstream report (observed at 8 items).
#[must_use]
pub fn annotate_all(
    items: &[NewsItem],
    allocations: &[Allocation],
    config: &ImpactConfig,
) -> Vec<NewsImpactAnnotation> {
    debug!(
        "annotating {} news items against {} allocations",
        items.len(),
        allocations.len()
    );

    items
        .iter()
        .map(|item| annotate(item, allocations, config))
        .collect()
}
