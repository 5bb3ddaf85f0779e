//! Configuration for portfolio risk and diversification scoring.

use serde::{Deserialize, Serialize};

/// Speculative and crypto-proxy tickers treated as high risk regardless of
/// sector.
const DEFAULT_HIGH_RISK_SYMBOLS: &[&str] = &["BITO", "MARA", "COIN", "DOGE", "SHIB", "GME", "AMC"];

/// Sectors treated as medium risk when the symbol itself is not flagged.
const DEFAULT_MEDIUM_RISK_SECTORS: &[&str] =
    &["Technology", "Semiconductors", "Crypto", "Automotive"];

/// Configuration for the risk and diversification calculators.
///
/// The production constants live in [`RiskConfig::default`]; tests inject
/// variants without touching the algorithms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Symbols that always classify as high risk (weight 3).
    pub high_risk_symbols: Vec<String>,

    /// Sectors that classify as medium risk (weight 2) when the symbol is
    /// not in `high_risk_symbols`. The checks never stack.
    pub medium_risk_sectors: Vec<String>,

    /// Largest-allocation percentage above which the concentration
    /// penalty applies.
    pub concentration_threshold: f64,

    /// Amount added to the weighted risk score for a concentrated
    /// portfolio.
    pub concentration_penalty: f64,

    /// Ceiling for the risk score after the concentration penalty.
    pub max_risk_score: f64,

    /// Risk scores at or above this are labeled High.
    pub high_label_cutoff: f64,

    /// Risk scores at or above this (and below the High cutoff) are
    /// labeled Medium.
    pub medium_label_cutoff: f64,

    /// Diversification points per holding.
    pub points_per_holding: u32,

    /// Diversification points per distinct classified sector.
    pub points_per_sector: u32,

    /// Bonus when the largest allocation stays under
    /// `tight_spread_cutoff`.
    pub tight_spread_bonus: u32,

    /// Bonus when the largest allocation stays under
    /// `moderate_spread_cutoff` (but not under the tight cutoff).
    pub moderate_spread_bonus: u32,

    /// Largest-allocation percentage below which the tight bonus applies.
    pub tight_spread_cutoff: f64,

    /// Largest-allocation percentage below which the moderate bonus
    /// applies.
    pub moderate_spread_cutoff: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_risk_symbols: DEFAULT_HIGH_RISK_SYMBOLS
                .iter()
                .map(ToString::to_string)
                .collect(),
            medium_risk_sectors: DEFAULT_MEDIUM_RISK_SECTORS
                .iter()
                .map(ToString::to_string)
                .collect(),
            concentration_threshold: 40.0,
            concentration_penalty: 0.5,
            max_risk_score: 3.0,
            high_label_cutoff: 2.2,
            medium_label_cutoff: 1.5,
            points_per_holding: 12,
            points_per_sector: 15,
            tight_spread_bonus: 20,
            moderate_spread_bonus: 10,
            tight_spread_cutoff: 30.0,
            moderate_spread_cutoff: 50.0,
        }
    }
}

impl RiskConfig {
    /// Creates a new config with the production constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the high-risk symbol list.
    #[must_use]
    pub fn with_high_risk_symbols(mut self, symbols: Vec<String>) -> Self {
        self.high_risk_symbols = symbols;
        self
    }

    /// Replaces the medium-risk sector list.
    #[must_use]
    pub fn with_medium_risk_sectors(mut self, sectors: Vec<String>) -> Self {
        self.medium_risk_sectors = sectors;
        self
    }

    /// Sets the concentration threshold.
    #[must_use]
    pub fn with_concentration_threshold(mut self, threshold: f64) -> Self {
        self.concentration_threshold = threshold;
        self
    }

    /// Sets the High and Medium label cutoffs.
    #[must_use]
    pub fn with_label_cutoffs(mut self, high: f64, medium: f64) -> Self {
        self.high_label_cutoff = high;
        self.medium_label_cutoff = medium;
        self
    }

    /// Returns true if the symbol is in the high-risk list.
    #[must_use]
    pub fn is_high_risk_symbol(&self, symbol: &str) -> bool {
        self.high_risk_symbols.iter().any(|s| s == symbol)
    }

    /// Returns true if the sector is in the medium-risk list.
    #[must_use]
    pub fn is_medium_risk_sector(&self, sector: &str) -> bool {
        self.medium_risk_sectors.iter().any(|s| s == sector)
    }
}
