//! Configuration for news impact scoring.

use serde::{Deserialize, Serialize};

/// Configuration for the news exposure and impact calculator.
///
/// The production constants live in [`ImpactConfig::default`]; tests
/// inject variants without touching the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactConfig {
    /// Multiplier applied to exposure × negative sentiment when deriving
    /// the vulnerability score.
    pub volatility_amplification: f64,

    /// Vulnerability scores at or above this are labeled Medium.
    pub medium_vulnerability_threshold: f64,

    /// Vulnerability scores at or above this are labeled High.
    pub high_vulnerability_threshold: f64,

    /// Linear scaling from sentiment to the simulated historical
    /// reaction percentage.
    pub reaction_beta: f64,

    /// Scaling from the vulnerability score to the simulated projected
    /// drawdown percentage.
    pub drawdown_multiplier: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            volatility_amplification: 1.5,
            medium_vulnerability_threshold: 0.05,
            high_vulnerability_threshold: 0.15,
            reaction_beta: 2.8,
            drawdown_multiplier: 8.0,
        }
    }
}

impl ImpactConfig {
    /// Creates a new config with the production constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the volatility amplification multiplier.
    #[must_use]
    pub fn with_volatility_amplification(mut self, amplification: f64) -> Self {
        self.volatility_amplification = amplification;
        self
    }

    /// Sets the Medium and High vulnerability thresholds.
    #[must_use]
    pub fn with_vulnerability_thresholds(mut self, medium: f64, high: f64) -> Self {
        self.medium_vulnerability_threshold = medium;
        self.high_vulnerability_threshold = high;
        self
    }

    /// Sets the reaction beta.
    #[must_use]
    pub fn with_reaction_beta(mut self, beta: f64) -> Self {
        self.reaction_beta = beta;
        self
    }

    /// Sets the drawdown multiplier.
    #[must_use]
    pub fn with_drawdown_multiplier(mut self, multiplier: f64) -> Self {
        self.drawdown_multiplier = multiplier;
        self
    }
}
