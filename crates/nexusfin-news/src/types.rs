//! Input and label types for news impact scoring.

use crate::config::ImpactConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The slice of a news item the calculator consumes.
///
/// The news collaborator owns range validation: `sentiment_score` is
/// expected in [-1.0, 1.0] and `sector` is free text. A sector absent
/// from the portfolio's allocations is defined behavior (zero exposure),
/// not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Sector the story affects.
    pub sector: String,

    /// Sentiment score in [-1.0, 1.0]; negative is bearish.
    pub sentiment_score: f64,
}

impl NewsItem {
    /// Creates a new news item.
    #[must_use]
    pub fn new(sector: impl Into<String>, sentiment_score: f64) -> Self {
        Self {
            sector: sector.into(),
            sentiment_score,
        }
    }
}

/// Discrete label for how much a news item could hurt the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vulnerability {
    /// Zero vulnerability score: no exposure, or non-negative sentiment.
    None,
    /// Vulnerability score below the Medium threshold.
    Low,
    /// Vulnerability score at or above the Medium threshold, below High.
    Medium,
    /// Vulnerability score at or above the High threshold.
    High,
}

impl Vulnerability {
    /// Maps a vulnerability score onto its label.
    ///
    /// Any strictly positive score is at least Low; `None` is reachable
    /// only at exactly zero.
    #[must_use]
    pub fn from_score(score: f64, config: &ImpactConfig) -> Self {
        if score >= config.high_vulnerability_threshold {
            Self::High
        } else if score >= config.medium_vulnerability_threshold {
            Self::Medium
        } else if score > 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{label}")
    }
}
