//! Risk classification and scoring.
//!
//! Each allocation is classified into a risk band, the bands are
//! value-weighted into a 1.0-3.0 score, and concentrated portfolios take
//! a penalty on top.

use crate::allocation::max_allocation_pct;
use crate::config::RiskConfig;
use nexusfin_core::format::round_to;
use nexusfin_core::Allocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk band assigned to a single allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// Default band (weight 1).
    Low,
    /// Sector-flagged band (weight 2).
    Medium,
    /// Symbol-flagged band (weight 3).
    High,
}

impl RiskBand {
    /// Returns the scoring weight for this band.
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }
}

/// Classifies one allocation into a risk band.
///
/// The symbol check takes priority over the sector check and the two
/// never combine: a high-risk symbol in a medium-risk sector still
/// weighs 3, not 5. Unclassified allocations fall through to Low.
#[must_use]
pub fn classify_allocation(allocation: &Allocation, config: &RiskConfig) -> RiskBand {
    if config.is_high_risk_symbol(&allocation.symbol) {
        RiskBand::High
    } else if allocation
        .sector
        .as_deref()
        .is_some_and(|sector| config.is_medium_risk_sector(sector))
    {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// Computes the portfolio risk score from an allocation table.
///
/// The score is the value-weighted average of per-allocation band
/// weights, plus the concentration penalty when the largest allocation
/// exceeds the threshold, capped at the configured maximum and rounded to
/// one decimal. For a non-empty table with a positive total the result
/// lies in [1.0, 3.0].
#[must_use]
pub fn risk_score(allocations: &[Allocation], config: &RiskConfig) -> f64 {
    let mut weighted = 0.0;
    for allocation in allocations {
        let band = classify_allocation(allocation, config);
        weighted += band.weight() * allocation.pct / 100.0;
    }

    if max_allocation_pct(allocations) > config.concentration_threshold {
        weighted = (weighted + config.concentration_penalty).min(config.max_risk_score);
    }

    round_to(weighted, 1)
}

/// Discrete risk label shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Risk score below the Medium cutoff.
    Low,
    /// Risk score at or above the Medium cutoff, below the High cutoff.
    Medium,
    /// Risk score at or above the High cutoff.
    High,
}

impl RiskLabel {
    /// Maps a rounded risk score onto its label.
    #[must_use]
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score >= config.high_label_cutoff {
            Self::High
        } else if score >= config.medium_label_cutoff {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{label}")
    }
}
