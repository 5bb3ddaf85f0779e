//! Diversification scoring.

use crate::allocation::max_allocation_pct;
use crate::config::RiskConfig;
use nexusfin_core::Allocation;
use std::collections::HashSet;

/// Computes the 0-100 diversification score for an allocation table.
///
/// The heuristic rewards holding count, distinct classified sectors, and
/// a spread-out largest allocation:
///
/// ```text
/// min(100, holdings * 12 + sectors * 15 + spread_bonus)
/// ```
///
/// where the bonus is 20 when the largest allocation is under 30%, 10
/// when under 50%, and 0 otherwise. Unclassified holdings count toward
/// the holding term but never toward the sector term.
#[must_use]
pub fn diversification_score(allocations: &[Allocation], config: &RiskConfig) -> u32 {
    if allocations.is_empty() {
        return 0;
    }

    let unique_sectors: HashSet<&str> = allocations
        .iter()
        .filter_map(|a| a.sector.as_deref())
        .collect();

    let max_alloc = max_allocation_pct(allocations);
    let spread_bonus = if max_alloc < config.tight_spread_cutoff {
        config.tight_spread_bonus
    } else if max_alloc < config.moderate_spread_cutoff {
        config.moderate_spread_bonus
    } else {
        0
    };

    let score = allocations.len() as u32 * config.points_per_holding
        + unique_sectors.len() as u32 * config.points_per_sector
        + spread_bonus;

    score.min(100)
}
