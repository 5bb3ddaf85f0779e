//! Property-based tests for scoring invariants.
//!
//! These verify the properties that must hold for any well-formed
//! holdings list:
//! - Allocation values sum to the total investment
//! - Allocation percentages sum to 100
//! - The risk score stays in [1.0, 3.0]
//! - The diversification score stays in [0, 100]
//! - Summaries are idempotent

use nexusfin_portfolio::prelude::*;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;

// =============================================================================
// STRATEGIES
// =============================================================================

const SECTORS: &[&str] = &[
    "Technology",
    "Semiconductors",
    "Crypto",
    "Automotive",
    "Healthcare",
    "Energy",
    "Utilities",
    "Financials",
];

const SYMBOLS: &[&str] = &[
    "AAPL", "MSFT", "NVDA", "TSLA", "JNJ", "XOM", "KO", "GME", "AMC", "COIN", "BITO", "VOO",
];

/// One generated position: shares and cost in thousandths, optional sector.
fn holding_strategy() -> impl Strategy<Value = Holding> {
    (
        select(SYMBOLS),
        1i64..=5_000_000,
        1i64..=2_000_000,
        option::of(select(SECTORS)),
    )
        .prop_map(|(symbol, shares_milli, cost_milli, sector)| {
            let builder = Holding::builder()
                .symbol(symbol)
                .shares(Decimal::new(shares_milli, 3))
                .avg_cost(Decimal::new(cost_milli, 3));
            match sector {
                Some(s) => builder.sector(s).build().unwrap(),
                None => builder.build().unwrap(),
            }
        })
}

fn holdings_strategy() -> impl Strategy<Value = Vec<Holding>> {
    vec(holding_strategy(), 1..20)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_allocation_values_sum_to_total(holdings in holdings_strategy()) {
        let summary = summarize(holdings, &RiskConfig::default());

        let value_sum: Decimal = summary.allocations.iter().map(|a| a.value).sum();
        prop_assert_eq!(value_sum, summary.total_investment);
    }

    #[test]
    fn prop_allocation_pcts_sum_to_100(holdings in holdings_strategy()) {
        let summary = summarize(holdings, &RiskConfig::default());

        let pct_sum: f64 = summary.allocations.iter().map(|a| a.pct).sum();
        prop_assert!((pct_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn prop_allocations_sorted_descending(holdings in holdings_strategy()) {
        let summary = summarize(holdings, &RiskConfig::default());

        for pair in summary.allocations.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn prop_risk_score_in_range(holdings in holdings_strategy()) {
        let summary = summarize(holdings, &RiskConfig::default());

        prop_assert!(summary.risk_score >= 1.0);
        prop_assert!(summary.risk_score <= 3.0);
    }

    #[test]
    fn prop_diversification_score_in_range(holdings in holdings_strategy()) {
        let summary = summarize(holdings, &RiskConfig::default());

        prop_assert!(summary.diversification_score <= 100);
    }

    #[test]
    fn prop_label_agrees_with_score(holdings in holdings_strategy()) {
        let config = RiskConfig::default();
        let summary = summarize(holdings, &config);

        let expected = RiskLabel::from_score(summary.risk_score, &config);
        prop_assert_eq!(summary.risk_label, expected);
    }

    #[test]
    fn prop_summary_idempotent(holdings in holdings_strategy()) {
        let config = RiskConfig::default();

        let first = summarize(holdings.clone(), &config);
        let second = summarize(holdings, &config);

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
