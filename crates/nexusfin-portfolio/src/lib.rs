//! # NexusFin Portfolio
//!
//! Portfolio risk and diversification scoring for NexusFin.
//!
//! Given a user's holdings, this crate computes the aggregate
//! [`PortfolioSummary`]: total investment, per-holding allocation
//! percentages, a value-weighted 1.0-3.0 risk score with a concentration
//! penalty, a discrete risk label, and a 0-100 diversification score.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: stateless, synchronous, no I/O — safe on any thread
//! - **Injected constants**: the risk lists and thresholds live in
//!   [`RiskConfig`], not in the algorithms
//! - **Display-ready output**: scores come pre-rounded; consumers never
//!   re-round
//!
//! ## Quick Start
//!
//! ```
//! use nexusfin_portfolio::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::builder()
//!         .symbol("AAPL")
//!         .shares(dec!(10))
//!         .avg_cost(dec!(180))
//!         .sector("Technology")
//!         .build()
//!         .unwrap(),
//!     Holding::builder()
//!         .symbol("JNJ")
//!         .shares(dec!(12))
//!         .avg_cost(dec!(150))
//!         .sector("Healthcare")
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let summary = summarize(holdings, &RiskConfig::default());
//! assert_eq!(summary.allocations.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Module declarations
pub mod allocation;
pub mod config;
pub mod diversification;
pub mod risk;
pub mod summary;

// Re-export main types and entry points
pub use allocation::{build_allocations, max_allocation_pct, total_investment};
pub use config::RiskConfig;
pub use diversification::diversification_score;
pub use risk::{classify_allocation, risk_score, RiskBand, RiskLabel};
pub use summary::{summarize, PortfolioSummary};

/// Prelude module for convenient imports.
///
/// ```
/// use nexusfin_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::allocation::{build_allocations, max_allocation_pct, total_investment};
    pub use crate::config::RiskConfig;
    pub use crate::diversification::diversification_score;
    pub use crate::risk::{classify_allocation, risk_score, RiskBand, RiskLabel};
    pub use crate::summary::{summarize, PortfolioSummary};

    // Re-export commonly used types from dependencies
    pub use nexusfin_core::{Allocation, Holding, HoldingBuilder};
    pub use rust_decimal::Decimal;
}
