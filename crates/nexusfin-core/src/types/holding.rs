//! Holding representation and validating builder.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single portfolio position.
///
/// Holdings are created in bulk by the CSV import collaborator and are
/// read-only to the calculators. Validation happens here, at the system
/// boundary: downstream code may assume positive share counts and costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Short uppercase identifier, unique per user.
    pub symbol: String,

    /// Number of shares held. Fractional shares are allowed.
    pub shares: Decimal,

    /// Average cost per share, currency-agnostic.
    pub avg_cost: Decimal,

    /// Free-text sector label. `None` means unclassified, which is
    /// distinct from any named sector.
    pub sector: Option<String>,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the invested value of this position (`shares * avg_cost`).
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.shares * self.avg_cost
    }
}

/// Builder for constructing a validated [`Holding`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    symbol: Option<String>,
    shares: Option<Decimal>,
    avg_cost: Option<Decimal>,
    sector: Option<String>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the share count.
    #[must_use]
    pub fn shares(mut self, shares: Decimal) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Sets the average cost per share.
    #[must_use]
    pub fn avg_cost(mut self, avg_cost: Decimal) -> Self {
        self.avg_cost = Some(avg_cost);
        self
    }

    /// Sets the sector label.
    ///
    /// Empty or all-whitespace labels normalize to unclassified; the
    /// upstream import feed leaves the column blank rather than omitting it.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        let sector = sector.into();
        self.sector = if sector.trim().is_empty() {
            None
        } else {
            Some(sector)
        };
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, or if the share
    /// count or average cost is not strictly positive.
    pub fn build(self) -> CoreResult<Holding> {
        let symbol = self.symbol.ok_or_else(|| CoreError::missing_field("symbol"))?;

        let shares = self.shares.ok_or_else(|| CoreError::missing_field("shares"))?;

        let avg_cost = self
            .avg_cost
            .ok_or_else(|| CoreError::missing_field("avg_cost"))?;

        if shares <= Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &symbol,
                "shares must be positive",
            ));
        }

        if avg_cost <= Decimal::ZERO {
            return Err(CoreError::invalid_holding(
                &symbol,
                "avg_cost must be positive",
            ));
        }

        Ok(Holding {
            symbol,
            shares,
            avg_cost,
            sector: self.sector,
        })
    }
}
