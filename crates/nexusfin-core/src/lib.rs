//! # NexusFin Core
//!
//! Shared domain types for the NexusFin analytics crates.
//!
//! This crate defines the shapes that cross the system boundary — holdings
//! supplied by the import collaborator and the allocation view derived from
//! them — together with the formatting helpers both calculators share.
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: [`HoldingBuilder`] rejects malformed
//!   positions so the calculators never see them
//! - **Pure data**: no I/O, no caching, no interior mutability
//! - **Decimal money, float scores**: invested values are
//!   [`rust_decimal::Decimal`]; percentages and scores are `f64`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Module declarations
pub mod error;
pub mod format;
pub mod types;

// Re-export error types at crate root
pub use error::{CoreError, CoreResult};

// Re-export main types
pub use types::{Allocation, Holding, HoldingBuilder};
