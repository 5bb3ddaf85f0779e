//! Domain types shared by the NexusFin calculators.
//!
//! - [`Holding`]: a single portfolio position with a validating builder
//! - [`Allocation`]: the derived value/percentage view of a holding

mod allocation;
mod holding;

// Re-export all types
pub use allocation::Allocation;
pub use holding::{Holding, HoldingBuilder};
