//! bankcore — deterministic fixed-point banking calculators.
//!
//! Money is integer cents, rates are integer basis points, and every
//! function is total: malformed inputs are clamped or treated as declined
//! no-ops instead of raising errors. Shared primitives live in [`types`];
//! each calculation domain gets its own module.

pub mod account;
pub mod compliance;
pub mod credit;
pub mod currency;
pub mod investment;
pub mod lending;
pub mod tax;
pub mod types;
