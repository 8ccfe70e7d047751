//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `numbers` - Five-number input, derived statistics and result documents

pub mod foundation;
pub mod numbers;
