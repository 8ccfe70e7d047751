//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types shared by the
//! rest of the domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DocumentId;
pub use timestamp::Timestamp;
