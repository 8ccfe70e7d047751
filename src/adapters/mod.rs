//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum router serving the form page and JSON API
//! - `postgres` - JSONB document store for results
//! - `memory` - in-process result store for tests and development

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{app_router, NumbersAppState};
pub use memory::InMemoryResultStore;
pub use postgres::PostgresResultStore;
