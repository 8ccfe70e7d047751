//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResultStore` - write-once persistence of computed result documents

mod result_store;

pub use result_store::ResultStore;
