//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod numbers;

pub use numbers::{
    NumbersView, SubmitNumbersCommand, SubmitNumbersHandler, INVALID_INPUT_MESSAGE,
};
