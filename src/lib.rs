//! Bitwise Stats - five-number statistics over a web form
//!
//! This crate validates five submitted numbers, derives a handful of
//! statistics from them, stores the input and result as a document and
//! renders the outcome back to the user.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
