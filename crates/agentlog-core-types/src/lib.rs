//! Core types shared across agentlog facilities
//!
//! This crate provides the vocabulary used by both the logger factory and
//! its own diagnostics:
//!
//! - **Severity levels**: the fixed, ordered `Level` set
//! - **Schema constants**: canonical diagnostic field keys and event names

pub mod level;
pub mod schema;

pub use level::{Level, ParseLevelError};
