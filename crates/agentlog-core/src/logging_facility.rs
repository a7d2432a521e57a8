//! Diagnostics facility for agentlog itself
//!
//! The loggers handed out by the factory write application messages to
//! stdout. This module is separate: it reports what the factory does
//! (logger creation, level changes, sink failures) through `tracing`.
//!
//! - Single initialization point via `init(profile)`
//! - Operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use agentlog_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
