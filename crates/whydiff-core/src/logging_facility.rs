//! Structured logging facility for whydiff
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The logging facility reports on the tool itself (which comparison ran, how
//! long it took). The explanation trace is a separate channel: see
//! [`crate::trace`], whose `TracingSink` can route it through here as well.
//!
//! # Usage
//!
//! ```rust
//! use whydiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
