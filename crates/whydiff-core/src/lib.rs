//! whydiff core - explains why two values compare as different
//!
//! This crate provides:
//! - A dynamic [`Value`] model with reference identity for composites
//! - The four equality tiers (identity, loose, shallow, deep)
//! - The recursive difference explainer
//! - Trace sinks for console, `tracing` and in-memory output
//! - Options loading, error and logging facilities

pub mod config;
pub mod equality;
pub mod errors;
pub mod explain;
pub mod logging_facility;
pub mod trace;
pub mod value;

// Re-export commonly used types
pub use config::{ExplainConfig, ExplainOptions};
pub use errors::{ExError, ExErrorKind, Result, WhyDiffError};
pub use explain::{explain, explain_at_depth};
pub use trace::{ConsoleSink, Finding, RecordingSink, Tone, TraceEvent, TraceSink, TracingSink};
pub use value::{Shape, Value};
