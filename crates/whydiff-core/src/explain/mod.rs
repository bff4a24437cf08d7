//! Difference explainer.
//!
//! Answers "why are these two values different?" by walking both values
//! together and reporting, at each level, the cheapest equality tier that
//! holds, or where the trees stop agreeing.
//!
//! ## Entry point
//!
//! ```
//! use whydiff_core::{explain, ExplainOptions, RecordingSink, Value};
//!
//! let shared = Value::array([Value::from(1)]);
//! let before = Value::object([("items", shared.clone()), ("page", Value::from(1))]);
//! let after = Value::object([("items", shared), ("page", Value::from(1))]);
//!
//! let mut sink = RecordingSink::new();
//! explain("props", &before, &after, &ExplainOptions::default(), &mut sink);
//! assert_eq!(sink.render(), "props: 🍾 shallow equals (but not ref equals)\n");
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every pair of values is handled; nothing panics or fails.
//! - **Bounded recursion**: no path descends past `max_depth`.
//! - **Balanced output**: a group opened at the top level is always closed.
//! - **No mutation**: inputs are only read.

pub mod engine;

pub use engine::{explain, explain_at_depth};
