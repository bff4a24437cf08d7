//! Trace output: what the explainer says and where it goes.
//!
//! The explainer never writes anywhere itself. Every line and group bracket
//! goes through a [`TraceSink`] passed in by the caller, so the same
//! comparison can be printed to a terminal ([`ConsoleSink`]), routed into the
//! log stream ([`TracingSink`]) or recorded for inspection ([`RecordingSink`]).

pub mod console;
pub mod recording;
pub mod tracing_sink;

pub use console::ConsoleSink;
pub use recording::{RecordingSink, TraceEvent};
pub use tracing_sink::TracingSink;

use serde::Serialize;
use std::fmt;

/// How a line should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Comparison short-circuited cheaply; nothing to worry about
    Equal,
    /// Values are equal in content but not by reference: avoidable work
    Suspicious,
    /// Bookkeeping about the traversal itself
    Info,
    /// A real difference was located
    Different,
}

/// Every line the explainer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    TopLevelRefEqual,
    TopLevelShallowEqual,
    RefEqual,
    LooseEqual,
    ShallowEqual,
    DeepEqualTree,
    BeforeEmpty,
    AfterEmpty,
    DepthLimit,
    SkippingDeepEqualSequence,
    SkippingExcludedField,
}

impl Finding {
    pub fn message(&self) -> &'static str {
        match self {
            Finding::TopLevelRefEqual => "🍾 ref equals",
            Finding::TopLevelShallowEqual => "🍾 shallow equals (but not ref equals)",
            Finding::RefEqual => "👍 ref equals",
            Finding::LooseEqual => "👍 loose equals",
            Finding::ShallowEqual => "🤷 shallow equals, but not ref equals",
            Finding::DeepEqualTree => "🤷 entire tree is deep equal",
            Finding::BeforeEmpty => "before is empty",
            Finding::AfterEmpty => "after is empty",
            Finding::DepthLimit => "⚡ aborting: depth limit reached",
            Finding::SkippingDeepEqualSequence => "🚀 skipping deep equal sequence",
            Finding::SkippingExcludedField => "skipping excluded field",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Finding::TopLevelRefEqual => "top_level_ref_equal",
            Finding::TopLevelShallowEqual => "top_level_shallow_equal",
            Finding::RefEqual => "ref_equal",
            Finding::LooseEqual => "loose_equal",
            Finding::ShallowEqual => "shallow_equal",
            Finding::DeepEqualTree => "deep_equal_tree",
            Finding::BeforeEmpty => "before_empty",
            Finding::AfterEmpty => "after_empty",
            Finding::DepthLimit => "depth_limit",
            Finding::SkippingDeepEqualSequence => "skipping_deep_equal_sequence",
            Finding::SkippingExcludedField => "skipping_excluded_field",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Finding::TopLevelRefEqual
            | Finding::TopLevelShallowEqual
            | Finding::RefEqual
            | Finding::LooseEqual => Tone::Equal,
            Finding::ShallowEqual | Finding::DeepEqualTree => Tone::Suspicious,
            Finding::BeforeEmpty | Finding::AfterEmpty => Tone::Different,
            Finding::DepthLimit
            | Finding::SkippingDeepEqualSequence
            | Finding::SkippingExcludedField => Tone::Info,
        }
    }

    /// Whether this line ends the comparison that emitted it
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            Finding::DeepEqualTree
                | Finding::SkippingDeepEqualSequence
                | Finding::SkippingExcludedField
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Destination for explanation output
///
/// Implementations must accept arbitrarily nested groups and must not fail:
/// sinks that can hit I/O errors latch them and report after the fact.
pub trait TraceSink {
    /// Emit one terminal or informational line
    fn emit_line(&mut self, label: &str, finding: Finding);

    /// Open a named group; subsequent lines nest inside it
    fn open_group(&mut self, label: &str);

    /// Close the innermost open group
    fn close_group(&mut self);
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn emit_line(&mut self, label: &str, finding: Finding) {
        (**self).emit_line(label, finding);
    }

    fn open_group(&mut self, label: &str) {
        (**self).open_group(label);
    }

    fn close_group(&mut self) {
        (**self).close_group();
    }
}
