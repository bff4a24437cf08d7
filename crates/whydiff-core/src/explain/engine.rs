//! Tiered comparison and traversal.
//!
//! Each comparison tries identity, then loose, then shallow equality. Only
//! when all three fail does it pay for a deep comparison and descend into
//! children. Children that are identity-equal are skipped before recursing.

use crate::config::{ExplainConfig, ExplainOptions};
use crate::equality::{deep_eq, identity_eq, loose_eq, shallow_eq};
use crate::trace::{Finding, TraceSink};
use crate::value::{Shape, Value};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Explain why `before` and `after` differ
///
/// Resolves `options` onto the defaults once, then runs the comparison from
/// depth 0. All output goes to `sink`.
pub fn explain(
    name: &str,
    before: &Value,
    after: &Value,
    options: &ExplainOptions,
    sink: &mut dyn TraceSink,
) {
    let config = options.resolve();
    let started = Instant::now();
    log_op_start!("explain", name = name, max_depth = config.max_depth());

    let mut tally = Tally::new(sink);
    explain_at_depth(name, before, after, &config, 0, &mut tally);

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    log_op_end!(
        "explain",
        duration_ms = duration_ms,
        name = name,
        lines = tally.lines
    );
}

/// One comparison at `depth`, recursing into children as needed
///
/// `depth` 0 is the top level: only there do the short-circuit lines and the
/// enclosing group apply.
pub fn explain_at_depth(
    name: &str,
    before: &Value,
    after: &Value,
    config: &ExplainConfig,
    depth: usize,
    sink: &mut dyn TraceSink,
) {
    tracing::debug!(name, depth, before = %before, after = %after, "comparing");

    let top_level = depth == 0;
    let shallow = shallow_eq(after, before);

    if top_level {
        if identity_eq(before, after) {
            sink.emit_line(name, Finding::TopLevelRefEqual);
            return;
        }
        if config.treats_top_level_as_shallow_comparable() && shallow {
            sink.emit_line(name, Finding::TopLevelShallowEqual);
            return;
        }
        sink.open_group(name);
    }

    if let Some(finding) = decide(name, before, after, shallow, config, depth, sink) {
        sink.emit_line(name, finding);
    }

    if top_level {
        sink.close_group();
    }
}

/// Run the tiers and, failing them, the traversal
///
/// Returns the terminal finding for this comparison, or `None` when the
/// traversal ran (its children speak for themselves) or no rule applied.
fn decide(
    name: &str,
    before: &Value,
    after: &Value,
    shallow: bool,
    config: &ExplainConfig,
    depth: usize,
    sink: &mut dyn TraceSink,
) -> Option<Finding> {
    if identity_eq(before, after) {
        return Some(Finding::RefEqual);
    }
    if loose_eq(before, after) {
        return Some(Finding::LooseEqual);
    }
    if shallow {
        return Some(Finding::ShallowEqual);
    }

    let deep = deep_eq(after, before);
    if depth == 0 && deep {
        sink.emit_line(name, Finding::DeepEqualTree);
    }

    if before.is_nullish() {
        return Some(Finding::BeforeEmpty);
    }
    if after.is_nullish() {
        return Some(Finding::AfterEmpty);
    }
    if config.depth_limit_reached(depth) {
        return Some(Finding::DepthLimit);
    }

    let undefined = Value::Undefined;
    match (before.shape(), after.shape()) {
        (Shape::Sequence(prev), Shape::Sequence(next)) => {
            if deep {
                sink.emit_line(name, Finding::SkippingDeepEqualSequence);
                return None;
            }
            for (index, next_item) in next.iter().enumerate() {
                let prev_item = prev.get(index).unwrap_or(&undefined);
                if !identity_eq(prev_item, next_item) {
                    let child = format!("{}[{}]", name, index);
                    explain_at_depth(&child, prev_item, next_item, config, depth + 1, sink);
                }
            }
        }
        // Sequence against non-sequence: no rule applies
        (Shape::Sequence(_), _) | (_, Shape::Sequence(_)) => {}
        (_, Shape::Record(next)) => {
            for (key, next_value) in next {
                let child = format!("{}.{}", name, key);
                if config.is_excluded(key) {
                    sink.emit_line(&child, Finding::SkippingExcludedField);
                    continue;
                }
                let prev_value = before.member(key).unwrap_or(&undefined);
                if !identity_eq(prev_value, next_value) {
                    explain_at_depth(&child, prev_value, next_value, config, depth + 1, sink);
                }
            }
        }
        // Scalar mismatch: nothing further to say
        (_, Shape::Scalar) => {}
    }

    None
}

/// Counts lines passed through to the caller's sink for the end-of-op log
struct Tally<'a> {
    inner: &'a mut dyn TraceSink,
    lines: u64,
}

impl<'a> Tally<'a> {
    fn new(inner: &'a mut dyn TraceSink) -> Self {
        Self { inner, lines: 0 }
    }
}

impl TraceSink for Tally<'_> {
    fn emit_line(&mut self, label: &str, finding: Finding) {
        self.lines += 1;
        self.inner.emit_line(label, finding);
    }

    fn open_group(&mut self, label: &str) {
        self.inner.open_group(label);
    }

    fn close_group(&mut self) {
        self.inner.close_group();
    }
}
