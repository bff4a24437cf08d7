//! Sink that routes the explanation into the `tracing` event stream.

use super::{Finding, Tone, TraceSink};
use tracing::span::EnteredSpan;
use whydiff_core_types::schema::{EVENT_GROUP_CLOSE, EVENT_GROUP_OPEN, EVENT_TRACE_LINE};

/// Lines become events, groups become entered `trace_group` spans
///
/// Suspicious lines are logged at `WARN`, everything else at `INFO`.
#[derive(Default)]
pub struct TracingSink {
    open: Vec<EnteredSpan>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for TracingSink {
    fn emit_line(&mut self, label: &str, finding: Finding) {
        match finding.tone() {
            Tone::Suspicious => tracing::warn!(
                component = module_path!(),
                event = EVENT_TRACE_LINE,
                label = label,
                finding = finding.code(),
                tone = ?finding.tone(),
                message = finding.message(),
            ),
            _ => tracing::info!(
                component = module_path!(),
                event = EVENT_TRACE_LINE,
                label = label,
                finding = finding.code(),
                tone = ?finding.tone(),
                message = finding.message(),
            ),
        }
    }

    fn open_group(&mut self, label: &str) {
        tracing::info!(
            component = module_path!(),
            event = EVENT_GROUP_OPEN,
            label = label,
        );
        let span = tracing::info_span!("trace_group", label = label).entered();
        self.open.push(span);
    }

    fn close_group(&mut self) {
        if let Some(span) = self.open.pop() {
            drop(span);
            tracing::info!(component = module_path!(), event = EVENT_GROUP_CLOSE);
        }
    }
}

impl Drop for TracingSink {
    fn drop(&mut self) {
        // Spans must exit innermost first
        while let Some(span) = self.open.pop() {
            drop(span);
        }
    }
}
