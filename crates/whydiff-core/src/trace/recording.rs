//! In-memory sink that keeps every event for later inspection.

use super::{ConsoleSink, Finding, TraceSink};
use serde::Serialize;

/// One emitted trace event, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    Line {
        label: String,
        finding: Finding,
        message: &'static str,
    },
    GroupOpen {
        label: String,
    },
    GroupClose,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<TraceEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// `(label, finding)` for every line, skipping group brackets
    pub fn lines(&self) -> Vec<(&str, Finding)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Line { label, finding, .. } => Some((label.as_str(), *finding)),
                _ => None,
            })
            .collect()
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.lines().into_iter().map(|(_, finding)| finding).collect()
    }

    pub fn groups_opened(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::GroupOpen { .. }))
            .count()
    }

    /// Every close matches an earlier open and nothing is left open
    pub fn is_balanced(&self) -> bool {
        let mut open = 0usize;
        for event in &self.events {
            match event {
                TraceEvent::GroupOpen { .. } => open += 1,
                TraceEvent::GroupClose => match open.checked_sub(1) {
                    Some(n) => open = n,
                    None => return false,
                },
                TraceEvent::Line { .. } => {}
            }
        }
        open == 0
    }

    /// Feed the recorded events into another sink
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        for event in &self.events {
            match event {
                TraceEvent::Line { label, finding, .. } => sink.emit_line(label, *finding),
                TraceEvent::GroupOpen { label } => sink.open_group(label),
                TraceEvent::GroupClose => sink.close_group(),
            }
        }
    }

    /// The text a [`ConsoleSink`] would have printed
    pub fn render(&self) -> String {
        let mut console = ConsoleSink::new(Vec::new());
        self.replay(&mut console);
        match console.finish() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl TraceSink for RecordingSink {
    fn emit_line(&mut self, label: &str, finding: Finding) {
        self.events.push(TraceEvent::Line {
            label: label.to_string(),
            finding,
            message: finding.message(),
        });
    }

    fn open_group(&mut self, label: &str) {
        self.events.push(TraceEvent::GroupOpen {
            label: label.to_string(),
        });
    }

    fn close_group(&mut self) {
        self.events.push(TraceEvent::GroupClose);
    }
}
