//! Indented plain-text sink, modelled on a browser console's grouped log.

use super::{Finding, TraceSink};
use crate::errors::{Result, WhyDiffError};
use std::io::Write;

const INDENT: &str = "  ";

/// Writes `label: message` lines, indenting two spaces per open group
///
/// Write failures do not interrupt the explainer: the first one is latched,
/// later output is dropped, and [`ConsoleSink::finish`] reports it.
pub struct ConsoleSink<W: Write> {
    out: W,
    depth: usize,
    error: Option<std::io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            error: None,
        }
    }

    fn write_line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        let indent = INDENT.repeat(self.depth);
        if let Err(e) = writeln!(self.out, "{indent}{text}") {
            self.error = Some(e);
        }
    }

    /// Flush and hand back the writer
    ///
    /// # Errors
    ///
    /// `SinkWrite` if any write or the final flush failed.
    pub fn finish(mut self) -> Result<W> {
        if self.error.is_none() {
            if let Err(e) = self.out.flush() {
                self.error = Some(e);
            }
        }
        match self.error {
            Some(e) => Err(WhyDiffError::SinkWrite {
                reason: e.to_string(),
            }),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> TraceSink for ConsoleSink<W> {
    fn emit_line(&mut self, label: &str, finding: Finding) {
        self.write_line(&format!("{}: {}", label, finding.message()));
    }

    fn open_group(&mut self, label: &str) {
        self.write_line(&format!("▼ {}", label));
        self.depth += 1;
    }

    fn close_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_groups_indent_nested_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.open_group("props");
        sink.emit_line("props.items", Finding::SkippingDeepEqualSequence);
        sink.open_group("inner");
        sink.emit_line("inner.x", Finding::AfterEmpty);
        sink.close_group();
        sink.close_group();
        sink.emit_line("next", Finding::TopLevelRefEqual);

        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "▼ props",
                "  props.items: 🚀 skipping deep equal sequence",
                "  ▼ inner",
                "    inner.x: after is empty",
                "next: 🍾 ref equals",
            ]
        );
    }

    #[test]
    fn test_unbalanced_close_does_not_underflow() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.close_group();
        sink.emit_line("a", Finding::LooseEqual);
        let text = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(text, "a: 👍 loose equals\n");
    }

    #[test]
    fn test_write_failure_is_reported_by_finish() {
        let mut sink = ConsoleSink::new(BrokenPipe);
        sink.emit_line("a", Finding::LooseEqual);
        sink.emit_line("b", Finding::LooseEqual);
        let err = sink.finish().err().expect("write failure should surface");
        assert!(matches!(err, WhyDiffError::SinkWrite { .. }));
    }
}
