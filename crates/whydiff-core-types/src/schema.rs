//! Canonical schema constants for structured logging and trace events
//!
//! These constants keep field names consistent between the logging macros,
//! the tracing-backed trace sink and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison fields
pub const FIELD_NAME: &str = "name";
pub const FIELD_DEPTH: &str = "depth";
pub const FIELD_MAX_DEPTH: &str = "max_depth";

// Trace line fields
pub const FIELD_LABEL: &str = "label";
pub const FIELD_FINDING: &str = "finding";
pub const FIELD_TONE: &str = "tone";
pub const FIELD_MESSAGE: &str = "message";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_TRACE_LINE: &str = "trace_line";
pub const EVENT_GROUP_OPEN: &str = "group_open";
pub const EVENT_GROUP_CLOSE: &str = "group_close";
