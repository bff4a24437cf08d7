use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using WhyDiffError
pub type Result<T> = std::result::Result<T, WhyDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The explainer itself never fails. These kinds classify the failures of the
/// layers around it: loading options, loading values, writing trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Caller-supplied input is unusable (e.g. both values read from stdin)
    InvalidInput,
    /// Options file is malformed or names an unknown key
    InvalidConfig,
    /// A value document is not valid JSON
    Parse,
    /// Reading a file or stream failed
    Io,
    /// A trace sink could not deliver its output
    Sink,
    Serialization,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Sink => "ERR_SINK",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus optional context (operation, path) for
/// programmatic handling and for the `log_op_error!` macro.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Concrete failures raised around the explainer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WhyDiffError {
    /// Options document could not be parsed
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// A value document is not valid JSON
    #[error("Invalid JSON in {source_name}: {reason}")]
    InvalidJson { source_name: String, reason: String },

    /// File or stream could not be read
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Trace output could not be written
    #[error("Failed to write trace output: {reason}")]
    SinkWrite { reason: String },

    /// Caller input rejected before any comparison ran
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<WhyDiffError> for ExError {
    fn from(err: WhyDiffError) -> Self {
        match err {
            WhyDiffError::InvalidOptions { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_options")
                .with_message(reason),

            WhyDiffError::InvalidJson {
                source_name,
                reason,
            } => ExError::new(ExErrorKind::Parse)
                .with_op("load_value")
                .with_path(source_name)
                .with_message(reason),

            WhyDiffError::Read { path, reason } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(reason),

            WhyDiffError::SinkWrite { reason } => ExError::new(ExErrorKind::Sink)
                .with_op("emit_trace")
                .with_message(reason),

            WhyDiffError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            WhyDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for WhyDiffError {
    fn from(err: serde_json::Error) -> Self {
        WhyDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WhyDiffError {
    fn from(err: toml::de::Error) -> Self {
        WhyDiffError::InvalidOptions {
            reason: err.to_string(),
        }
    }
}
