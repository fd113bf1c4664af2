//! Error types for the gomodel-ir crate
//!
//! One categorized error struct for every stage of a session:
//! discovery (IO, syntax), resolution/building (unsupported shapes),
//! rendering and configuration.
//!
//! Every error can carry the offending file path, the declaration name and a
//! line so a caller can localize the fault without re-parsing.

use std::fmt;

use crate::config::ConfigError;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unreadable/unlistable directory or file, filesystem loops
    Io,
    /// The front-end could not parse a file
    Syntax,
    /// A type expression outside the five supported shapes
    UnsupportedType,
    /// A variable/constant initializer outside the supported shapes
    UnsupportedInitializer,
    /// A struct tag without any `key:"value"` pair
    MalformedTag,
    /// Discovery stopped by a cancellation token or timeout
    Cancelled,
    /// Invalid configuration
    Config,
    /// Template/entity mismatch while rendering
    Render,
    /// Internal errors (bugs)
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Syntax => "syntax",
            ErrorKind::UnsupportedType => "unsupported_type",
            ErrorKind::UnsupportedInitializer => "unsupported_initializer",
            ErrorKind::MalformedTag => "malformed_tag",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Config => "config",
            ErrorKind::Render => "render",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type
#[derive(Debug)]
pub struct ModelError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub decl_name: Option<String>,
    pub line: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ModelError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            decl_name: None,
            line: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Attach the declaration name unless a more specific one is already set
    pub fn with_decl(mut self, decl_name: impl Into<String>) -> Self {
        if self.decl_name.is_none() {
            self.decl_name = Some(decl_name.into());
        }
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, message)
    }

    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedType, message)
    }

    pub fn unsupported_initializer(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedInitializer, message)
    }

    pub fn malformed_tag(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTag, message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cancelled, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnsupportedType | ErrorKind::UnsupportedInitializer
        )
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        if let Some(ref decl) = self.decl_name {
            write!(f, " ({})", decl)?;
        }
        Ok(())
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ModelError>;

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::io(err.to_string()).with_source(err)
    }
}

impl From<walkdir::Error> for ModelError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.display().to_string());
        let message = match err.loop_ancestor() {
            Some(ancestor) => format!(
                "filesystem loop detected: directory links back to {}",
                ancestor.display()
            ),
            None => format!("cannot list directory: {}", err),
        };
        let mut model_err = ModelError::io(message);
        if let Some(path) = path {
            model_err = model_err.with_file(path);
        }
        model_err.with_source(err)
    }
}

impl From<ConfigError> for ModelError {
    fn from(err: ConfigError) -> Self {
        ModelError::config(err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::render(format!("JSON serialization error: {}", err)).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::unsupported_type("channel types are not supported")
            .with_file("pkg/queue.go")
            .with_line(42)
            .with_decl("Queue");

        let msg = format!("{}", err);
        assert!(msg.contains("unsupported_type"));
        assert!(msg.contains("channel types"));
        assert!(msg.contains("pkg/queue.go:42"));
        assert!(msg.contains("(Queue)"));
    }

    #[test]
    fn test_with_decl_keeps_innermost_name() {
        let err = ModelError::malformed_tag("no pair")
            .with_decl("Field")
            .with_decl("Struct");
        assert_eq!(err.decl_name.as_deref(), Some("Field"));
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ModelError = io.into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
