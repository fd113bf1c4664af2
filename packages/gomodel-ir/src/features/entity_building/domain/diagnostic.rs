//! Non-fatal findings recorded during a build

use std::fmt;

use serde::Serialize;

use crate::shared::models::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// `ErrorKind::as_str` of the error this finding stands in for
    pub code: &'static str,
    pub message: String,
    pub file_path: String,
    pub decl_name: String,
    pub line: u32,
}

impl Diagnostic {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        file_path: impl Into<String>,
        decl_name: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            code: kind.as_str(),
            message: message.into(),
            file_path: file_path.into(),
            decl_name: decl_name.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {} ({})",
            self.file_path, self.line, self.code, self.message, self.decl_name
        )
    }
}
