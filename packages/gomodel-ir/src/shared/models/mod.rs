//! Shared models

mod comment;
mod error;
mod span;

pub use comment::{Comment, CommentGroup};
pub use error::{ErrorKind, ModelError, Result};
pub use span::Span;
