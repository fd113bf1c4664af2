//! Pipeline orchestration

pub mod session;

pub use session::{ModelSession, SessionStats};
