//! Cooperative cancellation for long walks
//!
//! The token is `tokio_util`'s; it needs no runtime for `cancel` and
//! `is_cancelled`, so the synchronous walk polls it directly.

use std::time::{Duration, Instant};

pub use tokio_util::sync::CancellationToken;

use crate::shared::models::{ModelError, Result};

/// Token plus optional deadline, checked between filesystem steps
#[derive(Debug, Clone)]
pub(crate) struct StopCondition {
    token: CancellationToken,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
}

impl StopCondition {
    pub(crate) fn new(token: CancellationToken, timeout: Option<Duration>) -> Self {
        Self {
            token,
            deadline: timeout.map(|t| Instant::now() + t),
            timeout,
        }
    }

    pub(crate) fn check(&self, at: &str) -> Result<()> {
        if self.token.is_cancelled() {
            return Err(ModelError::cancelled("discovery cancelled").with_file(at));
        }
        if let (Some(deadline), Some(timeout)) = (self.deadline, self.timeout) {
            if Instant::now() >= deadline {
                return Err(ModelError::cancelled(format!(
                    "discovery timed out after {}ms",
                    timeout.as_millis()
                ))
                .with_file(at));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::ErrorKind;

    #[test]
    fn test_token_is_shared_between_clones() {
        let token = CancellationToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_stop_condition() {
        let token = CancellationToken::new();
        let stop = StopCondition::new(token.clone(), None);
        assert!(stop.check("/tmp").is_ok());

        token.cancel();
        let err = stop.check("/tmp").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Cancelled);
    }

    #[test]
    fn test_elapsed_deadline() {
        let stop = StopCondition::new(CancellationToken::new(), Some(Duration::ZERO));
        let err = stop.check("/tmp").unwrap_err();
        assert!(err.message.contains("timed out"));
    }
}
