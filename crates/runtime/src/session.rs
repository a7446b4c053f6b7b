//! Signing out of the identity backend.
//!
//! Sign-out failures are logged and swallowed; the client always proceeds as
//! if the session ended.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;

use crate::api::SessionProvider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active session")]
    NotSignedIn,

    #[error("identity backend rejected sign-out: {0}")]
    Backend(String),
}

/// End the session held by `provider`.
///
/// Returns `true` when the provider confirmed the sign-out.
pub async fn sign_out(provider: &dyn SessionProvider) -> bool {
    match provider.sign_out().await {
        Ok(()) => {
            tracing::info!("Signed out");
            true
        }
        Err(error) => {
            tracing::warn!(%error, "Sign-out failed");
            false
        }
    }
}

/// Process-local session flag.
pub struct LocalSession {
    signed_in: AtomicBool,
}

impl LocalSession {
    pub fn signed_in() -> Self {
        Self {
            signed_in: AtomicBool::new(true),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::signed_in()
    }
}

#[async_trait]
impl SessionProvider for LocalSession {
    async fn sign_out(&self) -> Result<(), SessionError> {
        if self.signed_in.swap(false, Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SessionError::NotSignedIn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSession;

    #[async_trait]
    impl SessionProvider for FailingSession {
        async fn sign_out(&self) -> Result<(), SessionError> {
            Err(SessionError::Backend("network unreachable".into()))
        }
    }

    #[tokio::test]
    async fn local_session_signs_out_once() {
        let session = LocalSession::signed_in();

        assert!(sign_out(&session).await);
        assert!(!session.is_signed_in());
        assert!(!sign_out(&session).await);
    }

    #[tokio::test]
    async fn backend_failure_is_swallowed() {
        assert!(!sign_out(&FailingSession).await);
    }
}
