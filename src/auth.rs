//! Sign-in gate for generation.
//!
//! Identity is owned by an external provider; the session only asks whether
//! a user is currently permitted to run commands.

use std::sync::atomic::{AtomicBool, Ordering};

/// Answers "may the current user invoke generation?".
pub trait AuthProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Fixed-answer provider, switchable at runtime.
#[derive(Debug, Default)]
pub struct StaticAuth {
    signed_in: AtomicBool,
}

impl StaticAuth {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in: AtomicBool::new(signed_in),
        }
    }

    pub fn signed_in() -> Self {
        Self::new(true)
    }

    pub fn signed_out() -> Self {
        Self::new(false)
    }

    pub fn set_signed_in(&self, signed_in: bool) {
        self.signed_in.store(signed_in, Ordering::SeqCst);
    }
}

impl AuthProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn toggles_through_shared_handle() {
        let auth = Arc::new(StaticAuth::signed_out());
        let provider: Arc<dyn AuthProvider> = auth.clone();
        assert!(!provider.is_authenticated());

        auth.set_signed_in(true);
        assert!(provider.is_authenticated());
    }

    #[test]
    fn default_is_signed_out() {
        assert!(!StaticAuth::default().is_authenticated());
    }
}
