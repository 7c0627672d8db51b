use skydesk_shared::Masked;
use std::sync::{Arc, RwLock};

/// Source of the operator's authentication token.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<Masked<String>>;
}

pub type SharedSession = Arc<dyn SessionStore>;

/// A session whose token is fixed up front (config, environment, tests) and
/// can be cleared to simulate a logout.
#[derive(Debug, Default)]
pub struct StaticSession {
    token: RwLock<Option<Masked<String>>>,
}

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty()).map(Masked);
        Self {
            token: RwLock::new(token),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
        tracing::info!("Session token cleared");
    }
}

impl SessionStore for StaticSession {
    fn token(&self) -> Option<Masked<String>> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}
