//! Application state for the telelink API

use std::collections::HashMap;
use std::sync::Arc;

use telelink_core::ClientFactory;
use telelink_ops::Credentials;

/// Credential record used when a request does not name one
pub const DEFAULT_CREDENTIALS: &str = "default";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Builds one telematics client per request
    factory: Arc<dyn ClientFactory>,
    /// Named credential records
    credentials: Arc<HashMap<String, Credentials>>,
}

impl AppState {
    /// Create a new AppState without any credential records
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self::with_credentials(factory, HashMap::new())
    }

    /// Create a new AppState with named credential records
    pub fn with_credentials(
        factory: Arc<dyn ClientFactory>,
        credentials: HashMap<String, Credentials>,
    ) -> Self {
        Self {
            factory,
            credentials: Arc::new(credentials),
        }
    }

    pub fn factory(&self) -> &dyn ClientFactory {
        self.factory.as_ref()
    }

    /// Look up a credential record by name
    pub fn credentials(&self, name: &str) -> Option<&Credentials> {
        self.credentials.get(name)
    }

    /// Names of all configured credential records, sorted
    pub fn credential_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.credentials.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("credentials", &self.credential_names())
            .finish_non_exhaustive()
    }
}
