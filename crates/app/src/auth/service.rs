//! Auth service.

use std::sync::Arc;

use mockall::automock;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::{
    auth::AuthServiceError,
    storage::{AUTH_KEY, DocumentStore},
};

const AUTHENTICATED: &str = "true";

pub struct StoreAuthService {
    store: Arc<dyn DocumentStore>,
    secret: Zeroizing<String>,
}

impl std::fmt::Debug for StoreAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAuthService").finish_non_exhaustive()
    }
}

impl StoreAuthService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, secret: Zeroizing<String>) -> Self {
        Self { store, secret }
    }
}

impl AuthService for StoreAuthService {
    fn login(&self, password: &str) -> Result<bool, AuthServiceError> {
        if password != self.secret.as_str() {
            warn!("admin login rejected");

            return Ok(false);
        }

        self.store.write(AUTH_KEY, AUTHENTICATED)?;

        info!("admin logged in");

        Ok(true)
    }

    fn logout(&self) -> Result<(), AuthServiceError> {
        self.store.remove(AUTH_KEY)?;

        info!("admin logged out");

        Ok(())
    }

    fn is_authenticated(&self) -> Result<bool, AuthServiceError> {
        Ok(self.store.read(AUTH_KEY)?.as_deref() == Some(AUTHENTICATED))
    }
}

#[automock]
pub trait AuthService: Send + Sync {
    /// Compare `password` with the admin secret and open a session on match.
    fn login(&self, password: &str) -> Result<bool, AuthServiceError>;

    /// Close the admin session.
    fn logout(&self) -> Result<(), AuthServiceError>;

    /// Whether an admin session is open.
    fn is_authenticated(&self) -> Result<bool, AuthServiceError>;
}
