use crate::domain::user::{AuthResponse, Login, Registration, User};
use crate::ports::outbound::api::{ApiError, AuthApi};
use crate::ports::outbound::token_store::TokenStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Identity {
    token: Option<String>,
    user: Option<User>,
}

/// Shared view of the current credential.
///
/// Only [`Session`] mutates it; transports hold a clone and snapshot the
/// bearer token when a request is built.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    inner: Arc<RwLock<Identity>>,
}

impl Credentials {
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.read().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    fn seed(&self, token: String) {
        self.write().token = Some(token);
    }

    fn establish(&self, token: String, user: User) {
        let mut identity = self.write();
        identity.token = Some(token);
        identity.user = Some(user);
    }

    fn clear(&self) {
        let mut identity = self.write();
        identity.token = None;
        identity.user = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, Identity> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Identity> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct Session<A, TS> {
    api: A,
    store: TS,
    credentials: Credentials,
}

impl<A, TS> Session<A, TS>
where
    A: AuthApi + Send + Sync,
    TS: TokenStore + Send + Sync,
{
    /// Seeds `credentials` from durable storage. No network access happens
    /// here, so `is_authenticated` is meaningful straight away.
    pub fn restore(api: A, store: TS, credentials: Credentials) -> Self {
        if let Some(token) = store.load() {
            log::info!("Restored session from storage");
            credentials.seed(token);
        }

        Self {
            api,
            store,
            credentials,
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let registration = Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.register(&registration).await?;
        self.establish(&response);
        Ok(response)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let login = Login {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&login).await?;
        self.establish(&response);
        Ok(response)
    }

    pub fn logout(&self) {
        self.credentials.clear();
        if let Err(why) = self.store.remove() {
            log::warn!("Failed to remove stored token on logout - {why}");
        }
        log::info!("Logged out");
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.bearer().is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.credentials.user()
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }

    fn establish(&self, response: &AuthResponse) {
        self.credentials
            .establish(response.token.clone(), response.user.clone());
        if let Err(why) = self.store.save(&response.token) {
            log::warn!("Session will not survive a restart - {why}");
        }
        log::info!("Authenticated as {}", response.user.username);
    }
}
