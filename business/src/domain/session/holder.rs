use std::sync::{PoisonError, RwLock};

use super::model::{AccessToken, Identity, Session};

/// Process-wide holder of the single active session.
///
/// State transitions are `Anonymous -> Authenticated` on login/registration
/// and `Authenticated -> Anonymous` on logout or on any authorization failure
/// reported by a remote call. Persistence side effects go through the
/// `SessionStore` port in the use cases and the REST adapter.
#[derive(Debug, Default)]
pub struct SessionHolder {
    inner: RwLock<Session>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        match &*self.inner.read().unwrap_or_else(PoisonError::into_inner) {
            Session::Authenticated { identity, .. } => Some(identity.clone()),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<AccessToken> {
        match &*self.inner.read().unwrap_or_else(PoisonError::into_inner) {
            Session::Authenticated { token, .. } => Some(token.clone()),
            Session::Anonymous => None,
        }
    }

    pub fn sign_in(&self, identity: Identity, token: AccessToken) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            Session::Authenticated { identity, token };
    }

    pub fn sign_out(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Session::Anonymous;
    }
}
