use std::sync::{Arc, RwLock};

use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use tracing::warn;

use crate::domain::models::user::{Role, UserProfile};

/// Claims carried in the bearer token payload. Both the Spanish and English
/// field spellings occur across backend revisions.
#[derive(Deserialize)]
struct TokenClaims {
    #[serde(alias = "sub")]
    id: String,
    #[serde(alias = "name")]
    nombre: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    documento: Option<String>,
    #[serde(alias = "role")]
    rol: Role,
}

/// Decode the payload segment of a JWT-shaped token without verifying the
/// signature. Verification is the backend's job; the client only needs the
/// embedded profile. Returns `None` for anything malformed.
pub fn decode_token(token: &str) -> Option<UserProfile> {
    let payload = token.split('.').nth(1)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| general_purpose::STANDARD.decode(payload))
        .ok()?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).ok()?;
    Some(UserProfile {
        id: claims.id,
        name: claims.nombre,
        email: claims.email,
        document: claims.documento,
        role: claims.rol,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Process-wide session state. Single writer path (login, logout, 401),
/// many readers; consumers re-read per call instead of caching across
/// suspension points.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, token: String, user: UserProfile) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = Some(Session { token, user });
    }

    /// Rehydrate from a previously stored token. A token that no longer
    /// decodes clears the session instead of crashing.
    pub fn restore(&self, token: &str) -> bool {
        match decode_token(token) {
            Some(user) => {
                self.install(token.to_string(), user);
                true
            }
            None => {
                warn!("stored session token no longer decodes, clearing session");
                self.clear();
                false
            }
        }
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    pub fn is_staff(&self) -> bool {
        self.user().is_some_and(|u| u.is_staff())
    }

    pub fn is_customer(&self) -> bool {
        self.user().is_some_and(|u| u.is_customer())
    }
}
