use std::sync::Arc;

use tracing::info;

use crate::domain::models::user::{Credentials, Registration, UserProfile};
use crate::domain::ports::AuthApi;
use crate::domain::services::validation;
use crate::error::AppError;
use crate::session::{decode_token, SessionStore};

/// Account flows over the auth endpoints. Each operation issues exactly one
/// request; a failure leaves whatever session existed before untouched.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    session: SessionStore,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, credentials: Credentials) -> Result<UserProfile, AppError> {
        validation::validate_email(&credentials.email)?;
        let token = self.api.login(&credentials).await?;
        let user = decode_token(&token)
            .ok_or_else(|| AppError::Decode("login returned an undecodable token".into()))?;
        self.session.install(token, user.clone());
        info!("session established for {}", user.id);
        Ok(user)
    }

    pub async fn register(&self, registration: Registration) -> Result<(), AppError> {
        validation::validate_registration(&registration)?;
        self.api.register(&registration).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        validation::validate_email(email)?;
        self.api.forgot_password(email).await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        validation::validate_password(password)?;
        self.api.reset_password(token, password).await
    }

    /// Unconditional and infallible.
    pub fn logout(&self) {
        self.session.clear();
        info!("session cleared");
    }

    /// Rehydrate a stored token; corrupt tokens clear the session.
    pub fn restore(&self, token: &str) -> bool {
        self.session.restore(token)
    }
}
