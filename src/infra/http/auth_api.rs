use async_trait::async_trait;

use crate::api::dtos::requests::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::api::dtos::responses::LoginResponse;
use crate::domain::models::user::{Credentials, Registration};
use crate::domain::ports::AuthApi;
use crate::error::AppError;
use crate::infra::http::client::HttpClient;

pub struct HttpAuthApi {
    http: HttpClient,
}

impl HttpAuthApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        let response = self
            .http
            .post_public("/api/auth/login", &LoginRequest::from(credentials))
            .await?;
        let body: LoginResponse = HttpClient::expect_json(response).await?;
        Ok(body.token)
    }

    async fn register(&self, registration: &Registration) -> Result<(), AppError> {
        let response = self
            .http
            .post_public("/api/auth/register", &RegisterRequest::from(registration))
            .await?;
        HttpClient::expect_success(response).await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post_public(
                "/api/auth/forgot-password",
                &ForgotPasswordRequest {
                    email: email.to_string(),
                },
            )
            .await?;
        HttpClient::expect_success(response).await
    }

    async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post_public(
                "/api/auth/reset-password",
                &ResetPasswordRequest {
                    token: token.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        HttpClient::expect_success(response).await
    }
}
