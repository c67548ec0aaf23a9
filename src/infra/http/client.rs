use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;
use crate::session::SessionStore;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Authenticated fetch wrapper. The bearer token is re-read from the session
/// on every call, and a 401 clears the session before surfacing
/// `SessionExpired` to the caller; the request is never retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl HttpClient {
    pub fn new(base_url: String, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn authed(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let response = builder.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("401 from backend, clearing session");
            self.session.clear();
            return Err(AppError::SessionExpired);
        }
        Ok(response)
    }

    pub async fn get(&self, path: &str) -> Result<Response, AppError> {
        self.authed(self.client.get(self.url(path))).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        self.authed(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        self.authed(self.client.put(self.url(path)).json(body)).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        self.authed(self.client.patch(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, AppError> {
        self.authed(self.client.delete(self.url(path))).await
    }

    /// Unauthenticated POST for the auth endpoints: no bearer header, and a
    /// 401 here means bad credentials, not an expired session.
    pub async fn post_public<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        Ok(self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?)
    }

    pub async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    pub async fn expect_success(response: Response) -> Result<(), AppError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Non-2xx responses carry a `message` or `error` field when the backend
    /// has something to say; anything else gets a generic fallback.
    async fn api_error(response: Response) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| format!("HTTP error {status}"));
        if status == 404 {
            return AppError::NotFound(message);
        }
        AppError::Api { status, message }
    }
}
