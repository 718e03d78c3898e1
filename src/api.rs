//! REST API Client
//!
//! Frontend bindings to the celebration backend. Every call goes through an
//! [`ApiClient`] carrying the session's bearer token explicitly; there is no
//! ambient token lookup. On wasm32 reqwest rides the browser fetch API.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    BackendLoginResponse, HealthStatus, LoginOutcome, MessageLog, PersonUpdate, RawUploadResponse,
    RegenerateWishRequest, UploadOutcome, WishRequest, WishResponse,
};
use jubilee_core::{MonthDay, RecurringEvent};

/// Build-time backend location, overridable per deployment.
pub fn base_url() -> &'static str {
    option_env!("JUBILEE_API_URL").unwrap_or("http://localhost:8000")
}

/// What went wrong talking to the backend, split the way the UI reacts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response; never logs the user out.
    #[error("backend unreachable: {0}")]
    Network(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
    #[error("server error ({status})")]
    Server { status: u16 },
    #[error("unexpected status {status}: {message}")]
    BadStatus { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// One session's view of the backend.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Client attaching the given bearer token to every request.
    pub fn with_token(token: Option<String>) -> Self {
        Self { token }
    }

    /// Client that never sends credentials (login, anonymous wish requests).
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = Client::new().request(method, format!("{}{}", base_url(), path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(3600);
            return Err(ApiError::RateLimited { retry_after_secs });
        }
        if status.is_server_error() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        Self::decode(Self::send(self.request(Method::GET, path)).await?).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        Self::decode(Self::send(self.request(Method::POST, path).json(body)).await?).await
    }

    // ---- Health and scheduler ----

    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get_json("/health").await
    }

    pub async fn run_manual_check(&self) -> ApiResult<serde_json::Value> {
        Self::decode(Self::send(self.request(Method::POST, "/scheduler/manual-run")).await?).await
    }

    // ---- People ----

    pub async fn people(&self) -> ApiResult<Vec<RecurringEvent>> {
        self.get_json("/people").await
    }

    pub async fn update_person(&self, id: u64, update: &PersonUpdate) -> ApiResult<RecurringEvent> {
        Self::decode(
            Self::send(self.request(Method::PUT, &format!("/people/{id}")).json(update)).await?,
        )
        .await
    }

    pub async fn delete_person(&self, id: u64) -> ApiResult<()> {
        Self::send(self.request(Method::DELETE, &format!("/people/{id}"))).await?;
        Ok(())
    }

    // ---- Celebrations ----

    pub async fn todays_celebrations(&self) -> ApiResult<Vec<RecurringEvent>> {
        self.get_json("/celebrations/today").await
    }

    pub async fn celebrations_for(&self, day: MonthDay) -> ApiResult<Vec<RecurringEvent>> {
        self.get_json(&format!("/celebrations/{day}")).await
    }

    // ---- CSV upload ----

    pub async fn upload_csv(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadOutcome> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let response =
            Self::send(self.request(Method::POST, "/upload-csv").multipart(form)).await?;
        let raw: RawUploadResponse = Self::decode(response).await?;
        Ok(raw.into())
    }

    // ---- Messages ----

    pub async fn message_logs(&self) -> ApiResult<Vec<MessageLog>> {
        self.get_json("/messages").await
    }

    // ---- Auth ----

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginOutcome> {
        let raw: BackendLoginResponse = self
            .post_json(
                "/auth/login",
                &serde_json::json!({ "username": username, "password": password }),
            )
            .await?;
        Ok(raw.into())
    }

    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        account_type: &str,
    ) -> ApiResult<LoginOutcome> {
        let raw: BackendLoginResponse = self
            .post_json(
                "/auth/register",
                &serde_json::json!({
                    "full_name": full_name,
                    "email": email,
                    "password": password,
                    "account_type": account_type,
                }),
            )
            .await?;
        let mut outcome = LoginOutcome::from(raw);
        outcome.user.email = Some(email.to_string());
        Ok(outcome)
    }

    // ---- AI wish generation ----

    pub async fn generate_wish(&self, request: &WishRequest) -> ApiResult<WishResponse> {
        self.post_json("/api/anniversary-wish", request).await
    }

    pub async fn regenerate_wish(&self, request: &RegenerateWishRequest) -> ApiResult<WishResponse> {
        self.post_json("/api/anniversary-wish/regenerate", request).await
    }
}
