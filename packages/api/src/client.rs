//! HTTP client for the lesson and auth endpoints.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{ApiConfig, Role, UserRecord};

use crate::error::ApiError;
use crate::lesson::UploadPayload;
use crate::preview::{UploadResponse, UploadResult};
use crate::upload::LessonUploader;

pub const UPLOAD_PATH: &str = "/api/lessons/upload_content";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Sign-up form contents.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    user: UserRecord,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign in; the returned role is read from the user's `user_type`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(UserRecord, Role), ApiError> {
        let response = self
            .http
            .post(self.url(LOGIN_PATH))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body: AuthResponse = read_json(response).await?;
        let role = body.user.role()?;
        Ok((body.user, role))
    }

    pub async fn register(&self, registration: &Registration) -> Result<(UserRecord, Role), ApiError> {
        let response = self
            .http
            .post(self.url(REGISTER_PATH))
            .json(registration)
            .send()
            .await?;
        let body: AuthResponse = read_json(response).await?;
        let role = body.user.role()?;
        Ok((body.user, role))
    }

    pub async fn upload_lesson(&self, payload: UploadPayload) -> Result<UploadResult, ApiError> {
        let form = multipart_form(payload)?;
        let response = self
            .http
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        let body: UploadResponse = read_json(response).await?;
        Ok(body.lesson)
    }
}

impl LessonUploader for ApiClient {
    async fn upload(&self, payload: UploadPayload) -> Result<UploadResult, ApiError> {
        self.upload_lesson(payload).await
    }
}

fn multipart_form(payload: UploadPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in payload.fields {
        form = form.text(name, value);
    }
    if let Some(part) = payload.file {
        let mut file = Part::bytes(part.file.bytes).file_name(part.file.name);
        if let Some(mime) = part.file.mime.as_deref() {
            file = file.mime_str(mime)?;
        }
        form = form.part(part.field, file);
    }
    Ok(form)
}

/// Deserialize a success body, or turn an error status into
/// [`ApiError::Status`] carrying the server's `detail`.
async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(status_error(status.as_u16(), &text));
    }
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status,
        detail: error_detail(body),
    }
}

/// The `detail` member of an error body. Strings are used as-is, anything
/// else (e.g. a list of validation errors) as compact JSON.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
