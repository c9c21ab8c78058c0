//! API client modules for the remote task service.
//!
//! Provides the sign-up/sign-in client and the authenticated task client,
//! plus the plumbing they share: the on-disk bearer-token cache, the
//! `Authorization` header construction, and best-effort extraction of the
//! server-provided message from failed responses.
//!
//! ## Session model
//!
//! Sign-in yields an opaque token that is cached in the application data
//! directory and attached as `Authorization: Bearer <token>` to every task
//! request. The cache is plain request-scoped state: a missing token file
//! simply means the user has to sign in again, and `logout` deletes it.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

// API client modules
pub mod auth;
pub mod tasks;

// Re-export clients for easier access from command modules
pub use auth::Auth;
pub use tasks::Tasks;

/// File name of the cached session token inside the data directory.
const TOKEN_FILE: &str = ".token";

/// A rejection from the remote service.
///
/// Carries the HTTP status and the most useful message that could be
/// extracted from the response body. The display form is just the message,
/// which is what gets surfaced to the user.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Builds an [`ApiError`] from a non-success response.
///
/// Error bodies vary: the service answers with JSON (`{"error": …}` or
/// `{"message": …}`) for application errors and plain text for others.
/// Falls back to the HTTP status line when the body is empty or unreadable.
pub async fn remote_error(res: Response) -> ApiError {
    let status = res.status();
    let message = match res.text().await {
        Ok(body) if !body.trim().is_empty() => match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) => json
                .get("error")
                .or_else(|| json.get("message"))
                .and_then(|value| value.as_str())
                .map(str::to_string)
                .unwrap_or(body),
            Err(_) => body,
        },
        _ => status.to_string(),
    };
    ApiError { status, message }
}

/// Builds the `Authorization: Bearer <token>` header set for task requests.
pub fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    Ok(headers)
}

/// On-disk cache for the session token.
#[derive(Clone)]
pub struct TokenStore {
    token_file_path: PathBuf,
}

impl TokenStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token_file_path: DataStorage::new().get_path(TOKEN_FILE)?,
        })
    }

    /// Reads the cached token, reporting a sign-in hint when absent.
    pub fn read(&self) -> Result<String> {
        let token = fs::read_to_string(&self.token_file_path).map_err(|_| msg_error_anyhow!(Message::NotLoggedIn))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(msg_error_anyhow!(Message::NotLoggedIn));
        }
        Ok(token)
    }

    pub fn write(&self, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(&self.token_file_path)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }

    /// Deletes the cached token. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        if self.token_file_path.exists() {
            fs::remove_file(&self.token_file_path)?;
        }
        Ok(())
    }
}
