use super::{remote_error, TokenStore};
use crate::libs::config::ServerConfig;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SIGNUP_URL: &str = "signup";
const SIGNIN_URL: &str = "signin";

#[derive(Serialize, Clone, Debug)]
pub struct SignupCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct SigninCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
struct SigninResponse {
    token: String,
}

/// Client for the account endpoints of the task service.
pub struct Auth {
    client: Client,
    config: ServerConfig,
    store: TokenStore,
}

impl Auth {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            store: TokenStore::new()?,
        })
    }

    /// Creates an account. The service issues no token on sign-up; the
    /// caller is expected to sign in afterwards.
    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<()> {
        let url = format!("{}/{}", self.config.api_url, SIGNUP_URL);
        let res = self.client.post(url).json(credentials).send().await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }
        Ok(())
    }

    /// Exchanges credentials for a session token and caches it for the
    /// task endpoints.
    pub async fn signin(&self, credentials: &SigninCredentials) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url, SIGNIN_URL);
        let res = self.client.post(url).json(credentials).send().await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }

        let session = res.json::<SigninResponse>().await?;
        self.store.write(&session.token)?;
        Ok(session.token)
    }
}
