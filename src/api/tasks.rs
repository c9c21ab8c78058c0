use super::{bearer_headers, remote_error, TokenStore};
use crate::libs::config::ServerConfig;
use crate::libs::date;
use crate::libs::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

const TASKS_URL: &str = "tasks";

#[derive(Serialize, Debug)]
struct NewTask {
    desc: String,
    #[serde(rename = "estimateAt")]
    estimate_at: String,
}

/// Authenticated client for the task endpoints.
///
/// Every call attaches the cached bearer token. There is no retry: a
/// rejection (including an expired token) is surfaced to the caller as-is
/// and local state is left untouched.
pub struct Tasks {
    client: Client,
    config: ServerConfig,
    store: TokenStore,
}

impl Tasks {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
            store: TokenStore::new()?,
        })
    }

    /// Fetches every task with an estimated date up to the end of `date`.
    ///
    /// The result replaces any previously held list wholesale; ordering is
    /// whatever the server answered with.
    pub async fn fetch(&self, date: NaiveDate) -> Result<Vec<Task>> {
        let token = self.store.read()?;
        let url = format!("{}/{}", self.config.api_url, TASKS_URL);
        let res = self
            .client
            .get(url)
            .headers(bearer_headers(&token)?)
            .query(&[("date", date::end_of_day(date))])
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }

        Ok(res.json::<Vec<Task>>().await?)
    }

    /// Creates a task with the given description and estimated date.
    pub async fn create(&self, desc: &str, estimate_at: NaiveDate) -> Result<()> {
        let token = self.store.read()?;
        let url = format!("{}/{}", self.config.api_url, TASKS_URL);
        let new_task = NewTask {
            desc: desc.to_string(),
            estimate_at: date::calendar_date(estimate_at),
        };
        let res = self.client.post(url).headers(bearer_headers(&token)?).json(&new_task).send().await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }
        Ok(())
    }

    /// Toggles the completion state of a task. The server decides the
    /// resulting completion timestamp.
    pub async fn toggle(&self, task_id: i64) -> Result<()> {
        let token = self.store.read()?;
        let url = format!("{}/{}/{}/toggle", self.config.api_url, TASKS_URL, task_id);
        let res = self.client.put(url).headers(bearer_headers(&token)?).send().await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }
        Ok(())
    }

    /// Deletes a task by identifier.
    pub async fn delete(&self, task_id: i64) -> Result<()> {
        let token = self.store.read()?;
        let url = format!("{}/{}/{}", self.config.api_url, TASKS_URL, task_id);
        let res = self.client.delete(url).headers(bearer_headers(&token)?).send().await?;

        if !res.status().is_success() {
            return Err(remote_error(res).await.into());
        }
        Ok(())
    }
}
