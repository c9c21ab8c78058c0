//! Persisted display preference for the task list.
//!
//! A single JSON entry (`{"showDoneTasks": …}`) stored in the application
//! data directory. The preference is client-local and has no server
//! representation. Reads fall back to the default silently so a missing or
//! corrupt file never blocks listing tasks; writes follow last-write-wins.

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const STATE_FILE_NAME: &str = "tasks_state.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TasksState {
    /// Whether completed tasks are shown in the filtered list.
    #[serde(rename = "showDoneTasks")]
    pub show_done_tasks: bool,
}

impl Default for TasksState {
    /// Show all tasks until the user hides completed ones.
    fn default() -> Self {
        TasksState { show_done_tasks: true }
    }
}

impl TasksState {
    /// Reads the persisted preference, defaulting on any failure.
    pub fn read() -> Self {
        Self::try_read().unwrap_or_default()
    }

    fn try_read() -> Result<Self> {
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        let state_str = fs::read_to_string(state_file_path)?;
        Ok(serde_json::from_str(&state_str)?)
    }

    /// Persists the preference, overwriting any previous value.
    pub fn save(&self) -> Result<()> {
        let state_file_path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        let state_file = File::create(state_file_path)?;
        serde_json::to_writer(&state_file, &self)?;
        Ok(())
    }

    /// Flips the preference and persists the new value.
    pub fn toggle(&mut self) -> Result<()> {
        self.show_done_tasks = !self.show_done_tasks;
        self.save()
    }
}
