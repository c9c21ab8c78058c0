use serde::{Deserialize, Serialize};

/// A unit of work owned by the remote task service.
///
/// The server is authoritative for every field, including `done_at`; the
/// client only ever holds a transient copy for display. Date fields are
/// kept as the server's own string representation since the client never
/// does arithmetic on them, it only checks `done_at` for null and prints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub desc: String,
    #[serde(rename = "estimateAt")]
    pub estimate_at: String,
    #[serde(rename = "doneAt")]
    pub done_at: Option<String>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        self.done_at.is_none()
    }
}

/// Filters a task list against the display preference.
///
/// With `show_done` set the result is the input unchanged; otherwise only
/// pending tasks (null completion timestamp) survive. Source order is
/// preserved in both cases.
pub fn filter_tasks(tasks: &[Task], show_done: bool) -> Vec<Task> {
    if show_done {
        tasks.to_vec()
    } else {
        tasks.iter().filter(|task| task.is_pending()).cloned().collect()
    }
}
