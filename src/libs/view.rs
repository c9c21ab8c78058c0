use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "ESTIMATE", "DONE AT"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.desc,
                task.estimate_at,
                task.done_at.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
