use std::path::PathBuf;

use clap::Parser;
use tasklist_core::seed::load_seed_file;
use tasklist_core::{FilterMode, TaskStore, TasklistError};

#[derive(Debug, Parser)]
#[command(name = "tasklist", about = "In-memory task list manager")]
pub struct TuiConfig {
    /// JSON file with the tasks to start from (read once, never written)
    #[arg(long, env = "TASKLIST_SEED", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with no tasks instead of the sample list
    #[arg(long)]
    pub empty: bool,

    /// Initial filter: all, active or completed
    #[arg(long, env = "TASKLIST_FILTER", default_value = "all")]
    pub filter: FilterMode,

    /// Append tracing output to this file. Logs are discarded otherwise,
    /// since the terminal belongs to the UI.
    #[arg(long, env = "TASKLIST_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl TuiConfig {
    /// The store the session starts with.
    pub fn initial_store(&self) -> Result<TaskStore, TasklistError> {
        if let Some(ref path) = self.seed {
            return load_seed_file(path);
        }
        if self.empty {
            Ok(TaskStore::new())
        } else {
            Ok(TaskStore::with_sample_tasks())
        }
    }
}
