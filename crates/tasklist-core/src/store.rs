use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};

use crate::task::{filter_tasks, FilterMode, Task, TaskId};

/// Number of tasks on each side of the completed flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

/// Ordered, in-memory collection of tasks.
///
/// Every operation is total: an unknown id is a no-op, never an error.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// `None` once every id up to `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a store from existing records, keeping their order.
    /// A record whose id was already seen is dropped.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id) {
                kept.push(task);
            } else {
                warn!(id = %task.id, title = %task.title, "dropping task with duplicate id");
            }
        }
        let next_id = kept
            .iter()
            .map(|t| t.id.get())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            tasks: kept,
            next_id,
        }
    }

    pub fn with_sample_tasks() -> Self {
        Self::from_tasks(crate::sample::sample_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filtered(&self, mode: FilterMode) -> Vec<&Task> {
        filter_tasks(&self.tasks, mode)
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Take the next unused id, skipping any already in the store.
    fn allocate_id(&mut self) -> Option<TaskId> {
        loop {
            let Some(candidate) = self.next_id else {
                warn!("task ids exhausted");
                return None;
            };
            self.next_id = candidate.checked_add(1);
            let id = TaskId(candidate);
            if self.get(id).is_none() {
                return Some(id);
            }
        }
    }

    /// Append a new task. Returns `None` without touching the store when
    /// `title` is blank or no id is left.
    pub fn create(&mut self, title: &str, description: &str) -> Option<TaskId> {
        if title.trim().is_empty() {
            return None;
        }
        let id = self.allocate_id()?;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: Utc::now(),
        });
        info!(%id, "task created");
        Some(id)
    }

    /// Replace title and description. `completed` and `created_at` are left
    /// alone. Returns false if no task has `id`.
    pub fn update(&mut self, id: TaskId, title: &str, description: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = title.to_string();
                task.description = description.to_string();
                info!(%id, "task updated");
                true
            }
            None => false,
        }
    }

    /// Flip `completed`, returning the new value.
    pub fn toggle_completed(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        info!(%id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(%id, "task deleted");
        }
        removed
    }
}
