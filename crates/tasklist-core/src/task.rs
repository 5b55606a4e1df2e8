use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Empty means the task has no description.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    pub fn status_name(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Active"
        }
    }
}

/// Which tasks the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Tab order.
    pub const ALL: &[FilterMode] = &[FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FilterMode::All => 0,
            FilterMode::Active => 1,
            FilterMode::Completed => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Active => FilterMode::All,
            FilterMode::Completed => FilterMode::Active,
        }
    }

    /// Shown in place of the list when nothing matches.
    pub fn empty_message(&self) -> &'static str {
        match self {
            FilterMode::All => "No tasks found",
            FilterMode::Active => "No active tasks",
            FilterMode::Completed => "No completed tasks",
        }
    }

    pub fn empty_hint(&self) -> Option<&'static str> {
        match self {
            FilterMode::All => Some("Create a new task to get started"),
            FilterMode::Active | FilterMode::Completed => None,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterModeError(String);

impl fmt::Display for ParseFilterModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter '{}' (expected all, active or completed)",
            self.0
        )
    }
}

impl std::error::Error for ParseFilterModeError {}

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// Tasks visible under `mode`, in store order.
pub fn filter_tasks(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_task(id: u64, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            title: format!("Task {id}"),
            description: String::new(),
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn all_passes_everything_through() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        let ids: Vec<u64> = filter_tasks(&tasks, FilterMode::All)
            .iter()
            .map(|t| t.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn active_keeps_incomplete_in_order() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        let ids: Vec<u64> = filter_tasks(&tasks, FilterMode::Active)
            .iter()
            .map(|t| t.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn completed_keeps_completed() {
        let tasks = vec![make_task(1, false), make_task(2, true), make_task(3, false)];
        let visible = filter_tasks(&tasks, FilterMode::Completed);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, TaskId(2));
    }

    #[test]
    fn filter_on_empty_slice() {
        assert!(filter_tasks(&[], FilterMode::Active).is_empty());
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }

    #[test]
    fn cycling_visits_every_mode() {
        let mut mode = FilterMode::All;
        for expected in [FilterMode::Active, FilterMode::Completed, FilterMode::All] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
        for &m in FilterMode::ALL {
            assert_eq!(m.next().prev(), m);
            assert_eq!(FilterMode::ALL[m.index()], m);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Active".parse::<FilterMode>(), Ok(FilterMode::Active));
        assert_eq!(" completed ".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert!("done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn empty_hint_only_for_all() {
        assert!(FilterMode::All.empty_hint().is_some());
        assert!(FilterMode::Active.empty_hint().is_none());
        assert_eq!(FilterMode::Completed.empty_message(), "No completed tasks");
    }

    #[test]
    fn serializes_with_original_field_names() {
        let task = make_task(7, true);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["completed"], true);
        assert_eq!(json["createdAt"], "2024-10-01T09:00:00Z");
    }

    #[test]
    fn description_and_completed_default_when_missing() {
        let task: Task =
            serde_json::from_str(r#"{"id": 3, "title": "x", "createdAt": "2024-10-03T11:00:00Z"}"#)
                .unwrap();
        assert!(!task.completed);
        assert!(!task.has_description());
        assert_eq!(task.status_name(), "Active");
    }
}
