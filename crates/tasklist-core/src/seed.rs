//! Loading the initial task list from a JSON file.
//!
//! The file is a JSON array of task records in the same layout the store
//! serializes (`id`, `title`, `description`, `completed`, `createdAt`). It is
//! read once at startup and never written back.

use std::path::Path;

use tracing::info;

use crate::error::TasklistError;
use crate::store::TaskStore;
use crate::task::Task;

pub fn parse_seed(json: &str) -> Result<Vec<Task>, TasklistError> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    if let Some(blank) = tasks.iter().find(|t| t.title.trim().is_empty()) {
        return Err(TasklistError::InvalidInput(format!(
            "task {} has an empty title",
            blank.id
        )));
    }
    Ok(tasks)
}

pub fn load_seed_file(path: &Path) -> Result<TaskStore, TasklistError> {
    let content = std::fs::read_to_string(path)?;
    let tasks = parse_seed(&content)?;
    info!(path = %path.display(), count = tasks.len(), "loaded seed tasks");
    Ok(TaskStore::from_tasks(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    #[test]
    fn parses_original_layout() {
        let tasks = parse_seed(
            r#"[
                {"id": 1, "title": "One", "description": "first", "completed": false,
                 "createdAt": "2024-10-01T09:00:00.000Z"},
                {"id": 2, "title": "Two", "completed": true,
                 "createdAt": "2024-10-02T14:30:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "first");
        assert!(tasks[1].completed);
        assert_eq!(tasks[1].id, TaskId(2));
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn blank_title_is_invalid() {
        let err = parse_seed(r#"[{"id": 1, "title": "  ", "createdAt": "2024-10-01T09:00:00Z"}]"#)
            .unwrap_err();
        assert!(matches!(err, TasklistError::InvalidInput(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_seed("{not json").unwrap_err();
        assert!(matches!(err, TasklistError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TasklistError::Io(_)));
    }
}
