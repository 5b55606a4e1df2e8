//! Behavior of the task store as seen through its public API.

use chrono::{TimeZone, Utc};
use tasklist_core::seed::load_seed_file;
use tasklist_core::{filter_tasks, FilterMode, Task, TaskId, TaskStore};

fn make_task(id: u64, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        description: format!("about {title}"),
        completed,
        created_at: Utc.with_ymd_and_hms(2024, 10, id as u32, 9, 0, 0).unwrap(),
    }
}

fn three_tasks() -> TaskStore {
    TaskStore::from_tasks(vec![
        make_task(1, "Write report", false),
        make_task(2, "Ship release", true),
        make_task(3, "Plan sprint", false),
    ])
}

#[test]
fn blank_title_leaves_store_unchanged() {
    let mut store = three_tasks();
    let before = store.tasks().to_vec();
    assert_eq!(store.create("", "ignored"), None);
    assert_eq!(store.create("   ", "ignored"), None);
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn create_adds_one_incomplete_task() {
    let mut store = three_tasks();
    let before = Utc::now();
    let id = store.create("Buy milk", "").unwrap();
    let after = Utc::now();

    assert_eq!(store.len(), 4);
    let task = store.get(id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
    assert!(task.created_at >= before);
    assert!(task.created_at <= after);
    // appended at the end
    assert_eq!(store.tasks().last().unwrap().id, id);
}

#[test]
fn toggling_twice_restores_completed() {
    let mut store = three_tasks();
    for id in [TaskId(1), TaskId(2)] {
        let original = store.get(id).unwrap().completed;
        assert_eq!(store.toggle_completed(id), Some(!original));
        assert_eq!(store.toggle_completed(id), Some(original));
        assert_eq!(store.get(id).unwrap().completed, original);
    }
}

#[test]
fn active_filter_returns_incomplete_in_order() {
    let store = three_tasks();
    let active = filter_tasks(store.tasks(), FilterMode::Active);
    let titles: Vec<&str> = active.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Write report", "Plan sprint"]);
}

#[test]
fn editing_changes_only_that_title() {
    let mut store = three_tasks();
    let original = store.tasks().to_vec();

    assert!(store.update(TaskId(2), "New Title", "about Ship release"));

    let edited = store.get(TaskId(2)).unwrap();
    assert_eq!(edited.title, "New Title");
    assert_eq!(edited.id, TaskId(2));
    assert_eq!(edited.created_at, original[1].created_at);
    assert_eq!(edited.completed, original[1].completed);
    assert_eq!(store.get(TaskId(1)).unwrap(), &original[0]);
    assert_eq!(store.get(TaskId(3)).unwrap(), &original[2]);
}

#[test]
fn deleting_unknown_id_is_noop() {
    let mut store = three_tasks();
    let before = store.tasks().to_vec();
    assert!(!store.delete(TaskId(42)));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn delete_is_idempotent() {
    let mut store = three_tasks();
    assert!(store.delete(TaskId(2)));
    assert!(!store.delete(TaskId(2)));
    assert_eq!(store.len(), 2);
    assert!(store.get(TaskId(2)).is_none());
}

#[test]
fn update_is_idempotent() {
    let mut store = three_tasks();
    store.update(TaskId(1), "Same", "Same desc");
    let once = store.tasks().to_vec();
    store.update(TaskId(1), "Same", "Same desc");
    assert_eq!(store.tasks(), once.as_slice());
}

#[test]
fn seed_file_round_trips_store_contents() {
    let store = three_tasks();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, serde_json::to_string_pretty(store.tasks()).unwrap()).unwrap();

    let loaded = load_seed_file(&path).unwrap();
    assert_eq!(loaded.tasks(), store.tasks());
}

#[test]
fn seed_with_max_id_stops_handing_out_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let json = format!(
        r#"[{{"id": 1, "title": "low", "createdAt": "2024-10-01T09:00:00Z"}},
            {{"id": {}, "title": "high", "createdAt": "2024-10-02T09:00:00Z"}}]"#,
        u64::MAX
    );
    std::fs::write(&path, json).unwrap();

    let mut store = load_seed_file(&path).unwrap();
    assert_eq!(store.create("first", ""), None);
    assert_eq!(store.create("second", ""), None);

    let mut ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids, vec![TaskId(1), TaskId(u64::MAX)]);
}
