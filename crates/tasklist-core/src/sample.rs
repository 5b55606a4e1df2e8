//! Demo tasks the app opens with when no seed file is given.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::task::{Task, TaskId};

/// Wall-clock time in the local zone, stored as UTC.
fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_default()
}

fn sample(id: u64, title: &str, description: &str, completed: bool, created_at: DateTime<Utc>) -> Task {
    Task {
        id: TaskId(id),
        title: title.into(),
        description: description.into(),
        completed,
        created_at,
    }
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        sample(
            1,
            "Review Q4 Financial Reports",
            "Analyze revenue trends, expense ratios, and prepare summary for stakeholder meeting.",
            false,
            at(2024, 10, 1, 9, 0),
        ),
        sample(
            2,
            "Update Product Documentation",
            "Revise user guides and API documentation to reflect recent feature releases.",
            true,
            at(2024, 10, 2, 14, 30),
        ),
        sample(
            3,
            "Client Meeting Preparation",
            "Prepare presentation slides and project timeline for upcoming client review meeting.",
            false,
            at(2024, 10, 3, 11, 0),
        ),
        sample(
            4,
            "Code Review - Authentication Module",
            "Review pull request #247 for the new OAuth implementation and provide feedback.",
            false,
            at(2024, 10, 4, 16, 0),
        ),
        sample(
            5,
            "Team Performance Reviews",
            "Complete quarterly performance evaluations for direct reports.",
            true,
            at(2024, 9, 28, 10, 0),
        ),
    ]
}
