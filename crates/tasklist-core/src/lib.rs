pub mod error;
pub mod sample;
pub mod seed;
pub mod store;
pub mod task;

pub use error::TasklistError;
pub use store::{TaskCounts, TaskStore};
pub use task::{filter_tasks, FilterMode, Task, TaskId};
