//! Domain model for turnover tasks.
//!
//! The task domain models task creation, assignment, rescheduling, and
//! completion while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskPriority};
pub use task::{NewTask, PersistedTaskData, Task, TaskStatus};
