//! Task aggregate root and status type.

use super::{ParseTaskStatusError, TaskId, TaskPriority};
use crate::property::domain::UnitId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been created and awaits work.
    Pending,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Fields required to open a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Human-readable description of the work.
    pub description: String,
    /// Urgency of the work.
    pub priority: TaskPriority,
    /// Date by which the work is due.
    pub due_date: DateTime<Utc>,
    /// Unit the work relates to.
    pub related_unit_id: UnitId,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    assigned_to: Option<UserId>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: DateTime<Utc>,
    related_unit_id: UnitId,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: String,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted related unit.
    pub related_unit_id: UnitId,
}

impl Task {
    /// Opens a new pending, unassigned task with a fresh identifier.
    #[must_use]
    pub fn new(fields: NewTask) -> Self {
        Self {
            id: TaskId::new(),
            description: fields.description,
            assigned_to: None,
            priority: fields.priority,
            status: TaskStatus::Pending,
            due_date: fields.due_date,
            related_unit_id: fields.related_unit_id,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            assigned_to: data.assigned_to,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            related_unit_id: data.related_unit_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the unit this task relates to.
    #[must_use]
    pub const fn related_unit_id(&self) -> UnitId {
        self.related_unit_id
    }

    /// Assigns the task to a user, replacing any earlier assignee.
    pub const fn assign_to(&mut self, user_id: UserId) {
        self.assigned_to = Some(user_id);
    }

    /// Marks the task as completed.
    pub const fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Replaces the description.
    pub fn describe(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the priority.
    pub const fn reprioritize(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Moves the due date.
    pub const fn reschedule(&mut self, due_date: DateTime<Utc>) {
        self.due_date = due_date;
    }
}
