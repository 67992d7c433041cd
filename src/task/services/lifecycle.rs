//! Service layer for task creation, assignment, and completion.

use crate::property::domain::UnitId;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPriority},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Request payload for creating a task by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    description: String,
    related_unit_id: UnitId,
    priority: TaskPriority,
    due_date: DateTime<Utc>,
    assignee: Option<UserId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        related_unit_id: UnitId,
        priority: TaskPriority,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            description: description.into(),
            related_unit_id,
            priority,
            due_date,
            assignee: None,
        }
    }

    /// Assigns the task on creation.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assignee = Some(user_id);
        self
    }
}

/// Partial update applied to an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the description is blank or the
    /// repository rejects persistence.
    #[instrument(skip_all, fields(unit_id = %request.related_unit_id))]
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let description = validated_description(&request.description)?;
        let mut task = Task::new(NewTask {
            description,
            priority: request.priority,
            due_date: request.due_date,
            related_unit_id: request.related_unit_id,
        });
        if let Some(user_id) = request.assignee {
            task.assign_to(user_id);
        }
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task does not exist or the new
    /// description is blank.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        if let Some(description) = update.description {
            task.describe(validated_description(&description)?);
        }
        if let Some(priority) = update.priority {
            task.reprioritize(priority);
        }
        if let Some(due_date) = update.due_date {
            task.reschedule(due_date);
        }
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Lists all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn retrieve_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Lists the tasks related to a unit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn tasks_for_unit(&self, unit_id: UnitId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_unit(unit_id).await?)
    }

    /// Retrieves a single task.
    ///
    /// Returns `Ok(None)` when no task has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        info!("task deleted");
        Ok(())
    }

    /// Marks a task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn complete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        task.complete();
        self.repository.update(&task).await?;
        info!("task completed");
        Ok(task)
    }

    /// Assigns a task to a user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    #[instrument(skip_all, fields(task_id = %id, user_id = %user_id))]
    pub async fn assign_task(&self, id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        task.assign_to(user_id);
        self.repository.update(&task).await?;
        info!("task assigned");
        Ok(task)
    }

    async fn require(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}

fn validated_description(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}
