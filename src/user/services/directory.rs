//! Service layer for user registration and maintenance.

use crate::user::{
    domain::{User, UserDomainError, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserRequest {
    name: String,
    email: String,
    role: String,
}

impl AddUserRequest {
    /// Creates a request with all user fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Partial update applied to an existing user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

impl UserUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets a replacement role label.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Service-level errors for user operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] when validation fails or the repository
    /// rejects persistence.
    #[instrument(skip_all)]
    pub async fn add_user(&self, request: AddUserRequest) -> UserServiceResult<User> {
        let user = User::new(request.name, request.email, request.role)?;
        self.repository.store(&user).await?;
        info!(user_id = %user.id(), "user added");
        Ok(user)
    }

    /// Applies a partial update to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError`] when the user does not exist or an
    /// updated field fails validation.
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> UserServiceResult<User> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserRepositoryError::NotFound(id))?;
        if let Some(name) = update.name {
            user.rename(name)?;
        }
        if let Some(email) = update.email {
            user.change_email(email)?;
        }
        if let Some(role) = update.role {
            user.change_role(role);
        }
        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the user does not exist.
    #[instrument(skip_all, fields(user_id = %id))]
    pub async fn delete_user(&self, id: UserId) -> UserServiceResult<()> {
        self.repository.delete(id).await?;
        info!("user deleted");
        Ok(())
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when persistence lookup fails.
    pub async fn list_users(&self) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.list_all().await?)
    }
}
