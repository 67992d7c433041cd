//! User entity.

use super::{UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// A person who reviews units, works tasks, or manages properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: String,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: String,
    /// Persisted email address.
    pub email: String,
    /// Persisted role label.
    pub role: String,
}

impl User {
    /// Creates a validated user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] for a blank name or
    /// [`UserDomainError::InvalidEmail`] for a malformed email address.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, UserDomainError> {
        Ok(Self {
            id: UserId::new(),
            name: validated_name(&name.into())?,
            email: validated_email(&email.into())?,
            role: role.into(),
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            role: data.role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role label.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Replaces the display name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] for a blank name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), UserDomainError> {
        self.name = validated_name(&name.into())?;
        Ok(())
    }

    /// Replaces the email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] for a malformed address.
    pub fn change_email(&mut self, email: impl Into<String>) -> Result<(), UserDomainError> {
        self.email = validated_email(&email.into())?;
        Ok(())
    }

    /// Replaces the role label.
    pub fn change_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }
}

fn validated_name(raw: &str) -> Result<String, UserDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UserDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

fn validated_email(raw: &str) -> Result<String, UserDomainError> {
    let trimmed = raw.trim();
    let is_valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
        && !trimmed.chars().any(char::is_whitespace);
    if !is_valid {
        return Err(UserDomainError::InvalidEmail(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
