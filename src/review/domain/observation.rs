//! Observations recorded during a unit review.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defect-impact classification of an observation, ordered from least to
/// most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Cosmetic or negligible.
    #[default]
    #[serde(alias = "low")]
    Low,
    /// Worth noting, not urgent.
    #[serde(alias = "medium")]
    Medium,
    /// Needs repair before the unit is let.
    #[serde(alias = "high")]
    High,
    /// Needs repair immediately.
    #[serde(alias = "critical")]
    Critical,
}

impl Severity {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseSeverityError(value.to_owned())),
        }
    }
}

/// Error returned while parsing severities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

/// A single finding recorded against an area of the unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    area: String,
    issue_type: String,
    description: String,
    severity: Severity,
}

impl Observation {
    /// Creates an observation.
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        issue_type: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            area: area.into(),
            issue_type: issue_type.into(),
            description: description.into(),
            severity,
        }
    }

    /// Returns the area of the unit, such as "Kitchen".
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the kind of issue, such as "Leak".
    #[must_use]
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}
