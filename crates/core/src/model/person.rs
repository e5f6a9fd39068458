use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PersonError {
    #[error("person name cannot be empty")]
    EmptyName,

    #[error("position cannot be empty")]
    EmptyPosition,
}

/// One roster entry: a person and the position they hold.
///
/// Records are immutable once constructed. Duplicate names are allowed;
/// the roster is taken as-is from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    position: String,
}

impl PersonRecord {
    /// Create a validated roster entry.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::EmptyName` or `PersonError::EmptyPosition` if
    /// either field is empty after trimming.
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Result<Self, PersonError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(PersonError::EmptyName);
        }
        let position = position.into();
        let position = position.trim();
        if position.is_empty() {
            return Err(PersonError::EmptyPosition);
        }

        Ok(Self {
            name: name.to_string(),
            position: position.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }
}
