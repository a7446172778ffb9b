//! User model

use serde::{Deserialize, Serialize};

/// A blog author.
///
/// `id` is assigned by the database; `0` means "not persisted yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    #[serde(default)]
    pub id: i64,
    /// Login name (unique)
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,
}

impl User {
    /// Create a new, unsaved user
    pub fn new(
        login: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            login: login.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the user has been stored
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
