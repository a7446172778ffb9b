//! Article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;
use crate::services::slug::to_slug;

/// A blog article.
///
/// The author is always loaded together with the article. The slug is
/// derived from the title when the article is constructed and is not
/// recomputed if the title changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, `0` until persisted
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub headline: String,
    pub content: String,
    /// Owning author (many articles per user)
    pub author: User,
    /// URL-friendly identifier derived from the title
    pub slug: String,
    /// Creation timestamp
    pub added_at: DateTime<Utc>,
}

impl Article {
    /// Create a new, unsaved article dated now
    pub fn new(
        title: impl Into<String>,
        headline: impl Into<String>,
        content: impl Into<String>,
        author: User,
    ) -> Self {
        let title = title.into();
        Self {
            id: 0,
            slug: to_slug(&title),
            title,
            headline: headline.into(),
            content: content.into(),
            author,
            added_at: Utc::now(),
        }
    }

    /// Override the creation timestamp
    pub fn with_added_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_at = added_at;
        self
    }

    /// Whether the article has been stored
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
