//! Demo data
//!
//! Fills an empty database with one author and two articles so the blog
//! page has something to show.

use crate::db::repositories::{ArticleRepository, CrudRepository, UserRepository};
use crate::models::{Article, User};
use anyhow::{Context, Result};

const LOREM_CONTENT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Curabitur vitae odio sit amet justo ullamcorper posuere. Sed pulvinar massa id \
leo faucibus, vel dapibus nibh feugiat.";

const IPSUM_CONTENT: &str = "Ipsum dolor sit amet, consectetur adipiscing elit. \
Integer nec odio. Praesent libero. Sed cursus ante dapibus diam. Sed nisi. \
Nulla quis sem at nibh elementum imperdiet.";

/// Insert the demo author and articles.
///
/// Does nothing when at least one user already exists. Returns whether
/// anything was written.
pub async fn seed_demo_data(
    users: &dyn UserRepository,
    articles: &dyn ArticleRepository,
) -> Result<bool> {
    if users.count().await? > 0 {
        tracing::debug!("Users already present, skipping demo data");
        return Ok(false);
    }

    let author = users
        .save(&User::new("johnDoe", "John", "Doe"))
        .await
        .context("Failed to create demo user")?;

    for (title, headline) in [("Lorem", "Lorem"), ("Ipsum", "Ipsum")] {
        let content = if title == "Lorem" { LOREM_CONTENT } else { IPSUM_CONTENT };
        articles
            .save(&Article::new(title, headline, content, author.clone()))
            .await
            .with_context(|| format!("Failed to create demo article '{}'", title))?;
    }

    tracing::info!("Demo data created for user {}", author.login);
    Ok(true)
}
