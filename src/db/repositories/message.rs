//! Message repository
//!
//! Messages carry a client-chosen string id, so `save` is an upsert keyed on it.

use crate::config::DatabaseDriver;
use crate::db::repositories::CrudRepository;
use crate::db::DynDatabasePool;
use crate::models::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, Row, SqlitePool};
use std::sync::Arc;

/// Message repository trait
#[async_trait]
pub trait MessageRepository: CrudRepository<Message, str> {}

/// SQLx-based message repository
pub struct SqlxMessageRepository {
    pool: DynDatabasePool,
}

impl SqlxMessageRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn MessageRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CrudRepository<Message, str> for SqlxMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_all_sqlite(self.pool.sqlite()?).await,
            DatabaseDriver::Mysql => find_all_mysql(self.pool.mysql()?).await,
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Message>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_by_id_sqlite(self.pool.sqlite()?, id).await,
            DatabaseDriver::Mysql => find_by_id_mysql(self.pool.mysql()?, id).await,
        }
    }

    async fn save(&self, message: &Message) -> Result<Message> {
        let id = message
            .id
            .as_deref()
            .context("Cannot save a message without an id")?;

        match self.pool.driver() {
            DatabaseDriver::Sqlite => upsert_sqlite(self.pool.sqlite()?, id, &message.text).await?,
            DatabaseDriver::Mysql => upsert_mysql(self.pool.mysql()?, id, &message.text).await?,
        }

        Ok(message.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                sqlx::query("DELETE FROM messages WHERE id = ?")
                    .bind(id)
                    .execute(self.pool.sqlite()?)
                    .await
                    .context("Failed to delete message")?;
            }
            DatabaseDriver::Mysql => {
                sqlx::query("DELETE FROM messages WHERE id = ?")
                    .bind(id)
                    .execute(self.pool.mysql()?)
                    .await
                    .context("Failed to delete message")?;
            }
        }
        Ok(())
    }
}

impl MessageRepository for SqlxMessageRepository {}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn find_all_sqlite(pool: &SqlitePool) -> Result<Vec<Message>> {
    let rows = sqlx::query("SELECT id, text FROM messages ORDER BY id")
        .fetch_all(pool)
        .await
        .context("Failed to list messages")?;

    Ok(rows.iter().map(row_to_message_sqlite).collect())
}

async fn find_by_id_sqlite(pool: &SqlitePool, id: &str) -> Result<Option<Message>> {
    let row = sqlx::query("SELECT id, text FROM messages WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get message by ID")?;

    Ok(row.as_ref().map(row_to_message_sqlite))
}

async fn upsert_sqlite(pool: &SqlitePool, id: &str, text: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO messages (id, text) VALUES (?, ?)
        ON CONFLICT(id) DO UPDATE SET text = excluded.text
        "#,
    )
    .bind(id)
    .bind(text)
    .execute(pool)
    .await
    .context("Failed to save message")?;

    Ok(())
}

fn row_to_message_sqlite(row: &sqlx::sqlite::SqliteRow) -> Message {
    Message {
        id: Some(row.get("id")),
        text: row.get("text"),
    }
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn find_all_mysql(pool: &MySqlPool) -> Result<Vec<Message>> {
    let rows = sqlx::query("SELECT id, text FROM messages ORDER BY id")
        .fetch_all(pool)
        .await
        .context("Failed to list messages")?;

    Ok(rows.iter().map(row_to_message_mysql).collect())
}

async fn find_by_id_mysql(pool: &MySqlPool, id: &str) -> Result<Option<Message>> {
    let row = sqlx::query("SELECT id, text FROM messages WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get message by ID")?;

    Ok(row.as_ref().map(row_to_message_mysql))
}

async fn upsert_mysql(pool: &MySqlPool, id: &str, text: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO messages (id, text) VALUES (?, ?)
        ON DUPLICATE KEY UPDATE text = VALUES(text)
        "#,
    )
    .bind(id)
    .bind(text)
    .execute(pool)
    .await
    .context("Failed to save message")?;

    Ok(())
}

fn row_to_message_mysql(row: &sqlx::mysql::MySqlRow) -> Message {
    Message {
        id: Some(row.get("id")),
        text: row.get("text"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, migrations};

    async fn setup_test_repo() -> SqlxMessageRepository {
        let pool = create_test_pool()
            .await
            .expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        SqlxMessageRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = setup_test_repo().await;

        repo.save(&Message::new("1", "Hello!"))
            .await
            .expect("Failed to save message");

        let found = repo.find_by_id("1").await.expect("Failed to get message");
        assert_eq!(found, Some(Message::new("1", "Hello!")));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = setup_test_repo().await;

        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_existing_id_replaces_text() {
        let repo = setup_test_repo().await;

        repo.save(&Message::new("1", "Hello!")).await.unwrap();
        repo.save(&Message::new("1", "Bonjour!")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![Message::new("1", "Bonjour!")]);
    }

    #[tokio::test]
    async fn test_save_without_id_fails() {
        let repo = setup_test_repo().await;

        let result = repo.save(&Message::unsaved("anonymous")).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_message() {
        let repo = setup_test_repo().await;
        repo.save(&Message::new("bye", "Goodbye")).await.unwrap();

        repo.delete("bye").await.expect("Failed to delete message");
        repo.delete("bye").await.expect("Deleting a missing message is fine");

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
