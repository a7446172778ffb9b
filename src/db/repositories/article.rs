//! Article repository
//!
//! - `ArticleRepository` trait: CRUD plus slug lookup and newest-first listing
//! - `SqlxArticleRepository`: SQLite and MySQL implementation
//!
//! Every read joins the author, so an `Article` never leaves this module
//! without its `User`.

use crate::config::DatabaseDriver;
use crate::db::repositories::CrudRepository;
use crate::db::DynDatabasePool;
use crate::models::{Article, User};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, Row, SqlitePool};
use std::sync::Arc;

const SELECT_ARTICLES: &str = r#"
    SELECT a.id, a.title, a.headline, a.content, a.slug, a.added_at,
           u.id AS author_id, u.login AS author_login,
           u.first_name AS author_first_name, u.last_name AS author_last_name,
           u.description AS author_description
    FROM articles a
    INNER JOIN users u ON u.id = a.author_id
"#;

/// Article repository trait
#[async_trait]
pub trait ArticleRepository: CrudRepository<Article, i64> {
    /// Get article by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>>;

    /// All articles, newest first
    async fn find_all_ordered_by_added_at_desc(&self) -> Result<Vec<Article>>;
}

/// SQLx-based article repository
pub struct SqlxArticleRepository {
    pool: DynDatabasePool,
}

impl SqlxArticleRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn ArticleRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CrudRepository<Article, i64> for SqlxArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>> {
        let sql = format!("{} ORDER BY a.id", SELECT_ARTICLES);
        match self.pool.driver() {
            DatabaseDriver::Sqlite => list_sqlite(self.pool.sqlite()?, &sql).await,
            DatabaseDriver::Mysql => list_mysql(self.pool.mysql()?, &sql).await,
        }
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<Article>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_by_id_sqlite(self.pool.sqlite()?, *id).await,
            DatabaseDriver::Mysql => find_by_id_mysql(self.pool.mysql()?, *id).await,
        }
    }

    async fn save(&self, article: &Article) -> Result<Article> {
        if !article.author.is_persisted() {
            bail!(
                "Cannot save article '{}': author '{}' has not been saved",
                article.slug,
                article.author.login
            );
        }

        match (self.pool.driver(), article.is_persisted()) {
            (DatabaseDriver::Sqlite, false) => insert_sqlite(self.pool.sqlite()?, article).await,
            (DatabaseDriver::Sqlite, true) => update_sqlite(self.pool.sqlite()?, article).await,
            (DatabaseDriver::Mysql, false) => insert_mysql(self.pool.mysql()?, article).await,
            (DatabaseDriver::Mysql, true) => update_mysql(self.pool.mysql()?, article).await,
        }
    }

    async fn delete(&self, id: &i64) -> Result<()> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                sqlx::query("DELETE FROM articles WHERE id = ?")
                    .bind(*id)
                    .execute(self.pool.sqlite()?)
                    .await
                    .context("Failed to delete article")?;
            }
            DatabaseDriver::Mysql => {
                sqlx::query("DELETE FROM articles WHERE id = ?")
                    .bind(*id)
                    .execute(self.pool.mysql()?)
                    .await
                    .context("Failed to delete article")?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for SqlxArticleRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_by_slug_sqlite(self.pool.sqlite()?, slug).await,
            DatabaseDriver::Mysql => find_by_slug_mysql(self.pool.mysql()?, slug).await,
        }
    }

    async fn find_all_ordered_by_added_at_desc(&self) -> Result<Vec<Article>> {
        let sql = format!("{} ORDER BY a.added_at DESC, a.id DESC", SELECT_ARTICLES);
        match self.pool.driver() {
            DatabaseDriver::Sqlite => list_sqlite(self.pool.sqlite()?, &sql).await,
            DatabaseDriver::Mysql => list_mysql(self.pool.mysql()?, &sql).await,
        }
    }
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn list_sqlite(pool: &SqlitePool, sql: &str) -> Result<Vec<Article>> {
    let rows = sqlx::query(sql)
        .fetch_all(pool)
        .await
        .context("Failed to list articles")?;

    Ok(rows.iter().map(row_to_article_sqlite).collect())
}

async fn find_by_id_sqlite(pool: &SqlitePool, id: i64) -> Result<Option<Article>> {
    let row = sqlx::query(&format!("{} WHERE a.id = ?", SELECT_ARTICLES))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get article by ID")?;

    Ok(row.as_ref().map(row_to_article_sqlite))
}

async fn find_by_slug_sqlite(pool: &SqlitePool, slug: &str) -> Result<Option<Article>> {
    let row = sqlx::query(&format!("{} WHERE a.slug = ?", SELECT_ARTICLES))
        .bind(slug)
        .fetch_optional(pool)
        .await
        .context("Failed to get article by slug")?;

    Ok(row.as_ref().map(row_to_article_sqlite))
}

async fn insert_sqlite(pool: &SqlitePool, article: &Article) -> Result<Article> {
    let result = sqlx::query(
        r#"
        INSERT INTO articles (title, headline, content, author_id, slug, added_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&article.title)
    .bind(&article.headline)
    .bind(&article.content)
    .bind(article.author.id)
    .bind(&article.slug)
    .bind(article.added_at)
    .execute(pool)
    .await
    .context("Failed to create article")?;

    Ok(Article {
        id: result.last_insert_rowid(),
        ..article.clone()
    })
}

async fn update_sqlite(pool: &SqlitePool, article: &Article) -> Result<Article> {
    sqlx::query(
        r#"
        UPDATE articles
        SET title = ?, headline = ?, content = ?, author_id = ?, slug = ?, added_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&article.title)
    .bind(&article.headline)
    .bind(&article.content)
    .bind(article.author.id)
    .bind(&article.slug)
    .bind(article.added_at)
    .bind(article.id)
    .execute(pool)
    .await
    .context("Failed to update article")?;

    find_by_id_sqlite(pool, article.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Article {} not found after update", article.id))
}

fn row_to_article_sqlite(row: &sqlx::sqlite::SqliteRow) -> Article {
    Article {
        id: row.get("id"),
        title: row.get("title"),
        headline: row.get("headline"),
        content: row.get("content"),
        author: User {
            id: row.get("author_id"),
            login: row.get("author_login"),
            first_name: row.get("author_first_name"),
            last_name: row.get("author_last_name"),
            description: row.get("author_description"),
        },
        slug: row.get("slug"),
        added_at: row.get("added_at"),
    }
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn list_mysql(pool: &MySqlPool, sql: &str) -> Result<Vec<Article>> {
    let rows = sqlx::query(sql)
        .fetch_all(pool)
        .await
        .context("Failed to list articles")?;

    Ok(rows.iter().map(row_to_article_mysql).collect())
}

async fn find_by_id_mysql(pool: &MySqlPool, id: i64) -> Result<Option<Article>> {
    let row = sqlx::query(&format!("{} WHERE a.id = ?", SELECT_ARTICLES))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get article by ID")?;

    Ok(row.as_ref().map(row_to_article_mysql))
}

async fn find_by_slug_mysql(pool: &MySqlPool, slug: &str) -> Result<Option<Article>> {
    let row = sqlx::query(&format!("{} WHERE a.slug = ?", SELECT_ARTICLES))
        .bind(slug)
        .fetch_optional(pool)
        .await
        .context("Failed to get article by slug")?;

    Ok(row.as_ref().map(row_to_article_mysql))
}

async fn insert_mysql(pool: &MySqlPool, article: &Article) -> Result<Article> {
    let result = sqlx::query(
        r#"
        INSERT INTO articles (title, headline, content, author_id, slug, added_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&article.title)
    .bind(&article.headline)
    .bind(&article.content)
    .bind(article.author.id)
    .bind(&article.slug)
    .bind(article.added_at)
    .execute(pool)
    .await
    .context("Failed to create article")?;

    Ok(Article {
        id: result.last_insert_id() as i64,
        ..article.clone()
    })
}

async fn update_mysql(pool: &MySqlPool, article: &Article) -> Result<Article> {
    sqlx::query(
        r#"
        UPDATE articles
        SET title = ?, headline = ?, content = ?, author_id = ?, slug = ?, added_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&article.title)
    .bind(&article.headline)
    .bind(&article.content)
    .bind(article.author.id)
    .bind(&article.slug)
    .bind(article.added_at)
    .bind(article.id)
    .execute(pool)
    .await
    .context("Failed to update article")?;

    find_by_id_mysql(pool, article.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Article {} not found after update", article.id))
}

fn row_to_article_mysql(row: &sqlx::mysql::MySqlRow) -> Article {
    Article {
        id: row.get("id"),
        title: row.get("title"),
        headline: row.get("headline"),
        content: row.get("content"),
        author: User {
            id: row.get("author_id"),
            login: row.get("author_login"),
            first_name: row.get("author_first_name"),
            last_name: row.get("author_last_name"),
            description: row.get("author_description"),
        },
        slug: row.get("slug"),
        added_at: row.get("added_at"),
    }
}
