//! User repository
//!
//! - `UserRepository` trait: CRUD plus lookup by login
//! - `SqlxUserRepository`: SQLite and MySQL implementation

use crate::config::DatabaseDriver;
use crate::db::repositories::CrudRepository;
use crate::db::DynDatabasePool;
use crate::models::User;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, Row, SqlitePool};
use std::sync::Arc;

const SELECT_USERS: &str =
    "SELECT id, login, first_name, last_name, description FROM users";

/// User repository trait
#[async_trait]
pub trait UserRepository: CrudRepository<User, i64> {
    /// Get user by login
    async fn find_by_login(&self, login: &str) -> Result<Option<User>>;

    /// Count stored users
    async fn count(&self) -> Result<i64>;
}

/// SQLx-based user repository
pub struct SqlxUserRepository {
    pool: DynDatabasePool,
}

impl SqlxUserRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    /// Create a shared repository for wiring into services and handlers
    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn UserRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CrudRepository<User, i64> for SqlxUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_all_sqlite(self.pool.sqlite()?).await,
            DatabaseDriver::Mysql => find_all_mysql(self.pool.mysql()?).await,
        }
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<User>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_by_id_sqlite(self.pool.sqlite()?, *id).await,
            DatabaseDriver::Mysql => find_by_id_mysql(self.pool.mysql()?, *id).await,
        }
    }

    async fn save(&self, user: &User) -> Result<User> {
        match (self.pool.driver(), user.is_persisted()) {
            (DatabaseDriver::Sqlite, false) => insert_sqlite(self.pool.sqlite()?, user).await,
            (DatabaseDriver::Sqlite, true) => update_sqlite(self.pool.sqlite()?, user).await,
            (DatabaseDriver::Mysql, false) => insert_mysql(self.pool.mysql()?, user).await,
            (DatabaseDriver::Mysql, true) => update_mysql(self.pool.mysql()?, user).await,
        }
    }

    async fn delete(&self, id: &i64) -> Result<()> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => {
                sqlx::query("DELETE FROM users WHERE id = ?")
                    .bind(*id)
                    .execute(self.pool.sqlite()?)
                    .await
                    .context("Failed to delete user")?;
            }
            DatabaseDriver::Mysql => {
                sqlx::query("DELETE FROM users WHERE id = ?")
                    .bind(*id)
                    .execute(self.pool.mysql()?)
                    .await
                    .context("Failed to delete user")?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_by_login_sqlite(self.pool.sqlite()?, login).await,
            DatabaseDriver::Mysql => find_by_login_mysql(self.pool.mysql()?, login).await,
        }
    }

    async fn count(&self) -> Result<i64> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => count_sqlite(self.pool.sqlite()?).await,
            DatabaseDriver::Mysql => count_mysql(self.pool.mysql()?).await,
        }
    }
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn find_all_sqlite(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_USERS))
        .fetch_all(pool)
        .await
        .context("Failed to list users")?;

    Ok(rows.iter().map(row_to_user_sqlite).collect())
}

async fn find_by_id_sqlite(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_USERS))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get user by ID")?;

    Ok(row.as_ref().map(row_to_user_sqlite))
}

async fn find_by_login_sqlite(pool: &SqlitePool, login: &str) -> Result<Option<User>> {
    let row = sqlx::query(&format!("{} WHERE login = ?", SELECT_USERS))
        .bind(login)
        .fetch_optional(pool)
        .await
        .context("Failed to get user by login")?;

    Ok(row.as_ref().map(row_to_user_sqlite))
}

async fn insert_sqlite(pool: &SqlitePool, user: &User) -> Result<User> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (login, first_name, last_name, description)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&user.login)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.description)
    .execute(pool)
    .await
    .context("Failed to create user")?;

    Ok(User {
        id: result.last_insert_rowid(),
        ..user.clone()
    })
}

async fn update_sqlite(pool: &SqlitePool, user: &User) -> Result<User> {
    sqlx::query(
        r#"
        UPDATE users
        SET login = ?, first_name = ?, last_name = ?, description = ?
        WHERE id = ?
        "#,
    )
    .bind(&user.login)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.description)
    .bind(user.id)
    .execute(pool)
    .await
    .context("Failed to update user")?;

    find_by_id_sqlite(pool, user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User {} not found after update", user.id))
}

async fn count_sqlite(pool: &SqlitePool) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count users")?;

    Ok(row.get("count"))
}

fn row_to_user_sqlite(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        login: row.get("login"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        description: row.get("description"),
    }
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn find_all_mysql(pool: &MySqlPool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_USERS))
        .fetch_all(pool)
        .await
        .context("Failed to list users")?;

    Ok(rows.iter().map(row_to_user_mysql).collect())
}

async fn find_by_id_mysql(pool: &MySqlPool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_USERS))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to get user by ID")?;

    Ok(row.as_ref().map(row_to_user_mysql))
}

async fn find_by_login_mysql(pool: &MySqlPool, login: &str) -> Result<Option<User>> {
    let row = sqlx::query(&format!("{} WHERE login = ?", SELECT_USERS))
        .bind(login)
        .fetch_optional(pool)
        .await
        .context("Failed to get user by login")?;

    Ok(row.as_ref().map(row_to_user_mysql))
}

async fn insert_mysql(pool: &MySqlPool, user: &User) -> Result<User> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (login, first_name, last_name, description)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&user.login)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.description)
    .execute(pool)
    .await
    .context("Failed to create user")?;

    Ok(User {
        id: result.last_insert_id() as i64,
        ..user.clone()
    })
}

async fn update_mysql(pool: &MySqlPool, user: &User) -> Result<User> {
    sqlx::query(
        r#"
        UPDATE users
        SET login = ?, first_name = ?, last_name = ?, description = ?
        WHERE id = ?
        "#,
    )
    .bind(&user.login)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.description)
    .bind(user.id)
    .execute(pool)
    .await
    .context("Failed to update user")?;

    find_by_id_mysql(pool, user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User {} not found after update", user.id))
}

async fn count_mysql(pool: &MySqlPool) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
        .fetch_one(pool)
        .await
        .context("Failed to count users")?;

    Ok(row.get("count"))
}

fn row_to_user_mysql(row: &sqlx::mysql::MySqlRow) -> User {
    User {
        id: row.get("id"),
        login: row.get("login"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        description: row.get("description"),
    }
}
