//! Database repositories
//!
//! Each repository implements the generic [`CrudRepository`] operations for
//! one entity, plus the lookups that entity needs, against SQLite or MySQL.

pub mod article;
pub mod crud;
pub mod message;
pub mod user;

pub use article::{ArticleRepository, SqlxArticleRepository};
pub use crud::CrudRepository;
pub use message::{MessageRepository, SqlxMessageRepository};
pub use user::{SqlxUserRepository, UserRepository};
