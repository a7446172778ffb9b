//! Generic CRUD capability shared by every repository

use anyhow::Result;
use async_trait::async_trait;

/// Basic persistence operations for an entity `T` identified by `Id`.
///
/// Lookups return `Ok(None)` when nothing matches; errors are reserved for
/// storage failures.
#[async_trait]
pub trait CrudRepository<T, Id>: Send + Sync
where
    T: Send + Sync + 'static,
    Id: Send + Sync + ?Sized,
{
    /// All records in storage order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Record with the given identity, if any
    async fn find_by_id(&self, id: &Id) -> Result<Option<T>>;

    /// Insert or update, returning the stored record
    async fn save(&self, entity: &T) -> Result<T>;

    /// Remove the record if it exists
    async fn delete(&self, id: &Id) -> Result<()>;
}
