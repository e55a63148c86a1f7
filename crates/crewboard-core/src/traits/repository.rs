//! Generic repository trait for document-style persistence.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository through the type
/// parameters. `update` replaces the whole stored document in one write,
/// so callers never observe a half-applied update.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every stored entity.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Insert a new entity and return it as stored.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Replace an existing entity and return the stored version.
    ///
    /// Returns a not-found error when no entity has the same id.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: &Id) -> AppResult<bool>;

    /// Count stored entities.
    async fn count(&self) -> AppResult<u64>;
}
