//! Generic persistence trait the service layer is written against.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::entity::Entity;
use crate::types::pagination::{PageRequest, PageResponse};

/// Generic CRUD mapper keyed by an `i64` primary key.
///
/// Implementations report store failures as [`AppError`](crate::AppError)
/// and must not translate "no such row" into an error: lookups return
/// `None`, deletes return `false`.
#[async_trait]
pub trait Mapper<E>: Send + Sync + 'static
where
    E: Entity,
{
    /// Insert a record and return it with its assigned id.
    async fn create(&self, entity: &E) -> AppResult<E>;

    /// Find a record by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>>;

    /// Overwrite the record with `entity.id()`. Returns `None` if absent.
    async fn update(&self, entity: &E) -> AppResult<Option<E>>;

    /// Delete a record by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// All records ordered by id.
    async fn list_all(&self) -> AppResult<Vec<E>>;

    /// One page of records ordered by id.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<E>>;

    /// Count all records.
    async fn count(&self) -> AppResult<u64>;
}
