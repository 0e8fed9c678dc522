//! Generic CRUD service forwarding to a mapper.

use std::fmt;
use std::sync::Arc;

use quickinit_core::result::AppResult;
use quickinit_core::traits::{Entity, Loggable, Mapper};
use quickinit_core::types::{PageRequest, PageResponse};

use crate::aspect::{LogAspect, LogRecord};

/// Create / read / update / delete / list over one entity type.
///
/// Every operation is a direct call into the mapper, wrapped by the
/// service's [`LogAspect`]. Nothing is transformed on the way in or out,
/// and mapper errors are returned as they are.
pub struct CrudService<E: Entity> {
    mapper: Arc<dyn Mapper<E>>,
    aspect: LogAspect,
}

impl<E: Entity> CrudService<E> {
    /// Creates a new service over `mapper`.
    pub fn new(mapper: Arc<dyn Mapper<E>>) -> Self {
        Self {
            mapper,
            aspect: LogAspect::new(E::NAME),
        }
    }

    /// Inserts `entity` and returns the stored record.
    pub async fn create(&self, entity: &E) -> AppResult<E> {
        self.aspect
            .around(
                "create",
                &[entity as &dyn Loggable],
                Some(LogRecord::new("create", E::NAME)),
                self.mapper.create(entity),
            )
            .await
    }

    /// Looks up a record by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<E>> {
        self.aspect
            .around(
                "get_by_id",
                &[&id as &dyn Loggable],
                None,
                self.mapper.find_by_id(id),
            )
            .await
    }

    /// Overwrites the record with `entity.id()`. `None` if it does not exist.
    pub async fn update(&self, entity: &E) -> AppResult<Option<E>> {
        self.aspect
            .around(
                "update",
                &[entity as &dyn Loggable],
                Some(LogRecord::new("update", E::NAME)),
                self.mapper.update(entity),
            )
            .await
    }

    /// Deletes a record by id. `false` if it did not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        self.aspect
            .around(
                "delete",
                &[&id as &dyn Loggable],
                Some(LogRecord::new("delete", E::NAME)),
                self.mapper.delete(id),
            )
            .await
    }

    /// All records.
    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.aspect
            .around("list", &[], None, self.mapper.list_all())
            .await
    }

    /// One page of records.
    pub async fn page(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        self.aspect
            .around(
                "page",
                &[page as &dyn Loggable],
                None,
                self.mapper.find_all(page),
            )
            .await
    }

    /// Number of records.
    pub async fn count(&self) -> AppResult<u64> {
        self.aspect
            .around("count", &[], None, self.mapper.count())
            .await
    }
}

impl<E: Entity> fmt::Debug for CrudService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrudService")
            .field("entity", &E::NAME)
            .finish_non_exhaustive()
    }
}
