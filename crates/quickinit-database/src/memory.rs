//! In-memory mapper implementation using `dashmap`.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use quickinit_core::result::AppResult;
use quickinit_core::traits::{Entity, Mapper};
use quickinit_core::types::{PageRequest, PageResponse};

/// Process-local mapper with sequential ids starting at 1.
#[derive(Debug)]
pub struct MemoryMapper<E> {
    rows: DashMap<i64, E>,
    next_id: AtomicI64,
}

impl<E: Entity> MemoryMapper<E> {
    /// Create an empty mapper.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Synchronous lookup, for other in-memory mappers joining on this table.
    pub fn get(&self, id: i64) -> Option<E> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    fn sorted(&self) -> Vec<E> {
        let mut rows: Vec<E> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|row| row.id());
        rows
    }
}

impl<E: Entity> Default for MemoryMapper<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Mapper<E> for MemoryMapper<E> {
    async fn create(&self, entity: &E) -> AppResult<E> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut row = entity.clone();
        row.set_id(id);
        let now = Utc::now();
        row.touch(now, now);
        self.rows.insert(id, row.clone());
        debug!(entity = E::NAME, id, "Inserted in-memory row");
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        Ok(self.get(id))
    }

    async fn update(&self, entity: &E) -> AppResult<Option<E>> {
        let Some(mut slot) = self.rows.get_mut(&entity.id()) else {
            return Ok(None);
        };
        let now = Utc::now();
        let mut row = entity.clone();
        row.touch(slot.created_at().unwrap_or(now), now);
        *slot = row.clone();
        Ok(Some(row))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    async fn list_all(&self) -> AppResult<Vec<E>> {
        Ok(self.sorted())
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        let rows = self.sorted();
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickinit_entity::Permission;

    fn permission(code: &str) -> Permission {
        Permission {
            name: code.to_uppercase(),
            code: code.to_string(),
            ..Permission::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_and_stamps() {
        let mapper = MemoryMapper::<Permission>::new();
        let first = mapper.create(&permission("a")).await.unwrap();
        let second = mapper.create(&permission("b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.audit.create_time.is_some());
        assert_eq!(mapper.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let mapper = MemoryMapper::<Permission>::new();
        let mut ghost = permission("ghost");
        ghost.id = 42;
        assert_eq!(mapper.update(&ghost).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let mapper = MemoryMapper::<Permission>::new();
        let mut row = mapper.create(&permission("a")).await.unwrap();
        row.url = Some("/api/a".to_string());
        let updated = mapper.update(&row).await.unwrap().unwrap();
        assert_eq!(updated.url.as_deref(), Some("/api/a"));
        assert!(mapper.delete(row.id).await.unwrap());
        assert!(!mapper.delete(row.id).await.unwrap());
        assert_eq!(mapper.find_by_id(row.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_keeps_create_time() {
        let mapper = MemoryMapper::<Permission>::new();
        let created = mapper.create(&permission("a")).await.unwrap();
        let replacement = Permission {
            id: created.id,
            ..permission("a2")
        };
        let updated = mapper.update(&replacement).await.unwrap().unwrap();
        assert_eq!(updated.audit.create_time, created.audit.create_time);
        assert!(updated.audit.update_time >= created.audit.update_time);
    }

    #[tokio::test]
    async fn test_find_all_pages_in_id_order() {
        let mapper = MemoryMapper::<Permission>::new();
        for code in ["a", "b", "c", "d", "e"] {
            mapper.create(&permission(code)).await.unwrap();
        }
        let page = mapper.find_all(&PageRequest::new(2, 2)).await.unwrap();
        let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
    }
}
