//! PostgreSQL permission mapper.

use async_trait::async_trait;
use sqlx::PgPool;

use quickinit_core::result::AppResult;
use quickinit_core::traits::Mapper;
use quickinit_core::types::{PageRequest, PageResponse};
use quickinit_entity::Permission;

use super::{count_rows, db_error, limit_offset};

/// Mapper for the `permission` table.
#[derive(Debug, Clone)]
pub struct PermissionMapper {
    pool: PgPool,
}

impl PermissionMapper {
    /// Create a new permission mapper.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Mapper<Permission> for PermissionMapper {
    async fn create(&self, entity: &Permission) -> AppResult<Permission> {
        sqlx::query_as::<_, Permission>(
            "INSERT INTO permission (name, code, url, method, parent_id, sort, create_time, update_time) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW()) RETURNING *",
        )
        .bind(&entity.name)
        .bind(&entity.code)
        .bind(&entity.url)
        .bind(&entity.method)
        .bind(entity.parent_id)
        .bind(entity.sort)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create permission"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>("SELECT * FROM permission WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find permission"))
    }

    async fn update(&self, entity: &Permission) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>(
            "UPDATE permission SET name = $2, code = $3, url = $4, method = $5, \
             parent_id = $6, sort = $7, update_time = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.code)
        .bind(&entity.url)
        .bind(&entity.method)
        .bind(entity.parent_id)
        .bind(entity.sort)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update permission"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM permission WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete permission"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<Permission>> {
        sqlx::query_as::<_, Permission>("SELECT * FROM permission ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list permissions"))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Permission>> {
        let total = self.count().await?;
        let (limit, offset) = limit_offset(page);
        let items = sqlx::query_as::<_, Permission>(
            "SELECT * FROM permission ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to page permissions"))?;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        count_rows(&self.pool, "permission").await
    }
}
