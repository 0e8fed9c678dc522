//! PostgreSQL role mapper.

use async_trait::async_trait;
use sqlx::PgPool;

use quickinit_core::result::AppResult;
use quickinit_core::traits::Mapper;
use quickinit_core::types::{PageRequest, PageResponse};
use quickinit_entity::Role;

use super::{count_rows, db_error, limit_offset};

/// Mapper for the `role` table.
#[derive(Debug, Clone)]
pub struct RoleMapper {
    pool: PgPool,
}

impl RoleMapper {
    /// Create a new role mapper.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Mapper<Role> for RoleMapper {
    async fn create(&self, entity: &Role) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO role (name, code, description, enabled, create_time, update_time) \
             VALUES ($1, $2, $3, $4, NOW(), NOW()) RETURNING *",
        )
        .bind(&entity.name)
        .bind(&entity.code)
        .bind(&entity.description)
        .bind(entity.enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create role"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM role WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find role"))
    }

    async fn update(&self, entity: &Role) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>(
            "UPDATE role SET name = $2, code = $3, description = $4, enabled = $5, \
             update_time = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.code)
        .bind(&entity.description)
        .bind(entity.enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update role"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM role WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete role"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM role ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list roles"))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Role>> {
        let total = self.count().await?;
        let (limit, offset) = limit_offset(page);
        let items =
            sqlx::query_as::<_, Role>("SELECT * FROM role ORDER BY id ASC LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("Failed to page roles"))?;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        count_rows(&self.pool, "role").await
    }
}
