//! PostgreSQL menu mapper.

use async_trait::async_trait;
use sqlx::PgPool;

use quickinit_core::result::AppResult;
use quickinit_core::traits::Mapper;
use quickinit_core::types::{PageRequest, PageResponse};
use quickinit_entity::Menu;

use super::{count_rows, db_error, limit_offset};

/// Mapper for the `menu` table.
#[derive(Debug, Clone)]
pub struct MenuMapper {
    pool: PgPool,
}

impl MenuMapper {
    /// Create a new menu mapper.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Mapper<Menu> for MenuMapper {
    async fn create(&self, entity: &Menu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            "INSERT INTO menu (name, path, component, icon, parent_id, sort, hidden, create_time, update_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW()) RETURNING *",
        )
        .bind(&entity.name)
        .bind(&entity.path)
        .bind(&entity.component)
        .bind(&entity.icon)
        .bind(entity.parent_id)
        .bind(entity.sort)
        .bind(entity.hidden)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create menu"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menu WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find menu"))
    }

    async fn update(&self, entity: &Menu) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>(
            "UPDATE menu SET name = $2, path = $3, component = $4, icon = $5, parent_id = $6, \
             sort = $7, hidden = $8, update_time = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.path)
        .bind(&entity.component)
        .bind(&entity.icon)
        .bind(entity.parent_id)
        .bind(entity.sort)
        .bind(entity.hidden)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update menu"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menu WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete menu"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menu ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list menus"))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Menu>> {
        let total = self.count().await?;
        let (limit, offset) = limit_offset(page);
        let items =
            sqlx::query_as::<_, Menu>("SELECT * FROM menu ORDER BY id ASC LIMIT $1 OFFSET $2")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("Failed to page menus"))?;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count(&self) -> AppResult<u64> {
        count_rows(&self.pool, "menu").await
    }
}
