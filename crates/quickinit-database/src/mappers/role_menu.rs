//! Role-to-menu grants.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use sqlx::PgPool;

use quickinit_core::error::AppError;
use quickinit_core::result::AppResult;
use quickinit_entity::Menu;

use super::db_error;
use crate::memory::MemoryMapper;

/// Access to the `role_menu` join table.
#[async_trait]
pub trait RoleMenuMapper: Send + Sync + 'static {
    /// Menus granted to a role, ordered by `sort` then id.
    async fn find_menus_by_role(&self, role_id: i64) -> AppResult<Vec<Menu>>;

    /// Grant a menu to a role. Returns `false` if the grant already existed.
    async fn grant(&self, role_id: i64, menu_id: i64) -> AppResult<bool>;
}

/// PostgreSQL implementation.
#[derive(Debug, Clone)]
pub struct PgRoleMenuMapper {
    pool: PgPool,
}

impl PgRoleMenuMapper {
    /// Create a new role-menu mapper.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleMenuMapper for PgRoleMenuMapper {
    async fn find_menus_by_role(&self, role_id: i64) -> AppResult<Vec<Menu>> {
        sqlx::query_as::<_, Menu>(
            "SELECT m.* FROM menu m \
             INNER JOIN role_menu rm ON rm.menu_id = m.id \
             WHERE rm.role_id = $1 \
             ORDER BY m.sort ASC NULLS LAST, m.id ASC",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to find menus for role"))
    }

    async fn grant(&self, role_id: i64, menu_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO role_menu (role_id, menu_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(role_id)
        .bind(menu_id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to grant menu"))?;
        Ok(result.rows_affected() > 0)
    }
}

/// In-memory implementation joining against a [`MemoryMapper<Menu>`].
#[derive(Debug)]
pub struct MemoryRoleMenuMapper {
    menus: Arc<MemoryMapper<Menu>>,
    grants: DashMap<i64, BTreeSet<i64>>,
}

impl MemoryRoleMenuMapper {
    /// Create a grant table over the given menu store.
    pub fn new(menus: Arc<MemoryMapper<Menu>>) -> Self {
        Self {
            menus,
            grants: DashMap::new(),
        }
    }
}

#[async_trait]
impl RoleMenuMapper for MemoryRoleMenuMapper {
    async fn find_menus_by_role(&self, role_id: i64) -> AppResult<Vec<Menu>> {
        let Some(menu_ids) = self.grants.get(&role_id) else {
            return Ok(Vec::new());
        };
        let mut menus: Vec<Menu> = menu_ids
            .iter()
            .filter_map(|id| self.menus.get(*id))
            .collect();
        menus.sort_by_key(|m| (m.sort.is_none(), m.sort, m.id));
        Ok(menus)
    }

    async fn grant(&self, role_id: i64, menu_id: i64) -> AppResult<bool> {
        if self.menus.get(menu_id).is_none() {
            return Err(AppError::database(format!(
                "role_menu references missing menu {menu_id}"
            )));
        }
        Ok(self.grants.entry(role_id).or_default().insert(menu_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickinit_core::error::ErrorKind;
    use quickinit_core::traits::Mapper;

    fn menu(name: &str, sort: Option<i32>) -> Menu {
        Menu {
            name: name.to_string(),
            sort,
            ..Menu::default()
        }
    }

    #[tokio::test]
    async fn test_grants_are_ordered_by_sort_then_id() {
        let menus = Arc::new(MemoryMapper::<Menu>::new());
        let dashboard = menus.create(&menu("Dashboard", Some(2))).await.unwrap();
        let users = menus.create(&menu("Users", None)).await.unwrap();
        let home = menus.create(&menu("Home", Some(1))).await.unwrap();
        let mapper = MemoryRoleMenuMapper::new(menus);

        for id in [users.id, dashboard.id, home.id] {
            assert!(mapper.grant(1, id).await.unwrap());
        }
        assert!(!mapper.grant(1, home.id).await.unwrap());

        let names: Vec<String> = mapper
            .find_menus_by_role(1)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Home", "Dashboard", "Users"]);
        assert!(mapper.find_menus_by_role(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grant_of_missing_menu_fails_like_a_foreign_key() {
        let mapper = MemoryRoleMenuMapper::new(Arc::new(MemoryMapper::new()));
        let err = mapper.grant(1, 99).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
    }
}
