//! Role service: CRUD plus the menus granted to a role.

use std::ops::Deref;
use std::sync::Arc;

use quickinit_core::result::AppResult;
use quickinit_core::traits::{Loggable, Mapper};
use quickinit_database::RoleMenuMapper;
use quickinit_entity::{Menu, Role};

use crate::aspect::{LogAspect, LogRecord};
use crate::crud::CrudService;

/// CRUD over `role`, extended with role-menu grants.
///
/// Dereferences to the inner [`CrudService<Role>`] for the generic
/// operations.
pub struct RoleService {
    crud: CrudService<Role>,
    role_menu: Arc<dyn RoleMenuMapper>,
    aspect: LogAspect,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(roles: Arc<dyn Mapper<Role>>, role_menu: Arc<dyn RoleMenuMapper>) -> Self {
        Self {
            crud: CrudService::new(roles),
            role_menu,
            aspect: LogAspect::new("role"),
        }
    }

    /// Menus granted to `role_id`. Empty when the role has none or does not exist.
    pub async fn menu_list(&self, role_id: i64) -> AppResult<Vec<Menu>> {
        self.aspect
            .around(
                "menu_list",
                &[&role_id as &dyn Loggable],
                None,
                self.role_menu.find_menus_by_role(role_id),
            )
            .await
    }

    /// Grants `menu_id` to `role_id`. `false` if it was already granted.
    pub async fn grant_menu(&self, role_id: i64, menu_id: i64) -> AppResult<bool> {
        self.aspect
            .around(
                "grant_menu",
                &[&role_id as &dyn Loggable, &menu_id],
                Some(LogRecord::new("grant", "role_menu")),
                self.role_menu.grant(role_id, menu_id),
            )
            .await
    }
}

impl Deref for RoleService {
    type Target = CrudService<Role>;

    fn deref(&self) -> &Self::Target {
        &self.crud
    }
}

impl std::fmt::Debug for RoleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleService")
            .field("crud", &self.crud)
            .finish_non_exhaustive()
    }
}
