//! # quickinit-service
//!
//! Service layer for QuickInit. Each service forwards to a mapper without
//! transforming anything; every call goes through the [`LogAspect`], which
//! logs arguments, results and errors around it.
//!
//! Services follow constructor injection: mappers are provided at
//! construction time as `Arc` trait objects.

pub mod aspect;
pub mod crud;
pub mod role;

use std::sync::Arc;

use quickinit_database::Mappers;
use quickinit_entity::{Menu, Permission};

pub use aspect::{LogAspect, LogRecord};
pub use crud::CrudService;
pub use role::RoleService;

/// CRUD over the `permission` table.
pub type PermissionService = CrudService<Permission>;

/// CRUD over the `menu` table.
pub type MenuService = CrudService<Menu>;

/// All services, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Services {
    /// Permission service.
    pub permission: Arc<PermissionService>,
    /// Menu service.
    pub menu: Arc<MenuService>,
    /// Role service.
    pub role: Arc<RoleService>,
}

impl Services {
    /// Build every service over the given mappers.
    pub fn new(mappers: &Mappers) -> Self {
        Self {
            permission: Arc::new(CrudService::new(mappers.permission.clone())),
            menu: Arc::new(CrudService::new(mappers.menu.clone())),
            role: Arc::new(RoleService::new(
                mappers.role.clone(),
                mappers.role_menu.clone(),
            )),
        }
    }
}
