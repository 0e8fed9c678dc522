//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use quickinit_entity::{Menu, Permission, Role};

/// Query of `GET /public/test`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidationTestQuery {
    /// Article id. Absence is rejected while deserializing.
    pub article_id: i64,
    /// Tag id.
    #[validate(range(min = 100, message = "tag id must be at least 100"))]
    pub tag_id: i64,
}

/// Create or replace a permission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PermissionRequest {
    /// Display name.
    #[validate(length(min = 1, max = 64, message = "permission name must not be empty"))]
    pub name: String,
    /// Unique code.
    #[validate(length(min = 1, max = 128, message = "permission code must not be empty"))]
    pub code: String,
    /// Guarded path.
    pub url: Option<String>,
    /// Guarded method.
    pub method: Option<String>,
    /// Parent permission.
    pub parent_id: Option<i64>,
    /// Ordering.
    pub sort: Option<i32>,
}

impl PermissionRequest {
    /// Build the entity this request describes.
    pub fn into_entity(self, id: i64) -> Permission {
        Permission {
            id,
            name: self.name,
            code: self.code,
            url: self.url,
            method: self.method,
            parent_id: self.parent_id,
            sort: self.sort,
            ..Permission::default()
        }
    }
}

/// Create or replace a menu.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuRequest {
    /// Label.
    #[validate(length(min = 1, max = 64, message = "menu name must not be empty"))]
    pub name: String,
    /// Route path.
    pub path: Option<String>,
    /// Component.
    pub component: Option<String>,
    /// Icon.
    pub icon: Option<String>,
    /// Parent menu.
    pub parent_id: Option<i64>,
    /// Ordering.
    pub sort: Option<i32>,
    /// Hidden from navigation.
    #[serde(default)]
    pub hidden: bool,
}

impl MenuRequest {
    /// Build the entity this request describes.
    pub fn into_entity(self, id: i64) -> Menu {
        Menu {
            id,
            name: self.name,
            path: self.path,
            component: self.component,
            icon: self.icon,
            parent_id: self.parent_id,
            sort: self.sort,
            hidden: self.hidden,
            ..Menu::default()
        }
    }
}

/// Create or replace a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleRequest {
    /// Display name.
    #[validate(length(min = 1, max = 64, message = "role name must not be empty"))]
    pub name: String,
    /// Unique code.
    #[validate(length(min = 1, max = 64, message = "role code must not be empty"))]
    pub code: String,
    /// Description.
    pub description: Option<String>,
    /// Whether the role is active.
    pub enabled: Option<bool>,
}

impl RoleRequest {
    /// Build the entity this request describes.
    pub fn into_entity(self, id: i64) -> Role {
        let mut role = Role {
            id,
            name: self.name,
            code: self.code,
            description: self.description,
            ..Role::default()
        };
        if let Some(enabled) = self.enabled {
            role.enabled = enabled;
        }
        role
    }
}
