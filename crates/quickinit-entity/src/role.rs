//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickinit_core::traits::{Entity, LogFields, Loggable};

use crate::audit::AuditFields;

/// A role; menus are granted to roles through the `role_menu` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Primary key.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique role code, e.g. `admin`.
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Disabled roles keep their grants but should not be assigned.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
}

impl Default for Role {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            code: String::new(),
            description: None,
            enabled: default_enabled(),
            audit: AuditFields::default(),
        }
    }
}

impl Entity for Role {
    const NAME: &'static str = "role";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.audit.create_time
    }

    fn touch(&mut self, created: DateTime<Utc>, updated: DateTime<Utc>) {
        self.audit.touch(created, updated);
    }
}

impl Loggable for Role {
    fn log_fields(&self, fields: &mut LogFields) {
        self.audit.log_fields(fields);
        fields
            .field("id", &self.id)
            .field("name", &self.name)
            .field("code", &self.code)
            .optional("description", self.description.as_ref())
            .field("enabled", &self.enabled);
    }
}

fn default_enabled() -> bool {
    true
}
