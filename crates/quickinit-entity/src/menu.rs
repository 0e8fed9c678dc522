//! Menu entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickinit_core::traits::{Entity, LogFields, Loggable};

use crate::audit::AuditFields;

/// A navigation entry of the admin front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Menu {
    /// Primary key.
    #[serde(default)]
    pub id: i64,
    /// Label shown in the navigation.
    pub name: String,
    /// Front-end route path.
    pub path: Option<String>,
    /// Front-end component to render.
    pub component: Option<String>,
    /// Icon identifier.
    pub icon: Option<String>,
    /// Parent menu, `None` for top level.
    pub parent_id: Option<i64>,
    /// Ordering among siblings.
    pub sort: Option<i32>,
    /// Whether the entry is hidden from navigation.
    #[serde(default)]
    pub hidden: bool,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
}

impl Entity for Menu {
    const NAME: &'static str = "menu";

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

impl Loggable for Menu {
    fn log_fields(&self, fields: &mut LogFields) {
        self.audit.log_fields(fields);
        fields
            .field("id", &self.id)
            .field("name", &self.name)
            .optional("path", self.path.as_ref())
            .optional("component", self.component.as_ref())
            .optional("icon", self.icon.as_ref())
            .optional("parent_id", self.parent_id.as_ref())
            .optional("sort", self.sort.as_ref())
            .field("hidden", &self.hidden);
    }
}
