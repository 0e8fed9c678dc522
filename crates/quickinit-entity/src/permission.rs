//! Permission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickinit_core::traits::{Entity, LogFields, Loggable};

use crate::audit::AuditFields;

/// A named permission, optionally bound to an API path and method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Primary key.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique permission code, e.g. `article:write`.
    pub code: String,
    /// Guarded request path.
    pub url: Option<String>,
    /// Guarded HTTP method.
    pub method: Option<String>,
    /// Parent permission for grouping.
    pub parent_id: Option<i64>,
    /// Ordering among siblings.
    pub sort: Option<i32>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
}

impl Entity for Permission {
    const NAME: &'static str = "permission";

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

impl Loggable for Permission {
    fn log_fields(&self, fields: &mut LogFields) {
        self.audit.log_fields(fields);
        fields
            .field("id", &self.id)
            .field("name", &self.name)
            .field("code", &self.code)
            .optional("url", self.url.as_ref())
            .optional("method", self.method.as_ref())
            .optional("parent_id", self.parent_id.as_ref())
            .optional("sort", self.sort.as_ref());
    }
}
