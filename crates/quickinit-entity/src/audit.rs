//! Audit columns shared by every table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quickinit_core::traits::{LogFields, Loggable};

/// `create_time` / `update_time`, flattened into each entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AuditFields {
    /// When the row was inserted.
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// When the row was last written.
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// Stamp both columns.
    pub fn touch(&mut self, created: DateTime<Utc>, updated: DateTime<Utc>) {
        self.create_time = Some(created);
        self.update_time = Some(updated);
    }
}

impl Loggable for AuditFields {
    fn log_fields(&self, fields: &mut LogFields) {
        fields
            .optional("create_time", self.create_time.as_ref())
            .optional("update_time", self.update_time.as_ref());
    }
}
