//! Identity contract shared by every persisted record.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::traits::loggable::Loggable;

/// A record stored by a [`Mapper`](crate::traits::Mapper), keyed by an `i64`.
pub trait Entity: Clone + Debug + Serialize + Loggable + Send + Sync + 'static {
    /// Short lowercase name used in log tags and error messages.
    const NAME: &'static str;

    /// The primary key. Zero before the record is first stored.
    fn id(&self) -> i64;

    /// Overwrite the primary key.
    fn set_id(&mut self, id: i64);

    /// When the record was first stored, if it tracks that.
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Stamp the audit columns.
    fn touch(&mut self, _created: DateTime<Utc>, _updated: DateTime<Utc>) {}
}
