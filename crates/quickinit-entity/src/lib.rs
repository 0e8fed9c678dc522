//! # quickinit-entity
//!
//! Domain entity models for QuickInit. Every struct here is a table row:
//! it derives `Debug`, `Clone`, `Serialize`, `Deserialize` and
//! `sqlx::FromRow`, and implements [`Entity`](quickinit_core::traits::Entity)
//! and [`Loggable`](quickinit_core::traits::Loggable).

pub mod audit;
pub mod menu;
pub mod permission;
pub mod role;

pub use audit::AuditFields;
pub use menu::Menu;
pub use permission::Permission;
pub use role::Role;
