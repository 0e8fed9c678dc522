//! Core traits defined in `quickinit-core` and implemented by other crates.

pub mod entity;
pub mod loggable;
pub mod mapper;

pub use entity::Entity;
pub use loggable::{LogFields, Loggable};
pub use mapper::Mapper;
