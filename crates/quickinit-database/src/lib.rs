//! # quickinit-database
//!
//! PostgreSQL connection management, migrations, and the mapper
//! implementations behind the service layer. A process-local mapper is
//! available for development and tests.

pub mod connection;
pub mod mappers;
pub mod memory;
pub mod migration;

pub use connection::DatabasePool;
pub use mappers::Mappers;
pub use mappers::role_menu::RoleMenuMapper;
pub use memory::MemoryMapper;
