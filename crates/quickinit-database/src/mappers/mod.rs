//! Mapper implementations and the bundle the application is wired with.

pub mod menu;
pub mod permission;
pub mod role;
pub mod role_menu;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use quickinit_core::config::{DatabaseConfig, DatabaseDriver};
use quickinit_core::error::{AppError, ErrorKind};
use quickinit_core::result::AppResult;
use quickinit_core::traits::Mapper;
use quickinit_entity::{Menu, Permission, Role};

use crate::connection::DatabasePool;
use crate::memory::MemoryMapper;
use crate::migration::run_migrations;

pub use menu::MenuMapper;
pub use permission::PermissionMapper;
pub use role::RoleMapper;
pub use role_menu::{MemoryRoleMenuMapper, PgRoleMenuMapper, RoleMenuMapper};

/// Every mapper the services need, behind trait objects.
///
/// The implementation is selected once at startup from
/// [`DatabaseConfig::driver`].
#[derive(Clone)]
pub struct Mappers {
    /// Permission table.
    pub permission: Arc<dyn Mapper<Permission>>,
    /// Menu table.
    pub menu: Arc<dyn Mapper<Menu>>,
    /// Role table.
    pub role: Arc<dyn Mapper<Role>>,
    /// Role-to-menu grants.
    pub role_menu: Arc<dyn RoleMenuMapper>,
    /// The pool, when backed by PostgreSQL.
    pub pool: Option<DatabasePool>,
}

impl Mappers {
    /// Connect according to configuration, running migrations if enabled.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.driver {
            DatabaseDriver::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseDriver::Memory => {
                info!("Using in-memory mappers; data is not persisted");
                Ok(Self::memory())
            }
        }
    }

    /// sqlx-backed mappers sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            permission: Arc::new(PermissionMapper::new(pg.clone())),
            menu: Arc::new(MenuMapper::new(pg.clone())),
            role: Arc::new(RoleMapper::new(pg.clone())),
            role_menu: Arc::new(PgRoleMenuMapper::new(pg)),
            pool: Some(pool),
        }
    }

    /// Process-local mappers.
    pub fn memory() -> Self {
        let menus = Arc::new(MemoryMapper::<Menu>::new());
        Self {
            permission: Arc::new(MemoryMapper::<Permission>::new()),
            menu: menus.clone(),
            role: Arc::new(MemoryMapper::<Role>::new()),
            role_menu: Arc::new(MemoryRoleMenuMapper::new(menus)),
            pool: None,
        }
    }
}

/// Wrap a sqlx failure with the operation that caused it.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

/// `SELECT COUNT(*)` over a whole table.
pub(crate) async fn count_rows(pool: &PgPool, table: &'static str) -> AppResult<u64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .map_err(db_error("Failed to count rows"))?;
    Ok(u64::try_from(count).unwrap_or(0))
}

/// Convert a page request into `LIMIT`/`OFFSET` binds.
pub(crate) fn limit_offset(page: &quickinit_core::types::PageRequest) -> (i64, i64) {
    (
        i64::try_from(page.limit()).unwrap_or(i64::MAX),
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    )
}
