//! Shared application state passed to every handler.

use std::sync::Arc;

use quickinit_core::config::AppConfig;
use quickinit_database::{DatabasePool, Mappers};
use quickinit_service::Services;

use crate::middleware::interceptor::InterceptorRegistry;

/// Application state cloned into every handler via `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// The services handlers call into.
    pub services: Services,
    /// Request interceptors run around every routed request.
    pub interceptors: Arc<InterceptorRegistry>,
    /// The pool, when backed by PostgreSQL.
    pub pool: Option<DatabasePool>,
}

impl AppState {
    /// Wire state from configuration and connected mappers, with the default interceptors.
    pub fn new(config: AppConfig, mappers: &Mappers) -> Self {
        Self {
            config: Arc::new(config),
            services: Services::new(mappers),
            interceptors: Arc::new(InterceptorRegistry::with_defaults()),
            pool: mappers.pool.clone(),
        }
    }

    /// Replace the interceptor chain.
    pub fn with_interceptors(mut self, interceptors: InterceptorRegistry) -> Self {
        self.interceptors = Arc::new(interceptors);
        self
    }
}
