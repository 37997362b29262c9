use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::pagination::Paginator;
use catalog_db::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState<S>>`.
///
/// Cheaply cloneable: the store is a pool or `Arc` handle and the config
/// sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// Read-only catalog store.
    pub store: S,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Paginator built from `config.page_size`.
    pub paginator: Paginator,
}

impl<S: CatalogStore> AppState<S> {
    pub fn new(store: S, config: ServerConfig) -> Result<Self, CoreError> {
        let paginator = Paginator::new(config.page_size)?;
        Ok(Self {
            store,
            config: Arc::new(config),
            paginator,
        })
    }
}
