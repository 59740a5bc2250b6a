use std::sync::Arc;

use tokio::sync::RwLock;

use hoverdict_config::Config;
use hoverdict_core::store::DictStore;

pub struct AppState {
    pub config: RwLock<Config>,
    /// Read-only after activation; lookups share it without locking.
    pub store: Arc<DictStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<DictStore>) -> Self {
        Self {
            config: RwLock::new(config),
            store,
        }
    }
}
