use config::Config;
use entity_api::CareStore;
use log::info;
use std::sync::Arc;

pub mod config;
pub mod logging;

/// Seeds the in-memory fixture store the whole service reads from. Called
/// once at startup; the returned handle is shared by every request.
pub fn init_care_store() -> Arc<CareStore> {
    let store = entity_api::seed_store();

    info!(
        "Seeded fixture store: {} user(s), {} care task(s), {} insight(s), {} consent(s)",
        store.users().len(),
        store.care_tasks().len(),
        store.insights().len(),
        store.consents().len(),
    );

    Arc::new(store)
}

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub care_store: Arc<CareStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, care_store: &Arc<CareStore>) -> Self {
        Self {
            care_store: Arc::clone(care_store),
            config: app_config,
        }
    }

    pub fn care_store_ref(&self) -> &CareStore {
        self.care_store.as_ref()
    }
}
