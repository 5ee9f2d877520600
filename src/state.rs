use crate::config::AppConfig;
use crate::users::store::UserStore;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store = UserStore::connect(&config.database_url)
            .await
            .with_context(|| format!("open user store at {}", config.database_url))?;

        Ok(Self { store, config })
    }

    pub fn from_parts(store: UserStore, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}
