use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{OrderService, SeaOrmOrderService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub order_service: Arc<dyn OrderService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let order_service: Arc<dyn OrderService> =
            Arc::new(SeaOrmOrderService::new(store.clone()));

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            order_service,
        })
    }
}
