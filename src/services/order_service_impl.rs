//! `SeaORM` implementation of the `OrderService` trait.

use crate::constants::REPAIRS_TABLE;
use crate::db::Store;
use crate::models::{Order, OrderSubmission, Table};
use crate::services::order_service::{OrderError, OrderService, validate_submission};
use tracing::{info, warn};

/// SeaORM-based implementation of [`OrderService`].
pub struct SeaOrmOrderService {
    store: Store,
}

impl SeaOrmOrderService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl OrderService for SeaOrmOrderService {
    async fn submit(&self, submission: OrderSubmission) -> Result<i32, OrderError> {
        let order = validate_submission(submission).inspect_err(|e| {
            warn!(error = %e, "Rejected repair order");
        })?;

        let id = self
            .store
            .insert_order(&order.username, &order.laptop_brands())
            .await?;

        metrics::counter!("repair_orders_submitted_total").increment(1);
        info!(
            repair_id = id,
            brands = order.brands.len(),
            "Repair order submitted by {}",
            order.username
        );

        Ok(id)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.list_orders().await?)
    }

    async fn repairs_table(&self) -> Result<Table, OrderError> {
        Ok(self.store.load_table(REPAIRS_TABLE).await?)
    }
}
