//! Submit order command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::OrderSubmission;
use crate::services::{OrderError, OrderService, SeaOrmOrderService};

pub async fn cmd_submit_order(
    config: &Config,
    username: &str,
    brands: &[String],
) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmOrderService::new(store.clone());

    match service
        .submit(OrderSubmission::new(username, brands.iter().cloned()))
        .await
    {
        Ok(id) => {
            if let Some(order) = store.get_order(id).await? {
                println!("✓ Recorded order #{} for {}", order.id, order.username);
                println!("  Brands: {}", order.laptop_brands);
                println!("  Submitted: {}", order.submit_date);
            }
            Ok(())
        }
        Err(OrderError::Validation(msg)) => {
            println!("Error: {msg}");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database Error: {e}")),
    }
}
