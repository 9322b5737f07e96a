//! List orders command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_orders(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let orders = store.list_orders().await?;

    if orders.is_empty() {
        println!("No repair orders found in the database.");
        println!();
        println!("Record one with: repairdesk submit <username> <brand>...");
        return Ok(());
    }

    println!("Repair Orders ({} total)", orders.len());
    println!("{:-<70}", "");

    for order in orders {
        println!("#{} {} [{}]", order.id, order.username, order.laptop_brands);
        println!("  Submitted: {}", order.submit_date);
    }

    Ok(())
}
