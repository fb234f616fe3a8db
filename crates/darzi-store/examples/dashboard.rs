//! Fetches the live collections and prints the dashboard rollup.
//!
//! Run against a local backend (override with `DARZI_API_URL`):
//!
//! ```text
//! cargo run -p darzi-store --example dashboard
//! ```

use darzi_client::{ApiClient, ClientConfig};
use darzi_store::AppStores;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "darzi_client=debug,darzi_store=debug".into()),
        )
        .init();

    let client = ApiClient::new(ClientConfig::from_env())?;
    let stores = AppStores::new(client);

    stores.customers.refresh(None).await?;
    stores.orders.refresh(None, None).await?;
    stores.payments.refresh(None).await?;

    let today = chrono::Local::now().date_naive();
    let view = stores.dashboard(today);

    println!("customers:        {}", view.customer_count);
    println!("orders:           {}", view.order_count);
    println!(
        "by status:        {} pending / {} cutting / {} sewing / {} ready / {} delivered",
        view.status.pending,
        view.status.cutting,
        view.status.sewing,
        view.status.ready,
        view.status.delivered
    );
    println!("revenue:          {}", view.total_revenue);
    println!("outstanding:      {}", view.outstanding);

    println!("upcoming deliveries:");
    for order in &view.upcoming_deliveries {
        println!(
            "  #{} {} due {} ({} remaining)",
            order.id, order.customer_name, order.delivery_date, order.remaining_amount
        );
    }

    Ok(())
}
