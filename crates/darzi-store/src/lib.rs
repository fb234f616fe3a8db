//! # darzi-store: In-Memory Application State for Darzi
//!
//! The state layer between the screens and the REST client. It holds
//! the fetched collections, guards them against out-of-order fetch
//! responses, routes every mutation through `darzi-client`, and builds
//! the screen views with `darzi-core`'s aggregation.
//!
//! ## Module Organization
//! ```text
//! darzi-store/
//! ├── lib.rs       - AppStores bundle (this file)
//! ├── slot.rs      - Slot<T>: collection + loading/error + fetch guard
//! ├── error.rs     - StoreError
//! ├── stores/      - One store per collection
//! └── views.rs     - DashboardView, CustomerView
//! ```
//!
//! ## Concurrency Model
//! Each collection sits in a `Slot` behind `Arc<Mutex<_>>`. Locks are
//! taken for reads and state flips only, never across an await point;
//! overlapping refreshes are serialized by the slot's ticket sequence
//! (newest fetch wins, late responses are discarded).

pub mod error;
pub mod slot;
pub mod stores;
pub mod views;

pub use error::{StoreError, StoreResult};
pub use slot::{FetchTicket, Slot};
pub use stores::{
    CustomerStore, DeliveryStore, MeasurementStore, OrderStore, PaymentStore, SampleStore,
    StaffStore,
};
pub use views::{CustomerView, DashboardView, DASHBOARD_LIST_LIMIT};

use darzi_client::ApiClient;

/// All stores over one shared API client.
#[derive(Debug, Clone)]
pub struct AppStores {
    pub customers: CustomerStore,
    pub orders: OrderStore,
    pub payments: PaymentStore,
    pub measurements: MeasurementStore,
    pub staff: StaffStore,
    pub samples: SampleStore,
    pub deliveries: DeliveryStore,
}

impl AppStores {
    /// Builds every store over clones of the same client (they share
    /// its connection pool).
    pub fn new(client: ApiClient) -> Self {
        AppStores {
            customers: CustomerStore::new(client.clone()),
            orders: OrderStore::new(client.clone()),
            payments: PaymentStore::new(client.clone()),
            measurements: MeasurementStore::new(client.clone()),
            staff: StaffStore::new(client.clone()),
            samples: SampleStore::new(client.clone()),
            deliveries: DeliveryStore::new(client),
        }
    }

    /// The dashboard view over whatever is currently loaded.
    pub fn dashboard(&self, today: chrono::NaiveDate) -> DashboardView {
        self.customers.with_customers(|customers| {
            self.orders.with_orders(|orders| {
                self.payments.with_payments(|payments| {
                    DashboardView::compute(
                        customers.items(),
                        orders.items(),
                        payments.items(),
                        today,
                    )
                })
            })
        })
    }

    /// The customer-detail view. Fails if the customer is not in the
    /// loaded collection.
    pub fn customer_detail(&self, customer_id: i64) -> StoreResult<CustomerView> {
        let customer = self
            .customers
            .get(customer_id)
            .ok_or(darzi_core::CoreError::CustomerNotFound(customer_id))?;
        Ok(self.orders.with_orders(|orders| {
            self.payments.with_payments(|payments| {
                CustomerView::compute(customer.clone(), orders.items(), payments.items())
            })
        }))
    }
}
