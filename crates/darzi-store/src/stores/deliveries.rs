//! Delivery-tracking store.
//!
//! Read-only: a delivery row is the backend's projection of an order,
//! so status changes go through [`OrderStore`](crate::stores::OrderStore)
//! and this store just refetches afterwards.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;

use darzi_client::ApiClient;
use darzi_core::aggregate::is_overdue;
use darzi_core::types::{Delivery, OrderStatus};

use crate::error::StoreResult;
use crate::slot::Slot;

/// The delivery list for the tracking screen.
#[derive(Debug, Clone)]
pub struct DeliveryStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<Delivery>>>,
}

impl DeliveryStore {
    pub fn new(client: ApiClient) -> Self {
        DeliveryStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<Delivery>> {
        self.slot.lock().expect("delivery slot mutex poisoned")
    }

    /// Refetches delivery rows, optionally narrowed by an inclusive
    /// `YYYY-MM-DD` date window and/or status.
    pub async fn refresh(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
        status: Option<OrderStatus>,
    ) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.deliveries().list(date_from, date_to, status).await {
            Ok(items) => {
                self.lock().apply(ticket, items);
                Ok(())
            }
            Err(err) => {
                self.lock().fail(ticket, err.to_string());
                Err(err.into())
            }
        }
    }

    /// Read access to the loaded rows.
    pub fn with_deliveries<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<Delivery>) -> R,
    {
        f(&self.lock())
    }

    /// Loaded deliveries that are overdue as of `today`: delivery date
    /// strictly in the past and the order not yet delivered.
    pub fn overdue(&self, today: NaiveDate) -> Vec<Delivery> {
        self.lock()
            .items()
            .iter()
            .filter(|d| is_overdue(&d.delivery_date, d.status, today))
            .cloned()
            .collect()
    }
}
