//! Payment collection store.

use std::sync::{Arc, Mutex, MutexGuard};

use darzi_client::ApiClient;
use darzi_core::types::{OrderDetails, Payment, PaymentCreate};
use darzi_core::validation::validate_payment_amount;

use crate::error::StoreResult;
use crate::slot::Slot;

/// The payment list plus its mutations.
#[derive(Debug, Clone)]
pub struct PaymentStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<Payment>>>,
}

impl PaymentStore {
    pub fn new(client: ApiClient) -> Self {
        PaymentStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<Payment>> {
        self.slot.lock().expect("payment slot mutex poisoned")
    }

    /// Refetches the payment list, optionally narrowed to one order.
    pub async fn refresh(&self, order_id: Option<i64>) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.payments().list(order_id).await {
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

    /// Records a payment against `order`.
    ///
    /// The amount is checked against the order's remaining balance
    /// before the request goes out (the message quotes the balance, as
    /// the payment form shows it). Two concurrent payments can still
    /// jointly overshoot; the backend accepts that today and the
    /// remaining figure simply goes negative.
    pub async fn record(&self, order: &OrderDetails, payload: PaymentCreate) -> StoreResult<()> {
        validate_payment_amount(payload.amount, order.remaining_amount)?;
        self.client.payments().create(&payload).await?;
        self.refresh(None).await
    }

    /// Removes a payment and refetches the list.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.payments().delete(id).await?;
        self.refresh(None).await
    }

    /// Read access to the loaded collection.
    pub fn with_payments<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<Payment>) -> R,
    {
        f(&self.lock())
    }
}

// =============================================================================
// Tests
// =============================================================================
