//! Customer collection store.

use std::sync::{Arc, Mutex, MutexGuard};

use darzi_client::ApiClient;
use darzi_core::types::{Customer, CustomerCreate, CustomerUpdate};
use darzi_core::validation::{validate_name, validate_phone};

use crate::error::StoreResult;
use crate::slot::Slot;

/// The customer list plus the mutations that go through the backend.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<Customer>>>,
}

impl CustomerStore {
    pub fn new(client: ApiClient) -> Self {
        CustomerStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<Customer>> {
        self.slot.lock().expect("customer slot mutex poisoned")
    }

    /// Refetches the customer list, optionally filtered by a search
    /// term. Overlapping refreshes resolve newest-wins.
    pub async fn refresh(&self, search: Option<&str>) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.customers().list(search).await {
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

    /// Registers a customer. Name and phone are validated before the
    /// request; on success the full list is refetched.
    pub async fn create(&self, payload: CustomerCreate) -> StoreResult<()> {
        validate_name(&payload.name)?;
        validate_phone(&payload.phone)?;
        self.client.customers().create(&payload).await?;
        self.refresh(None).await
    }

    /// Updates a customer and refetches the list.
    pub async fn update(&self, id: i64, payload: CustomerUpdate) -> StoreResult<()> {
        if let Some(name) = &payload.name {
            validate_name(name)?;
        }
        if let Some(phone) = &payload.phone {
            validate_phone(phone)?;
        }
        self.client.customers().update(id, &payload).await?;
        self.refresh(None).await
    }

    /// Removes a customer and refetches the list.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.customers().delete(id).await?;
        self.refresh(None).await
    }

    /// Read access to the loaded collection.
    pub fn with_customers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<Customer>) -> R,
    {
        f(&self.lock())
    }

    /// Looks up one loaded customer by id.
    pub fn get(&self, id: i64) -> Option<Customer> {
        self.lock().items().iter().find(|c| c.id == id).cloned()
    }
}

// =============================================================================
// Tests
// =============================================================================
