//! Sample gallery store.

use std::sync::{Arc, Mutex, MutexGuard};

use darzi_client::ApiClient;
use darzi_core::types::{Sample, SampleCreate, SampleUpdate};
use darzi_core::validation::{validate_display_name, validate_garment_type};

use crate::error::StoreResult;
use crate::slot::Slot;

/// The sample gallery plus its mutations.
#[derive(Debug, Clone)]
pub struct SampleStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<Sample>>>,
}

impl SampleStore {
    pub fn new(client: ApiClient) -> Self {
        SampleStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<Sample>> {
        self.slot.lock().expect("sample slot mutex poisoned")
    }

    /// Refetches the gallery, optionally narrowed by garment type or a
    /// title search term.
    pub async fn refresh(
        &self,
        garment_type: Option<&str>,
        search: Option<&str>,
    ) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.samples().list(garment_type, search).await {
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

    /// Adds a sample and refetches the gallery.
    pub async fn create(&self, payload: SampleCreate) -> StoreResult<()> {
        validate_garment_type(&payload.garment_type)?;
        validate_display_name(&payload.title)?;
        self.client.samples().create(&payload).await?;
        self.refresh(None, None).await
    }

    /// Updates a sample and refetches the gallery.
    pub async fn update(&self, id: i64, payload: SampleUpdate) -> StoreResult<()> {
        if let Some(garment_type) = &payload.garment_type {
            validate_garment_type(garment_type)?;
        }
        if let Some(title) = &payload.title {
            validate_display_name(title)?;
        }
        self.client.samples().update(id, &payload).await?;
        self.refresh(None, None).await
    }

    /// Removes a sample and refetches the gallery.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.samples().delete(id).await?;
        self.refresh(None, None).await
    }

    /// Read access to the loaded gallery.
    pub fn with_samples<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<Sample>) -> R,
    {
        f(&self.lock())
    }
}
