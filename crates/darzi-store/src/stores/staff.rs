//! Staff collection store.

use std::sync::{Arc, Mutex, MutexGuard};

use darzi_client::ApiClient;
use darzi_core::types::{StaffCreate, StaffMember, StaffRole, StaffUpdate};
use darzi_core::validation::{selectable_staff_ids, validate_name, validate_phone};
use darzi_core::StaffAssignment;

use crate::error::StoreResult;
use crate::slot::Slot;

/// The staff list plus its mutations.
#[derive(Debug, Clone)]
pub struct StaffStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<StaffMember>>>,
}

impl StaffStore {
    pub fn new(client: ApiClient) -> Self {
        StaffStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<StaffMember>> {
        self.slot.lock().expect("staff slot mutex poisoned")
    }

    /// Refetches the staff list, optionally narrowed to one role.
    pub async fn refresh(&self, role: Option<StaffRole>) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.staff().list(role).await {
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

    /// Registers a staff member and refetches the list.
    pub async fn create(&self, payload: StaffCreate) -> StoreResult<()> {
        validate_name(&payload.name)?;
        validate_phone(&payload.phone)?;
        self.client.staff().create(&payload).await?;
        self.refresh(None).await
    }

    /// Updates a staff member and refetches the list.
    pub async fn update(&self, id: i64, payload: StaffUpdate) -> StoreResult<()> {
        if let Some(name) = &payload.name {
            validate_name(name)?;
        }
        if let Some(phone) = &payload.phone {
            validate_phone(phone)?;
        }
        self.client.staff().update(id, &payload).await?;
        self.refresh(None).await
    }

    /// Removes a staff member and refetches the list.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.staff().delete(id).await?;
        self.refresh(None).await
    }

    /// Read access to the loaded collection.
    pub fn with_staff<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<StaffMember>) -> R,
    {
        f(&self.lock())
    }

    /// Loaded staff who can still be assigned to an order, i.e. those
    /// not already in `existing`. Feeds the assignment picker so a
    /// duplicate cannot even be selected.
    pub fn assignable(&self, existing: &[StaffAssignment]) -> Vec<StaffMember> {
        let slot = self.lock();
        let all_ids: Vec<i64> = slot.items().iter().map(|s| s.id).collect();
        let selectable = selectable_staff_ids(&all_ids, existing);
        slot.items()
            .iter()
            .filter(|s| selectable.contains(&s.id))
            .cloned()
            .collect()
    }
}
