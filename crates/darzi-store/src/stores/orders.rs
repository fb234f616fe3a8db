//! Order collection store, including per-order staff assignments.

use std::sync::{Arc, Mutex, MutexGuard};

use darzi_client::ApiClient;
use darzi_core::types::{
    AssignmentCreate, OrderCreate, OrderDetails, OrderStatus, OrderUpdate,
};
use darzi_core::validation::{validate_assignment, validate_delivery_date, validate_order_items};
use darzi_core::CoreError;

use crate::error::StoreResult;
use crate::slot::Slot;

/// The order list plus its mutations.
///
/// Orders are always held in their joined `OrderDetails` shape; the
/// dashboard and customer screens aggregate straight off this slot.
#[derive(Debug, Clone)]
pub struct OrderStore {
    client: ApiClient,
    slot: Arc<Mutex<Slot<OrderDetails>>>,
}

impl OrderStore {
    pub fn new(client: ApiClient) -> Self {
        OrderStore {
            client,
            slot: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<OrderDetails>> {
        self.slot.lock().expect("order slot mutex poisoned")
    }

    /// Refetches the order list, optionally narrowed by customer and/or
    /// status.
    pub async fn refresh(
        &self,
        customer_id: Option<i64>,
        status: Option<OrderStatus>,
    ) -> StoreResult<()> {
        let ticket = self.lock().begin_fetch();
        match self.client.orders().list(customer_id, status).await {
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

    /// Refetches one order and swaps it into the loaded list in place.
    ///
    /// Used after targeted mutations (status change, staff assignment)
    /// where refetching the whole list is wasteful. If the order is not
    /// currently loaded, nothing changes.
    pub async fn refresh_one(&self, id: i64) -> StoreResult<()> {
        if let Some(fresh) = self.client.orders().get(id).await? {
            let mut slot = self.lock();
            if let Some(pos) = slot.items().iter().position(|o| o.id == id) {
                slot.replace_at(pos, fresh);
            }
        }
        Ok(())
    }

    /// Creates an order after validating its line items and delivery
    /// date locally, then refetches the list.
    pub async fn create(&self, payload: OrderCreate) -> StoreResult<()> {
        validate_order_items(&payload.items)?;
        validate_delivery_date(&payload.delivery_date)?;
        self.client.orders().create(&payload).await?;
        self.refresh(None, None).await
    }

    /// Updates an order and refreshes it in place.
    pub async fn update(&self, id: i64, payload: OrderUpdate) -> StoreResult<()> {
        if let Some(date) = &payload.delivery_date {
            validate_delivery_date(date)?;
        }
        self.client.orders().update(id, &payload).await?;
        self.refresh_one(id).await
    }

    /// Moves an order to a new lifecycle status.
    pub async fn set_status(&self, id: i64, status: OrderStatus) -> StoreResult<()> {
        self.update(
            id,
            OrderUpdate {
                status: Some(status),
                ..OrderUpdate::default()
            },
        )
        .await
    }

    /// Removes an order and refetches the list.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.orders().delete(id).await?;
        self.refresh(None, None).await
    }

    // =========================================================================
    // Staff Assignments
    // =========================================================================

    /// Assigns a staff member to an order.
    ///
    /// The order must be loaded; a duplicate assignment is rejected
    /// against it before any request is sent. The backend still
    /// enforces uniqueness as the source of truth.
    pub async fn assign_staff(&self, order_id: i64, payload: AssignmentCreate) -> StoreResult<()> {
        let order = self
            .get(order_id)
            .ok_or(CoreError::OrderNotFound(order_id))?;
        validate_assignment(payload.staff_id, &order.assigned_staff)?;
        self.client.orders().assign_staff(order_id, &payload).await?;
        self.refresh_one(order_id).await
    }

    /// Removes a staff assignment from an order. Takes the assignment
    /// id carried on [`StaffAssignment`], not the staff member's id.
    ///
    /// [`StaffAssignment`]: darzi_core::types::StaffAssignment
    pub async fn remove_staff(&self, order_id: i64, assignment_id: i64) -> StoreResult<()> {
        self.client
            .orders()
            .remove_staff(order_id, assignment_id)
            .await?;
        self.refresh_one(order_id).await
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Read access to the loaded collection.
    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<OrderDetails>) -> R,
    {
        f(&self.lock())
    }

    /// Looks up one loaded order by id.
    pub fn get(&self, id: i64) -> Option<OrderDetails> {
        self.lock().items().iter().find(|o| o.id == id).cloned()
    }
}

// =============================================================================
// Tests
// =============================================================================
