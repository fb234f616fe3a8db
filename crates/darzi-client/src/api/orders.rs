//! Order endpoints, including per-order staff assignments.

use darzi_core::types::{
    AssignmentCreate, OrderCreate, OrderDetails, OrderStatus, OrderUpdate, StaffAssignment,
};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/orders`.
#[derive(Debug)]
pub struct OrderApi<'a> {
    http: &'a Http,
}

impl<'a> OrderApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Orders with their joined details, optionally narrowed by
    /// customer and/or status.
    pub async fn list(
        &self,
        customer_id: Option<i64>,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<OrderDetails>> {
        let mut query = Vec::new();
        if let Some(id) = customer_id {
            query.push(("customer_id", id.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        Ok(self
            .http
            .get("/api/orders", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single order with its joined details.
    pub async fn get(&self, id: i64) -> ClientResult<Option<OrderDetails>> {
        self.http.get(&format!("/api/orders/{id}"), &[]).await
    }

    /// Create an order. Items and any initial staff assignments travel
    /// in the one request.
    pub async fn create(&self, payload: &OrderCreate) -> ClientResult<Option<OrderDetails>> {
        self.http.post("/api/orders/", payload).await
    }

    /// Update an order's status, delivery date, or notes.
    pub async fn update(&self, id: i64, payload: &OrderUpdate) -> ClientResult<Option<OrderDetails>> {
        self.http.put(&format!("/api/orders/{id}/"), payload).await
    }

    /// Remove an order. The backend cascades to its items, payments,
    /// and assignments.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/orders/{id}/")).await
    }

    // =========================================================================
    // Staff Assignments
    // =========================================================================

    /// Staff currently assigned to an order.
    pub async fn assignments(&self, order_id: i64) -> ClientResult<Vec<StaffAssignment>> {
        Ok(self
            .http
            .get(&format!("/api/orders/{order_id}/staff/"), &[])
            .await?
            .unwrap_or_default())
    }

    /// Assign a staff member to an order. The backend rejects a
    /// duplicate assignment with a 400.
    pub async fn assign_staff(
        &self,
        order_id: i64,
        payload: &AssignmentCreate,
    ) -> ClientResult<Option<StaffAssignment>> {
        self.http
            .post(&format!("/api/orders/{order_id}/staff/"), payload)
            .await
    }

    /// Remove a staff assignment from an order. Keyed by the
    /// assignment's own id, not the staff member's.
    pub async fn remove_staff(&self, order_id: i64, assignment_id: i64) -> ClientResult<()> {
        self.http
            .delete(&format!("/api/orders/{order_id}/staff/{assignment_id}/"))
            .await
    }
}
