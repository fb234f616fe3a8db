//! Payment endpoints.

use darzi_core::types::{Payment, PaymentCreate};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/payments`.
#[derive(Debug)]
pub struct PaymentApi<'a> {
    http: &'a Http,
}

impl<'a> PaymentApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// All payments, optionally narrowed to one order.
    pub async fn list(&self, order_id: Option<i64>) -> ClientResult<Vec<Payment>> {
        let mut query = Vec::new();
        if let Some(id) = order_id {
            query.push(("order_id", id.to_string()));
        }
        Ok(self
            .http
            .get("/api/payments", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single payment by id.
    pub async fn get(&self, id: i64) -> ClientResult<Option<Payment>> {
        self.http.get(&format!("/api/payments/{id}"), &[]).await
    }

    /// Record a payment against an order.
    pub async fn create(&self, payload: &PaymentCreate) -> ClientResult<Option<Payment>> {
        self.http.post("/api/payments/", payload).await
    }

    /// Remove a payment.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/payments/{id}/")).await
    }
}
