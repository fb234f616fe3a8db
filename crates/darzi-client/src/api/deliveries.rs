//! Delivery-tracking endpoint.

use darzi_core::types::{Delivery, OrderStatus};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/deliveries`.
///
/// Read-only: deliveries are a projection over orders, so updates go
/// through [`OrderApi`](crate::api::OrderApi).
#[derive(Debug)]
pub struct DeliveryApi<'a> {
    http: &'a Http,
}

impl<'a> DeliveryApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Delivery rows, optionally narrowed by a date window
    /// (`YYYY-MM-DD`, inclusive) and/or status.
    pub async fn list(
        &self,
        date_from: Option<&str>,
        date_to: Option<&str>,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Delivery>> {
        let mut query = Vec::new();
        if let Some(from) = date_from {
            query.push(("start_date", from.to_string()));
        }
        if let Some(to) = date_to {
            query.push(("end_date", to.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        Ok(self
            .http
            .get("/api/deliveries", &query)
            .await?
            .unwrap_or_default())
    }
}
