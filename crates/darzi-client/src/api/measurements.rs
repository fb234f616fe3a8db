//! Measurement record endpoints.

use darzi_core::types::{Measurement, MeasurementCreate, MeasurementDetails};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/measurements`.
#[derive(Debug)]
pub struct MeasurementApi<'a> {
    http: &'a Http,
}

impl<'a> MeasurementApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Measurements joined with customer and template display data,
    /// optionally narrowed to one customer and/or garment type.
    pub async fn list(
        &self,
        customer_id: Option<i64>,
        garment_type: Option<&str>,
    ) -> ClientResult<Vec<MeasurementDetails>> {
        let mut query = Vec::new();
        if let Some(id) = customer_id {
            query.push(("customer_id", id.to_string()));
        }
        if let Some(garment) = garment_type {
            query.push(("garment_type", garment.to_string()));
        }
        Ok(self
            .http
            .get("/api/measurements", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single measurement record by id.
    pub async fn get(&self, id: i64) -> ClientResult<Option<MeasurementDetails>> {
        self.http.get(&format!("/api/measurements/{id}"), &[]).await
    }

    /// Record a customer's measurements against a template.
    pub async fn create(&self, payload: &MeasurementCreate) -> ClientResult<Option<Measurement>> {
        self.http.post("/api/measurements/", payload).await
    }

    /// Replace a measurement record. The backend treats this as a full
    /// rewrite of the value map.
    pub async fn update(
        &self,
        id: i64,
        payload: &MeasurementCreate,
    ) -> ClientResult<Option<Measurement>> {
        self.http
            .put(&format!("/api/measurements/{id}/"), payload)
            .await
    }

    /// Remove a measurement record.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/measurements/{id}/")).await
    }
}
