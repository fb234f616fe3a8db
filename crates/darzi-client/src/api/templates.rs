//! Measurement template endpoints.

use darzi_core::types::{Gender, MeasurementTemplate, TemplateCreate, TemplateUpdate};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/measurement-templates`.
#[derive(Debug)]
pub struct TemplateApi<'a> {
    http: &'a Http,
}

impl<'a> TemplateApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Templates, optionally narrowed by garment type and gender.
    pub async fn list(
        &self,
        garment_type: Option<&str>,
        gender: Option<Gender>,
    ) -> ClientResult<Vec<MeasurementTemplate>> {
        let mut query = Vec::new();
        if let Some(garment) = garment_type {
            query.push(("garment_type", garment.to_string()));
        }
        if let Some(gender) = gender {
            query.push(("gender", gender.as_str().to_string()));
        }
        Ok(self
            .http
            .get("/api/measurement-templates", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single template by id.
    pub async fn get(&self, id: i64) -> ClientResult<Option<MeasurementTemplate>> {
        self.http
            .get(&format!("/api/measurement-templates/{id}"), &[])
            .await
    }

    /// Create a template.
    pub async fn create(
        &self,
        payload: &TemplateCreate,
    ) -> ClientResult<Option<MeasurementTemplate>> {
        self.http.post("/api/measurement-templates/", payload).await
    }

    /// Update a template's metadata or field schema.
    pub async fn update(
        &self,
        id: i64,
        payload: &TemplateUpdate,
    ) -> ClientResult<Option<MeasurementTemplate>> {
        self.http
            .put(&format!("/api/measurement-templates/{id}/"), payload)
            .await
    }

    /// Remove a template.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete(&format!("/api/measurement-templates/{id}/"))
            .await
    }
}
