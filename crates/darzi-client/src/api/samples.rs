//! Sample gallery endpoints.

use darzi_core::types::{Sample, SampleCreate, SampleUpdate};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/samples`.
#[derive(Debug)]
pub struct SampleApi<'a> {
    http: &'a Http,
}

impl<'a> SampleApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Gallery samples, optionally narrowed by garment type or a title
    /// search term.
    pub async fn list(
        &self,
        garment_type: Option<&str>,
        search: Option<&str>,
    ) -> ClientResult<Vec<Sample>> {
        let mut query = Vec::new();
        if let Some(garment) = garment_type {
            query.push(("garment_type", garment.to_string()));
        }
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        Ok(self
            .http
            .get("/api/samples", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single sample with its image gallery.
    pub async fn get(&self, id: i64) -> ClientResult<Option<Sample>> {
        self.http.get(&format!("/api/samples/{id}"), &[]).await
    }

    /// Add a sample to the gallery.
    pub async fn create(&self, payload: &SampleCreate) -> ClientResult<Option<Sample>> {
        self.http.post("/api/samples/", payload).await
    }

    /// Update a sample. Sending `images` replaces the whole gallery in
    /// the given order.
    pub async fn update(&self, id: i64, payload: &SampleUpdate) -> ClientResult<Option<Sample>> {
        self.http.put(&format!("/api/samples/{id}/"), payload).await
    }

    /// Remove a sample and its images.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/samples/{id}/")).await
    }
}
