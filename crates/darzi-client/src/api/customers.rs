//! Customer endpoints.

use darzi_core::types::{Customer, CustomerCreate, CustomerUpdate};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/customers`.
#[derive(Debug)]
pub struct CustomerApi<'a> {
    http: &'a Http,
}

impl<'a> CustomerApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// All customers, optionally filtered by a name/phone search term.
    pub async fn list(&self, search: Option<&str>) -> ClientResult<Vec<Customer>> {
        let mut query = Vec::new();
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }
        Ok(self
            .http
            .get("/api/customers", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single customer by id.
    pub async fn get(&self, id: i64) -> ClientResult<Option<Customer>> {
        self.http.get(&format!("/api/customers/{id}"), &[]).await
    }

    /// Register a new customer.
    pub async fn create(&self, payload: &CustomerCreate) -> ClientResult<Option<Customer>> {
        self.http.post("/api/customers/", payload).await
    }

    /// Update an existing customer. Only the fields present in the
    /// payload change.
    pub async fn update(
        &self,
        id: i64,
        payload: &CustomerUpdate,
    ) -> ClientResult<Option<Customer>> {
        self.http.put(&format!("/api/customers/{id}/"), payload).await
    }

    /// Remove a customer.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/customers/{id}/")).await
    }
}
