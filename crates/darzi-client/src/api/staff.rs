//! Staff endpoints.

use darzi_core::types::{StaffCreate, StaffMember, StaffRole, StaffUpdate};

use crate::error::ClientResult;
use crate::http::Http;

/// Typed access to `/api/staff`.
#[derive(Debug)]
pub struct StaffApi<'a> {
    http: &'a Http,
}

impl<'a> StaffApi<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Staff members, optionally narrowed to one role.
    pub async fn list(&self, role: Option<StaffRole>) -> ClientResult<Vec<StaffMember>> {
        let mut query = Vec::new();
        if let Some(role) = role {
            query.push(("role", role.as_str().to_string()));
        }
        Ok(self
            .http
            .get("/api/staff", &query)
            .await?
            .unwrap_or_default())
    }

    /// A single staff member by id.
    pub async fn get(&self, id: i64) -> ClientResult<Option<StaffMember>> {
        self.http.get(&format!("/api/staff/{id}"), &[]).await
    }

    /// Register a staff member.
    pub async fn create(&self, payload: &StaffCreate) -> ClientResult<Option<StaffMember>> {
        self.http.post("/api/staff/", payload).await
    }

    /// Update a staff member.
    pub async fn update(&self, id: i64, payload: &StaffUpdate) -> ClientResult<Option<StaffMember>> {
        self.http.put(&format!("/api/staff/{id}/"), payload).await
    }

    /// Remove a staff member.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/api/staff/{id}/")).await
    }
}
