//! Measurement template and measurement record stores.
//!
//! Templates and recorded measurements live side by side because every
//! measurement is written against a template's field schema; the store
//! runs the field engine's checks before anything reaches the network.

use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;

use darzi_client::ApiClient;
use darzi_core::template::{parse_quick_entry, validate_measurement};
use darzi_core::types::{
    Gender, MeasurementCreate, MeasurementDetails, MeasurementTemplate, TemplateCreate,
    TemplateUpdate,
};
use darzi_core::validation::{validate_display_name, validate_garment_type};

use crate::error::{StoreError, StoreResult};
use crate::slot::Slot;

/// Templates plus recorded measurements.
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    client: ApiClient,
    templates: Arc<Mutex<Slot<MeasurementTemplate>>>,
    measurements: Arc<Mutex<Slot<MeasurementDetails>>>,
}

impl MeasurementStore {
    pub fn new(client: ApiClient) -> Self {
        MeasurementStore {
            client,
            templates: Arc::new(Mutex::new(Slot::new())),
            measurements: Arc::new(Mutex::new(Slot::new())),
        }
    }

    fn lock_templates(&self) -> MutexGuard<'_, Slot<MeasurementTemplate>> {
        self.templates.lock().expect("template slot mutex poisoned")
    }

    fn lock_measurements(&self) -> MutexGuard<'_, Slot<MeasurementDetails>> {
        self.measurements
            .lock()
            .expect("measurement slot mutex poisoned")
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Refetches the template list, optionally narrowed by garment type
    /// and gender.
    pub async fn refresh_templates(
        &self,
        garment_type: Option<&str>,
        gender: Option<Gender>,
    ) -> StoreResult<()> {
        let ticket = self.lock_templates().begin_fetch();
        match self.client.templates().list(garment_type, gender).await {
            Ok(items) => {
                self.lock_templates().apply(ticket, items);
                Ok(())
            }
            Err(err) => {
                self.lock_templates().fail(ticket, err.to_string());
                Err(err.into())
            }
        }
    }

    /// Creates a template. The schema must declare at least one field
    /// and the labels must pass validation before the request is sent.
    pub async fn create_template(&self, payload: TemplateCreate) -> StoreResult<()> {
        validate_garment_type(&payload.garment_type)?;
        validate_display_name(&payload.display_name)?;
        payload.fields.ensure_non_empty()?;
        self.client.templates().create(&payload).await?;
        self.refresh_templates(None, None).await
    }

    /// Updates a template and refetches the list.
    pub async fn update_template(&self, id: i64, payload: TemplateUpdate) -> StoreResult<()> {
        if let Some(garment_type) = &payload.garment_type {
            validate_garment_type(garment_type)?;
        }
        if let Some(display_name) = &payload.display_name {
            validate_display_name(display_name)?;
        }
        if let Some(fields) = &payload.fields {
            fields.ensure_non_empty()?;
        }
        self.client.templates().update(id, &payload).await?;
        self.refresh_templates(None, None).await
    }

    /// Removes a template and refetches the list.
    pub async fn delete_template(&self, id: i64) -> StoreResult<()> {
        self.client.templates().delete(id).await?;
        self.refresh_templates(None, None).await
    }

    /// Read access to the loaded templates.
    pub fn with_templates<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<MeasurementTemplate>) -> R,
    {
        f(&self.lock_templates())
    }

    /// Loaded templates applicable to a customer of the given gender.
    pub fn templates_for_gender(&self, gender: Gender) -> Vec<MeasurementTemplate> {
        self.lock_templates()
            .items()
            .iter()
            .filter(|t| t.matches_gender(gender))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Measurements
    // =========================================================================

    /// Refetches the measurement list, optionally narrowed to one
    /// customer and/or garment type.
    pub async fn refresh_measurements(
        &self,
        customer_id: Option<i64>,
        garment_type: Option<&str>,
    ) -> StoreResult<()> {
        let ticket = self.lock_measurements().begin_fetch();
        match self.client.measurements().list(customer_id, garment_type).await {
            Ok(items) => {
                self.lock_measurements().apply(ticket, items);
                Ok(())
            }
            Err(err) => {
                self.lock_measurements().fail(ticket, err.to_string());
                Err(err.into())
            }
        }
    }

    /// Records a measurement against `template`.
    ///
    /// Every field in the template's schema needs a value > 0; an
    /// incomplete map is rejected with the per-field messages before
    /// any request is sent.
    pub async fn record(
        &self,
        template: &MeasurementTemplate,
        payload: MeasurementCreate,
    ) -> StoreResult<()> {
        let missing = validate_measurement(&payload.values, &template.fields);
        if !missing.is_empty() {
            return Err(StoreError::IncompleteMeasurement { missing });
        }
        let customer_id = payload.customer_id;
        self.client.measurements().create(&payload).await?;
        self.refresh_measurements(Some(customer_id), None).await
    }

    /// Replaces a measurement record, with the same completeness check
    /// as [`record`](Self::record).
    pub async fn update(
        &self,
        id: i64,
        template: &MeasurementTemplate,
        payload: MeasurementCreate,
    ) -> StoreResult<()> {
        let missing = validate_measurement(&payload.values, &template.fields);
        if !missing.is_empty() {
            return Err(StoreError::IncompleteMeasurement { missing });
        }
        let customer_id = payload.customer_id;
        self.client.measurements().update(id, &payload).await?;
        self.refresh_measurements(Some(customer_id), None).await
    }

    /// Removes a measurement record and refetches the list.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client.measurements().delete(id).await?;
        self.refresh_measurements(None, None).await
    }

    /// Parses a comma-separated quick-entry line against a template's
    /// schema, mapping values to field keys positionally.
    pub fn quick_entry(
        &self,
        template: &MeasurementTemplate,
        raw: &str,
    ) -> StoreResult<IndexMap<String, f64>> {
        Ok(parse_quick_entry(raw, &template.fields)?)
    }

    /// Read access to the loaded measurements.
    pub fn with_measurements<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot<MeasurementDetails>) -> R,
    {
        f(&self.lock_measurements())
    }
}

// =============================================================================
// Tests
// =============================================================================
