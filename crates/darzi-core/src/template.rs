//! # Template Field Engine
//!
//! Owns the ordered field schema attached to a measurement template and
//! drives both manual per-field entry and "quick entry" bulk parsing.
//!
//! ## Schema Interpretation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              fields_json → ordered field sequence                       │
//! │                                                                         │
//! │  Wire form (legacy map, reserved "_order" key):                         │
//! │    { "chest": "Chest", "waist": "Waist", "_order": ["waist","chest"] }  │
//! │                                                                         │
//! │  1. "_order" present:                                                   │
//! │     • take listed keys in order (skip "_order" itself, skip keys       │
//! │       with no label entry)                                              │
//! │     • then append label-map keys not listed, in declaration order       │
//! │     → every declared field appears exactly once, ordered ones first     │
//! │                                                                         │
//! │  2. No "_order": declaration order of the label map                     │
//! │     (backward-compatible fallback)                                      │
//! │                                                                         │
//! │  In memory the schema is a tagged structure: an ordered list of        │
//! │  {key, label} pairs. No reserved-key special-casing anywhere past      │
//! │  the serde boundary.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same ordered sequence feeds the manual-entry form and the
//! quick-entry parser, so positional quick-entry values line up with
//! exactly what a human sees.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::TemplateError;

/// The reserved wire key carrying the explicit field ordering.
pub const ORDER_KEY: &str = "_order";

// =============================================================================
// Field Schema
// =============================================================================

/// One measurement field: storage key plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub key: String,
    pub label: String,
}

/// The ordered field schema of a measurement template.
///
/// Always a list of `{key, label}` pairs in display order; the legacy
/// `fields_json` map with its reserved `_order` key exists only on the
/// wire (see the serde impls below).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<FieldDef>,
}

impl FieldSchema {
    /// Builds a schema from `(key, label)` pairs, in the given order.
    ///
    /// Rejects blank keys/labels and duplicate keys.
    pub fn from_pairs<K, L>(pairs: impl IntoIterator<Item = (K, L)>) -> Result<Self, TemplateError>
    where
        K: Into<String>,
        L: Into<String>,
    {
        let mut schema = FieldSchema::default();
        for (key, label) in pairs {
            schema.add_field(key, label)?;
        }
        Ok(schema)
    }

    /// The ordered `(key, label)` sequence.
    ///
    /// Both the manual-entry renderer and the quick-entry parser MUST
    /// use this one view so positions always agree.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The display label for a field key, if declared.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.label.as_str())
    }

    /// Appends a field.
    ///
    /// Rejects blank key/label and a key already present (case-sensitive
    /// exact match) with a structured error.
    pub fn add_field(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), TemplateError> {
        let key = key.into().trim().to_string();
        let label = label.into().trim().to_string();

        if key.is_empty() || label.is_empty() {
            return Err(TemplateError::BlankField);
        }
        if self.fields.iter().any(|f| f.key == key) {
            return Err(TemplateError::DuplicateField { key });
        }

        self.fields.push(FieldDef { key, label });
        Ok(())
    }

    /// Removes the field at `index` (positional removal from the
    /// editable list). Out-of-range is an error, not a panic.
    pub fn remove_field(&mut self, index: usize) -> Result<FieldDef, TemplateError> {
        if index >= self.fields.len() {
            return Err(TemplateError::IndexOutOfRange {
                index,
                len: self.fields.len(),
            });
        }
        Ok(self.fields.remove(index))
    }

    /// A template must declare at least one field before it is saved.
    pub fn ensure_non_empty(&self) -> Result<(), TemplateError> {
        if self.is_empty() {
            return Err(TemplateError::EmptySchema);
        }
        Ok(())
    }

    /// Reconstructs the ordered schema from the wire map.
    fn from_wire(raw: IndexMap<String, Value>) -> Self {
        // Label map in declaration order (the no-_order fallback relies
        // on this); non-string values are not labels and are skipped.
        let mut labels: IndexMap<String, String> = IndexMap::new();
        for (key, value) in &raw {
            if key == ORDER_KEY {
                continue;
            }
            if let Value::String(label) = value {
                labels.insert(key.clone(), label.clone());
            }
        }

        let mut fields: Vec<FieldDef> = Vec::with_capacity(labels.len());
        if let Some(Value::Array(order)) = raw.get(ORDER_KEY) {
            for entry in order {
                let Value::String(key) = entry else { continue };
                // A listed key with no label entry is skipped; shift_remove
                // also guarantees each field appears exactly once.
                if let Some(label) = labels.shift_remove(key) {
                    fields.push(FieldDef {
                        key: key.clone(),
                        label,
                    });
                }
            }
        }

        // Label-map keys absent from _order (or all of them, when no
        // _order was present) keep their declaration order.
        for (key, label) in labels {
            fields.push(FieldDef { key, label });
        }

        FieldSchema { fields }
    }
}

// =============================================================================
// Serde (wire format: legacy fields_json map)
// =============================================================================

/// Emits the label map plus the `_order` array so older readers of
/// `fields_json` keep working.
impl Serialize for FieldSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for field in &self.fields {
            map.serialize_entry(&field.key, &field.label)?;
        }
        let order: Vec<&str> = self.fields.iter().map(|f| f.key.as_str()).collect();
        map.serialize_entry(ORDER_KEY, &order)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(FieldSchema::from_wire(raw))
    }
}

// =============================================================================
// Quick Entry
// =============================================================================

/// Parses the comma-separated quick-entry shorthand against a schema.
///
/// Splits on commas, trims, drops empty tokens, keeps only tokens that
/// parse as finite non-negative numbers (bad tokens are discarded, not
/// errors). If the count of kept values differs from the schema's field
/// count the whole entry fails with a count mismatch naming both
/// counts; otherwise values are zipped positionally onto the ordered
/// field keys.
///
/// ```rust
/// use darzi_core::template::{parse_quick_entry, FieldSchema};
///
/// let schema = FieldSchema::from_pairs([("chest", "Chest"), ("waist", "Waist")]).unwrap();
/// let values = parse_quick_entry("40, 32", &schema).unwrap();
/// assert_eq!(values["chest"], 40.0);
/// assert_eq!(values["waist"], 32.0);
/// ```
pub fn parse_quick_entry(
    raw: &str,
    schema: &FieldSchema,
) -> Result<IndexMap<String, f64>, TemplateError> {
    let values: Vec<f64> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .collect();

    if values.len() != schema.len() {
        return Err(TemplateError::CountMismatch {
            expected: schema.len(),
            actual: values.len(),
        });
    }

    Ok(schema
        .fields()
        .iter()
        .zip(values)
        .map(|(field, value)| (field.key.clone(), value))
        .collect())
}

// =============================================================================
// Measurement Validation
// =============================================================================

/// Checks a measurement value map against its template schema.
///
/// Every declared field requires a value > 0; a missing or non-positive
/// value yields a per-field message built from the display label. An
/// empty result means the measurement is complete.
pub fn validate_measurement(
    values: &IndexMap<String, f64>,
    schema: &FieldSchema,
) -> IndexMap<String, String> {
    let mut errors = IndexMap::new();
    for field in schema.fields() {
        let value = values.get(&field.key).copied().unwrap_or(0.0);
        if !(value > 0.0) {
            errors.insert(field.key.clone(), format!("{} is required", field.label));
        }
    }
    errors
}

// =============================================================================
// Unit Tests
// =============================================================================
