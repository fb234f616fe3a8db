//! # Validation Module
//!
//! Input validation for Darzi: every rule here runs client-side, before
//! a request is built, and reports structured per-field errors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form (immediate feedback)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation before any request    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API + database constraints                           │
//! │                                                                         │
//! │  This module is pre-validation only; the persistence boundary          │
//! │  remains the source of truth for uniqueness and referential            │
//! │  integrity.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use darzi_core::validation::{validate_phone, validate_quantity};
//!
//! validate_phone("01712345678").unwrap();
//! validate_quantity(2).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{OrderItemCreate, StaffAssignment};
use crate::{MAX_ITEM_QUANTITY, MAX_ORDER_ITEMS};

// =============================================================================
// String Validators
// =============================================================================

/// Maximum length for names (customers, staff, display names).
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for phone numbers.
pub const MAX_PHONE_LEN: usize = 20;

/// Maximum length for garment type labels.
pub const MAX_GARMENT_TYPE_LEN: usize = 100;

fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a customer or staff name: required, at most 200 characters.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// Validates a phone number.
///
/// Required; digits with optional leading `+`, spaces, or hyphens. The
/// shop records local mobile numbers (e.g. `01712345678`) but the
/// format stays permissive.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone, MAX_PHONE_LEN)?;

    let phone = phone.trim();
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, '+' and '-'".to_string(),
        });
    }

    Ok(())
}

/// Validates a garment type label (free-text category).
pub fn validate_garment_type(garment_type: &str) -> ValidationResult<()> {
    validate_required("garment_type", garment_type, MAX_GARMENT_TYPE_LEN)
}

/// Validates a template or sample display name.
pub fn validate_display_name(display_name: &str) -> ValidationResult<()> {
    validate_required("display_name", display_name, MAX_NAME_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity: positive and at most 999.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price: non-negative (zero allowed for complimentary
/// work, e.g. alterations on a prior order).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a payment amount against the order's remaining balance at
/// creation time.
///
/// Client-side pre-validation only: two concurrent payments can still
/// jointly overshoot the total, which the backend does not currently
/// prevent either.
pub fn validate_payment_amount(amount: Money, remaining: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }
    if amount > remaining {
        return Err(ValidationError::ExceedsRemaining { remaining });
    }

    Ok(())
}

/// Validates a delivery date string: required and parsable as
/// `YYYY-MM-DD` (a trailing time component is tolerated).
pub fn validate_delivery_date(date: &str) -> ValidationResult<()> {
    if date.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "delivery_date".to_string(),
        });
    }
    if crate::types::parse_api_date(date).is_none() {
        return Err(ValidationError::InvalidFormat {
            field: "delivery_date".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates an order's line items: at least one, not more than the
/// cap, each with a valid garment type, quantity, and price.
pub fn validate_order_items(items: &[OrderItemCreate]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }
    if items.len() > MAX_ORDER_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_ORDER_ITEMS as i64,
        });
    }

    for item in items {
        validate_garment_type(&item.garment_type)?;
        validate_quantity(item.quantity)?;
        validate_price(item.price)?;
    }

    Ok(())
}

/// Duplicate staff-assignment prevention, applied before the network
/// call: a staff member must not be assigned twice to the same order.
pub fn validate_assignment(staff_id: i64, existing: &[StaffAssignment]) -> ValidationResult<()> {
    if existing.iter().any(|a| a.staff_id == staff_id) {
        return Err(ValidationError::Duplicate {
            field: "staff".to_string(),
            value: staff_id.to_string(),
        });
    }

    Ok(())
}

/// Filters the selectable staff list so already-assigned members cannot
/// be picked at all.
pub fn selectable_staff_ids(all_staff_ids: &[i64], existing: &[StaffAssignment]) -> Vec<i64> {
    all_staff_ids
        .iter()
        .copied()
        .filter(|id| !existing.iter().any(|a| a.staff_id == *id))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
