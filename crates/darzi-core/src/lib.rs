//! # darzi-core: Pure Business Logic for Darzi
//!
//! This crate is the **heart** of Darzi, a management system for a small
//! tailoring shop. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Darzi Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Browser SPA)                       │   │
//! │  │   Dashboard ──► Customers ──► Orders ──► Payments ──► Delivery  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ts-rs bindings                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    darzi-store                                  │   │
//! │  │     collection slots, fetch guards, screen views                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ darzi-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ aggregate │  │ template  │  │   │
//! │  │   │  Customer │  │   Money   │  │  rollups  │  │  fields   │  │   │
//! │  │   │   Order   │  │  ৳ paisa  │  │  buckets  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 darzi-client (REST API client)                  │   │
//! │  │        HTTP calls to the shop backend, error extraction         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Order, Payment, Delivery, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`aggregate`] - Cross-entity derived figures (totals, buckets, overdue)
//! - [`template`] - Measurement template field schemas and quick entry
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paisa (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use darzi_core::money::Money;
//! use darzi_core::types::OrderItem;
//! use darzi_core::aggregate::order_total;
//!
//! let items = vec![
//!     OrderItem::new("blazer", 2, Money::from_major_minor(500, 0)),
//!     OrderItem::new("pant", 1, Money::from_major_minor(300, 0)),
//! ];
//!
//! // total = 500×2 + 300×1 = 1300.00
//! assert_eq!(order_total(&items), Money::from_major_minor(1300, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod money;
pub mod template;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use darzi_core::Money` instead of
// `use darzi_core::money::Money`

pub use error::{CoreError, TemplateError, ValidationError};
pub use money::Money;
pub use template::{FieldDef, FieldSchema};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single order.
///
/// Prevents runaway orders and keeps order forms renderable.
pub const MAX_ORDER_ITEMS: usize = 50;

/// Maximum quantity of a single garment line.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Default horizon for the dashboard's upcoming-deliveries list, in days.
pub const UPCOMING_HORIZON_DAYS: u64 = 7;
