//! # Endpoint Wrappers
//!
//! One module per backend resource. Each wrapper borrows the shared
//! [`Http`](crate::http::Http) plumbing and exposes typed methods:
//!
//! ```text
//! api/
//! ├── customers.rs       /api/customers
//! ├── templates.rs       /api/measurement-templates
//! ├── measurements.rs    /api/measurements
//! ├── orders.rs          /api/orders (incl. staff assignments)
//! ├── payments.rs        /api/payments
//! ├── deliveries.rs      /api/deliveries
//! ├── samples.rs         /api/samples
//! └── staff.rs           /api/staff
//! ```
//!
//! List endpoints return an empty `Vec` for an empty body; single-item
//! and mutation endpoints return `Option<T>` since the backend may
//! legitimately answer with no payload.

pub mod customers;
pub mod deliveries;
pub mod measurements;
pub mod orders;
pub mod payments;
pub mod samples;
pub mod staff;
pub mod templates;

pub use customers::CustomerApi;
pub use deliveries::DeliveryApi;
pub use measurements::MeasurementApi;
pub use orders::OrderApi;
pub use payments::PaymentApi;
pub use samples::SampleApi;
pub use staff::StaffApi;
pub use templates::TemplateApi;
