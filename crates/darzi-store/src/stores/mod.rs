//! # Typed Stores
//!
//! One store per fetched collection. Every store follows the same
//! shape:
//!
//! - a [`Slot`](crate::slot::Slot) behind `Arc<Mutex<_>>`, read through
//!   a `with_*` accessor that takes a closure (the lock is never held
//!   across an await point),
//! - `refresh()` methods that fetch through `darzi-client` and install
//!   the result only if no newer fetch superseded them,
//! - mutations that validate locally first, send the write, and then
//!   refetch the affected collection wholesale instead of patching it
//!   in place.
//!
//! The backend stays the source of truth; the stores never invent
//! derived fields a refetch would compute differently.

pub mod customers;
pub mod deliveries;
pub mod measurements;
pub mod orders;
pub mod payments;
pub mod samples;
pub mod staff;

pub use customers::CustomerStore;
pub use deliveries::DeliveryStore;
pub use measurements::MeasurementStore;
pub use orders::OrderStore;
pub use payments::PaymentStore;
pub use samples::SampleStore;
pub use staff::StaffStore;
