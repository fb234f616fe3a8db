//! # Screen Views
//!
//! Precomputed render models for the two aggregation-heavy screens.
//! Each view is computed from explicitly passed collections, so a
//! partially loaded application (some slots still empty) degrades to
//! zeros and empty lists instead of failing.
//!
//! Recomputing a view over unchanged collections yields an identical
//! view; nothing here mutates or caches.

use chrono::NaiveDate;
use serde::Serialize;

use darzi_core::aggregate::{
    bucket_by_status, orders_for_customer, payments_for_customer, recent_customers, recent_orders,
    total_outstanding, total_paid, upcoming_deliveries, CustomerSummary, StatusBuckets,
};
use darzi_core::types::{Customer, OrderDetails, Payment};
use darzi_core::{Money, UPCOMING_HORIZON_DAYS};

/// List length for the dashboard's recent/upcoming cards.
pub const DASHBOARD_LIST_LIMIT: usize = 5;

// =============================================================================
// Dashboard
// =============================================================================

/// Everything the dashboard renders, computed in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub customer_count: usize,
    pub order_count: usize,
    /// Order counts per lifecycle status.
    pub status: StatusBuckets,
    /// Σ of all recorded payments.
    pub total_revenue: Money,
    /// Σ of remaining balances across all orders.
    pub outstanding: Money,
    /// Newest orders first, capped at [`DASHBOARD_LIST_LIMIT`].
    pub recent_orders: Vec<OrderDetails>,
    /// Newest customers first, capped at [`DASHBOARD_LIST_LIMIT`].
    pub recent_customers: Vec<Customer>,
    /// Undelivered orders due within the next
    /// [`UPCOMING_HORIZON_DAYS`] days, soonest first.
    pub upcoming_deliveries: Vec<OrderDetails>,
}

impl DashboardView {
    /// Computes the dashboard from the loaded collections as of
    /// `today`.
    pub fn compute(
        customers: &[Customer],
        orders: &[OrderDetails],
        payments: &[Payment],
        today: NaiveDate,
    ) -> Self {
        DashboardView {
            customer_count: customers.len(),
            order_count: orders.len(),
            status: bucket_by_status(orders),
            total_revenue: total_paid(payments),
            outstanding: total_outstanding(orders),
            recent_orders: recent_orders(orders, DASHBOARD_LIST_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            recent_customers: recent_customers(customers, DASHBOARD_LIST_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            upcoming_deliveries: upcoming_deliveries(
                orders,
                today,
                UPCOMING_HORIZON_DAYS,
                DASHBOARD_LIST_LIMIT,
            )
            .into_iter()
            .cloned()
            .collect(),
        }
    }
}

// =============================================================================
// Customer Detail
// =============================================================================

/// The customer-detail screen: one customer, their orders, the
/// payments that belong to those orders, and the money rollup.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub customer: Customer,
    pub orders: Vec<OrderDetails>,
    /// Payments reached through the customer's order set; payments
    /// carry no customer id of their own.
    pub payments: Vec<Payment>,
    pub summary: CustomerSummary,
}

impl CustomerView {
    /// Computes the detail screen for `customer` from the loaded
    /// collections.
    pub fn compute(customer: Customer, orders: &[OrderDetails], payments: &[Payment]) -> Self {
        let customer_orders: Vec<OrderDetails> = orders_for_customer(orders, customer.id)
            .into_iter()
            .cloned()
            .collect();
        let customer_payments: Vec<Payment> =
            payments_for_customer(payments, orders, customer.id)
                .into_iter()
                .cloned()
                .collect();
        let summary = CustomerSummary::compute(customer.id, orders, payments);

        CustomerView {
            customer,
            orders: customer_orders,
            payments: customer_payments,
            summary,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
