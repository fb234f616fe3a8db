//! # Domain Aggregator
//!
//! Derives cross-entity figures from the currently loaded collections:
//! order totals, paid/remaining amounts, customer rollups, status
//! buckets, and delivery urgency.
//!
//! ## Design Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Aggregation Rules                                  │
//! │                                                                         │
//! │  For every order O:                                                     │
//! │    total_amount(O)     = Σ (item.price × item.quantity)                 │
//! │    paid_amount(O)      = Σ amount over payments with order_id = O.id    │
//! │    remaining_amount(O) = total_amount(O) − paid_amount(O)               │
//! │                                                                         │
//! │  • Pure functions over supplied collections - no ambient state,        │
//! │    no network, recomputed on demand                                     │
//! │  • Empty (not-yet-fetched) collections are valid input                 │
//! │  • Malformed dates mean "not upcoming / not overdue", never a panic    │
//! │  • Negative remaining = overpayment: displayable, not an error          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payments carry only `order_id`, so reaching a customer's payments
//! always joins through that customer's order set. The caller owns
//! supplying a complete, already-fetched order set; an incomplete one
//! silently under-counts.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{parse_api_date, Customer, OrderDetails, OrderItem, OrderStatus, Payment};

// =============================================================================
// Order-Level Totals
// =============================================================================

/// Total for one order: Σ price × quantity over its line items.
pub fn order_total(items: &[OrderItem]) -> Money {
    items.iter().map(OrderItem::line_total).sum()
}

/// Σ `total_amount` over a set of orders.
pub fn total_orders_amount(orders: &[OrderDetails]) -> Money {
    orders.iter().map(|o| o.total_amount).sum()
}

/// Σ `amount` over a set of payments.
pub fn total_paid(payments: &[Payment]) -> Money {
    payments.iter().map(|p| p.amount).sum()
}

/// Σ `remaining_amount` over a set of orders (the dashboard's
/// outstanding figure).
pub fn total_outstanding(orders: &[OrderDetails]) -> Money {
    orders.iter().map(|o| o.remaining_amount).sum()
}

/// Remaining balance: total − paid.
///
/// May be negative if overpayment occurred; nothing in this layer
/// prevents that, and the result stays displayable.
#[inline]
pub fn remaining(total: Money, paid: Money) -> Money {
    total - paid
}

// =============================================================================
// Customer-Level Joins
// =============================================================================

/// Filters orders belonging to one customer. Preserves the order the
/// API returned; applies no implicit sort.
pub fn orders_for_customer(orders: &[OrderDetails], customer_id: i64) -> Vec<&OrderDetails> {
    orders.iter().filter(|o| o.customer_id == customer_id).collect()
}

/// A customer's payments, joined through that customer's order set.
///
/// Payments carry only `order_id`, so this is the only route from a
/// customer to their payments. If `orders` is stale or incomplete the
/// join under-counts silently; callers must pass the complete fetched
/// order set for the customer.
pub fn payments_for_customer<'a>(
    payments: &'a [Payment],
    orders: &[OrderDetails],
    customer_id: i64,
) -> Vec<&'a Payment> {
    let order_ids: HashSet<i64> = orders
        .iter()
        .filter(|o| o.customer_id == customer_id)
        .map(|o| o.id)
        .collect();

    payments
        .iter()
        .filter(|p| order_ids.contains(&p.order_id))
        .collect()
}

/// The customer-detail rollup: order totals, paid, remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CustomerSummary {
    pub order_count: usize,
    pub payment_count: usize,
    pub total_orders_amount: Money,
    pub total_paid: Money,
    pub total_remaining: Money,
}

impl CustomerSummary {
    /// Computes the rollup for one customer from the full loaded
    /// collections. Pure: calling twice on unchanged input yields
    /// identical results.
    pub fn compute(customer_id: i64, orders: &[OrderDetails], payments: &[Payment]) -> Self {
        let customer_orders = orders_for_customer(orders, customer_id);
        let customer_payments = payments_for_customer(payments, orders, customer_id);

        let total_orders_amount: Money = customer_orders.iter().map(|o| o.total_amount).sum();
        let total_paid: Money = customer_payments.iter().map(|p| p.amount).sum();

        CustomerSummary {
            order_count: customer_orders.len(),
            payment_count: customer_payments.len(),
            total_orders_amount,
            total_paid,
            total_remaining: remaining(total_orders_amount, total_paid),
        }
    }
}

// =============================================================================
// Status Buckets
// =============================================================================

/// Order counts per lifecycle status.
///
/// Unknown status values land in the neutral `unknown` bucket instead
/// of failing the whole aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatusBuckets {
    pub pending: usize,
    pub cutting: usize,
    pub sewing: usize,
    pub ready: usize,
    pub delivered: usize,
    pub unknown: usize,
}

impl StatusBuckets {
    /// The count for one status.
    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Cutting => self.cutting,
            OrderStatus::Sewing => self.sewing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Unknown => self.unknown,
        }
    }

    /// Total orders across all buckets.
    pub fn total(&self) -> usize {
        self.pending + self.cutting + self.sewing + self.ready + self.delivered + self.unknown
    }
}

/// Buckets orders by lifecycle status.
pub fn bucket_by_status(orders: &[OrderDetails]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => buckets.pending += 1,
            OrderStatus::Cutting => buckets.cutting += 1,
            OrderStatus::Sewing => buckets.sewing += 1,
            OrderStatus::Ready => buckets.ready += 1,
            OrderStatus::Delivered => buckets.delivered += 1,
            OrderStatus::Unknown => buckets.unknown += 1,
        }
    }
    buckets
}

// =============================================================================
// Delivery Urgency
// =============================================================================

/// Whether a delivery is overdue: delivery date strictly before `today`
/// (date-only comparison) and the order not yet delivered.
///
/// A malformed date string is "not overdue" - this is a display
/// concern, not a data-integrity check.
pub fn is_overdue(delivery_date: &str, status: OrderStatus, today: NaiveDate) -> bool {
    if status == OrderStatus::Delivered {
        return false;
    }
    match parse_api_date(delivery_date) {
        Some(date) => date < today,
        None => false,
    }
}

/// Undelivered orders due within `[today, today + horizon_days]`,
/// ascending by delivery date, capped at `limit`.
///
/// Orders with malformed delivery dates are excluded.
pub fn upcoming_deliveries(
    orders: &[OrderDetails],
    today: NaiveDate,
    horizon_days: u64,
    limit: usize,
) -> Vec<&OrderDetails> {
    let horizon_end = match today.checked_add_days(Days::new(horizon_days)) {
        Some(end) => end,
        None => return Vec::new(),
    };

    let mut upcoming: Vec<(NaiveDate, &OrderDetails)> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Delivered)
        .filter_map(|o| o.delivery_date_parsed().map(|d| (d, o)))
        .filter(|(d, _)| *d >= today && *d <= horizon_end)
        .collect();

    upcoming.sort_by_key(|(date, order)| (*date, order.id));
    upcoming.into_iter().take(limit).map(|(_, o)| o).collect()
}

// =============================================================================
// Recents (dashboard lists)
// =============================================================================

/// Newest orders first by order date, capped at `limit`. Orders with
/// malformed dates sort last.
pub fn recent_orders(orders: &[OrderDetails], limit: usize) -> Vec<&OrderDetails> {
    let mut sorted: Vec<&OrderDetails> = orders.iter().collect();
    sorted.sort_by(|a, b| {
        cmp_dates_desc(a.order_date_parsed(), b.order_date_parsed()).then(b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}

/// Newest customers first by creation date, capped at `limit`.
pub fn recent_customers(customers: &[Customer], limit: usize) -> Vec<&Customer> {
    let mut sorted: Vec<&Customer> = customers.iter().collect();
    sorted.sort_by(|a, b| {
        cmp_dates_desc(parse_api_date(&a.created_at), parse_api_date(&b.created_at))
            .then(b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}

/// Descending date order with `None` (malformed) last.
fn cmp_dates_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, PaymentType};

    fn order(id: i64, customer_id: i64, status: OrderStatus, delivery_date: &str) -> OrderDetails {
        OrderDetails {
            id,
            customer_id,
            customer_name: format!("Customer {customer_id}"),
            customer_phone: "01700000000".to_string(),
            order_date: "2024-01-01".to_string(),
            delivery_date: delivery_date.to_string(),
            status,
            total_amount: Money::from_major_minor(1300, 0),
            notes: None,
            created_at: "2024-01-01 09:00:00".to_string(),
            items: vec![
                OrderItem::new("blazer", 2, Money::from_major_minor(500, 0)),
                OrderItem::new("pant", 1, Money::from_major_minor(300, 0)),
            ],
            paid_amount: Money::from_major_minor(800, 0),
            remaining_amount: Money::from_major_minor(500, 0),
            assigned_staff: Vec::new(),
        }
    }

    fn payment(id: i64, order_id: i64, amount_taka: i64) -> Payment {
        Payment {
            id,
            order_id,
            amount: Money::from_major_minor(amount_taka, 0),
            payment_type: PaymentType::Partial,
            payment_method: PaymentMethod::Cash,
            date: "2024-01-02".to_string(),
            notes: None,
            created_at: "2024-01-02 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_order_total_sums_line_items() {
        // items [(500, qty 2), (300, qty 1)] => 1300
        let items = vec![
            OrderItem::new("blazer", 2, Money::from_major_minor(500, 0)),
            OrderItem::new("pant", 1, Money::from_major_minor(300, 0)),
        ];
        assert_eq!(order_total(&items), Money::from_major_minor(1300, 0));
    }

    #[test]
    fn test_remaining_consistency() {
        // total 1300, paid 800 => remaining 500
        let total = Money::from_major_minor(1300, 0);
        let paid = Money::from_major_minor(800, 0);
        assert_eq!(remaining(total, paid), Money::from_major_minor(500, 0));
    }

    #[test]
    fn test_remaining_can_go_negative_on_overpayment() {
        let total = Money::from_major_minor(1000, 0);
        let paid = Money::from_major_minor(1200, 0);
        assert_eq!(remaining(total, paid), Money::from_major_minor(-200, 0));
    }

    #[test]
    fn test_payments_join_goes_through_customer_orders() {
        let orders = vec![
            order(1, 10, OrderStatus::Pending, "2024-01-10"),
            order(2, 10, OrderStatus::Sewing, "2024-01-12"),
            order(3, 99, OrderStatus::Pending, "2024-01-11"),
        ];
        let payments = vec![
            payment(1, 1, 300),
            payment(2, 2, 500),
            payment(3, 3, 900), // other customer's order
            payment(4, 42, 50), // order not in the loaded set: under-counted
        ];

        let joined = payments_for_customer(&payments, &orders, 10);
        let ids: Vec<i64> = joined.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_customer_summary() {
        let orders = vec![
            order(1, 10, OrderStatus::Pending, "2024-01-10"),
            order(3, 99, OrderStatus::Pending, "2024-01-11"),
        ];
        let payments = vec![payment(1, 1, 800), payment(2, 3, 100)];

        let summary = CustomerSummary::compute(10, &orders, &payments);
        assert_eq!(summary.order_count, 1);
        assert_eq!(summary.payment_count, 1);
        assert_eq!(summary.total_orders_amount, Money::from_major_minor(1300, 0));
        assert_eq!(summary.total_paid, Money::from_major_minor(800, 0));
        assert_eq!(summary.total_remaining, Money::from_major_minor(500, 0));
    }

    #[test]
    fn test_bucket_by_status() {
        // [pending, pending, cutting, delivered]
        let orders = vec![
            order(1, 1, OrderStatus::Pending, "2024-01-10"),
            order(2, 1, OrderStatus::Pending, "2024-01-10"),
            order(3, 1, OrderStatus::Cutting, "2024-01-10"),
            order(4, 1, OrderStatus::Delivered, "2024-01-10"),
        ];
        let buckets = bucket_by_status(&orders);
        assert_eq!(buckets.pending, 2);
        assert_eq!(buckets.cutting, 1);
        assert_eq!(buckets.sewing, 0);
        assert_eq!(buckets.ready, 0);
        assert_eq!(buckets.delivered, 1);
        assert_eq!(buckets.unknown, 0);
        assert_eq!(buckets.total(), 4);
    }

    #[test]
    fn test_unknown_status_lands_in_neutral_bucket() {
        let orders = vec![order(1, 1, OrderStatus::Unknown, "2024-01-10")];
        assert_eq!(bucket_by_status(&orders).unknown, 1);
    }

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

        // Yesterday + not delivered => overdue
        assert!(is_overdue("2024-01-09", OrderStatus::Cutting, today));
        // Same date + delivered => not overdue
        assert!(!is_overdue("2024-01-09", OrderStatus::Delivered, today));
        // Due today is not overdue (strictly-before comparison)
        assert!(!is_overdue("2024-01-10", OrderStatus::Pending, today));
        // Malformed date never crashes and is never overdue
        assert!(!is_overdue("eventually", OrderStatus::Pending, today));
    }

    #[test]
    fn test_upcoming_deliveries_window_sort_and_cap() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let orders = vec![
            order(1, 1, OrderStatus::Pending, "2024-01-15"),
            order(2, 1, OrderStatus::Sewing, "2024-01-11"),
            order(3, 1, OrderStatus::Delivered, "2024-01-12"), // delivered: excluded
            order(4, 1, OrderStatus::Ready, "2024-01-09"),     // past: excluded
            order(5, 1, OrderStatus::Pending, "2024-01-25"),   // beyond horizon
            order(6, 1, OrderStatus::Pending, "???"),          // malformed: excluded
            order(7, 1, OrderStatus::Pending, "2024-01-10"),   // due today: included
        ];

        let upcoming = upcoming_deliveries(&orders, today, 7, 10);
        let ids: Vec<i64> = upcoming.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![7, 2, 1]);

        let capped = upcoming_deliveries(&orders, today, 7, 2);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let orders = vec![
            order(1, 10, OrderStatus::Pending, "2024-01-10"),
            order(2, 10, OrderStatus::Cutting, "2024-01-12"),
        ];
        let payments = vec![payment(1, 1, 300)];

        let first = CustomerSummary::compute(10, &orders, &payments);
        let second = CustomerSummary::compute(10, &orders, &payments);
        assert_eq!(first, second);
        assert_eq!(bucket_by_status(&orders), bucket_by_status(&orders));
    }

    #[test]
    fn test_empty_collections_are_valid_input() {
        let summary = CustomerSummary::compute(1, &[], &[]);
        assert_eq!(summary.total_remaining, Money::zero());
        assert!(upcoming_deliveries(&[], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 7, 5)
            .is_empty());
        assert_eq!(total_outstanding(&[]), Money::zero());
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut o1 = order(1, 1, OrderStatus::Pending, "2024-01-10");
        o1.order_date = "2024-01-03".to_string();
        let mut o2 = order(2, 1, OrderStatus::Pending, "2024-01-10");
        o2.order_date = "2024-01-07".to_string();
        let mut o3 = order(3, 1, OrderStatus::Pending, "2024-01-10");
        o3.order_date = "not a date".to_string();

        let orders = vec![o1, o2, o3];
        let recent = recent_orders(&orders, 2);
        let ids: Vec<i64> = recent.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
