//! Business metrics for ticket purchases.
//!
//! # Exported Metrics
//!
//! - `cinema_tickets_purchases_total{outcome}` - Purchase attempts by outcome
//!   (completed, `invalid_input`, `invalid_purchase`, `payment_failed`,
//!   `reservation_failed`)
//! - `cinema_tickets_revenue_units_total` - Amount charged
//! - `cinema_tickets_seats_reserved_total` - Seats reserved

use crate::error::PurchaseError;
use crate::types::PurchaseOutcome;
use metrics::{counter, describe_counter};

const PURCHASES_TOTAL: &str = "cinema_tickets_purchases_total";
const REVENUE_UNITS_TOTAL: &str = "cinema_tickets_revenue_units_total";
const SEATS_RESERVED_TOTAL: &str = "cinema_tickets_seats_reserved_total";

/// Register metric descriptions.
///
/// Call once at startup, before any purchase is processed.
pub fn register_purchase_metrics() {
    describe_counter!(
        PURCHASES_TOTAL,
        "Total number of purchase attempts by outcome"
    );
    describe_counter!(
        REVENUE_UNITS_TOTAL,
        "Total amount charged for completed purchases"
    );
    describe_counter!(
        SEATS_RESERVED_TOTAL,
        "Total number of seats reserved for completed purchases"
    );

    tracing::debug!("Purchase metrics registered");
}

/// Record a completed purchase
pub fn record_completed(outcome: &PurchaseOutcome) {
    counter!(PURCHASES_TOTAL, "outcome" => "completed").increment(1);
    counter!(REVENUE_UNITS_TOTAL).increment(outcome.total_price.units());
    counter!(SEATS_RESERVED_TOTAL).increment(u64::from(outcome.total_seats));
}

/// Record a failed purchase
pub fn record_failed(error: &PurchaseError) {
    counter!(PURCHASES_TOTAL, "outcome" => error.kind()).increment(1);
}
