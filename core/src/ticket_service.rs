//! Ticket purchase service.
//!
//! A purchase runs as a pipeline:
//!
//! ```text
//! parse/validate ──► aggregate ──► rule check ──► make_payment ──► reserve_seat
//!   InvalidInput                  InvalidPurchase  PaymentFailed   ReservationFailed
//! ```
//!
//! Nothing reaches a collaborator until every validation stage has passed.
//! Payment is awaited before the reservation is issued, so seats are never
//! held for an unpaid purchase.

use crate::config::PurchaseRules;
use crate::error::{PurchaseError, Result};
use crate::metrics;
use crate::pricing::aggregate;
use crate::services::{SeatReservationService, TicketPaymentService};
use crate::types::{AccountId, PurchaseOutcome, PurchaseRequest, TicketTypeRequest};
use serde_json::Value;
use std::sync::Arc;

/// Validates, prices and dispatches ticket purchases.
///
/// Stateless between calls; clone or share it freely.
#[derive(Clone)]
pub struct TicketService {
    payments: Arc<dyn TicketPaymentService>,
    reservations: Arc<dyn SeatReservationService>,
    rules: PurchaseRules,
}

impl std::fmt::Debug for TicketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl TicketService {
    /// Creates a service with the default purchase rules
    #[must_use]
    pub fn new(
        payments: Arc<dyn TicketPaymentService>,
        reservations: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            payments,
            reservations,
            rules: PurchaseRules::default(),
        }
    }

    /// Replaces the purchase rules
    #[must_use]
    pub fn with_rules(mut self, rules: PurchaseRules) -> Self {
        self.rules = rules;
        self
    }

    /// Rules in effect
    #[must_use]
    pub const fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Prices and rule-checks a purchase without calling any collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidPurchase`] if a business rule is broken.
    pub fn quote(&self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let totals = aggregate(request.requests());
        tracing::debug!(
            account_id = request.account_id().value(),
            adults = totals.adults,
            children = totals.children,
            infants = totals.infants,
            "Aggregated ticket requests"
        );

        self.rules.check(&totals)?;

        Ok(PurchaseOutcome {
            account_id: request.account_id(),
            total_price: totals.total_price,
            total_seats: totals.total_seats,
        })
    }

    /// Purchases the tickets: quote, then take payment, then reserve seats.
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::InvalidPurchase`] if a business rule is broken
    /// - [`PurchaseError::PaymentFailed`] if the payment is not taken
    /// - [`PurchaseError::ReservationFailed`] if payment was taken but the
    ///   seats were not reserved
    pub async fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let result = self.run(request).await;
        match &result {
            Ok(outcome) => metrics::record_completed(outcome),
            Err(error) => {
                tracing::warn!(
                    account_id = request.account_id().value(),
                    kind = error.kind(),
                    %error,
                    "Ticket purchase rejected"
                );
                metrics::record_failed(error);
            }
        }
        result
    }

    /// Purchases tickets from a typed account id and request list.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] if `requests` is empty, and
    /// otherwise the errors of [`Self::purchase`].
    pub async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome> {
        let request = PurchaseRequest::new(account_id, requests.to_vec()).inspect_err(|error| {
            tracing::warn!(account_id = account_id.value(), %error, "Empty ticket request list");
            metrics::record_failed(error);
        })?;
        self.purchase(&request).await
    }

    /// Purchases tickets from untyped JSON input.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] if the input is malformed, and
    /// otherwise the errors of [`Self::purchase`].
    pub async fn purchase_json(&self, account_id: &Value, requests: &Value) -> Result<PurchaseOutcome> {
        let request = crate::input::parse_purchase(account_id, requests).inspect_err(|error| {
            tracing::warn!(%error, "Malformed purchase input");
            metrics::record_failed(error);
        })?;
        self.purchase(&request).await
    }

    async fn run(&self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let outcome = self.quote(request)?;
        let account_id = outcome.account_id;

        self.payments
            .make_payment(account_id, outcome.total_price)
            .await
            .map_err(|source| PurchaseError::PaymentFailed { account_id, source })?;

        self.reservations
            .reserve_seat(account_id, outcome.total_seats)
            .await
            .map_err(|source| PurchaseError::ReservationFailed {
                account_id,
                charged: outcome.total_price,
                seats: outcome.total_seats,
                source,
            })?;

        tracing::info!(
            account_id = account_id.value(),
            total_price = outcome.total_price.units(),
            total_seats = outcome.total_seats,
            "Tickets purchased"
        );
        Ok(outcome)
    }
}
