//! # Cinema Tickets Testing
//!
//! Testing utilities for the cinema tickets workspace.
//!
//! This crate provides:
//! - Recording test doubles for the payment and seat reservation services
//! - Property-based testing strategies for ticket requests
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{AccountId, TicketService, TicketType, TicketTypeRequest};
//! use cinema_tickets_testing::mocks::{CollaboratorCall, RecordingCollaborators};
//!
//! # async fn example() {
//! let collaborators = RecordingCollaborators::new();
//! let service = TicketService::new(collaborators.payments(), collaborators.reservations());
//!
//! let _ = service
//!     .purchase_tickets(
//!         AccountId::new(1).unwrap(),
//!         &[TicketTypeRequest::of(TicketType::Adult, 1)],
//!     )
//!     .await;
//!
//! assert_eq!(collaborators.calls().len(), 2);
//! # }
//! ```

/// Recording collaborators for asserting what the service called, and in
/// which order.
pub mod mocks {
    use cinema_tickets_core::{
        AccountId, Money, SeatReservationService, ServiceError, ServiceFuture,
        TicketPaymentService,
    };
    use std::sync::{Arc, Mutex, PoisonError};

    /// A single call made to a collaborator
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CollaboratorCall {
        /// `make_payment(account_id, amount)`
        Payment {
            /// Account charged
            account_id: u64,
            /// Amount charged
            amount: u64,
        },
        /// `reserve_seat(account_id, seats)`
        Reservation {
            /// Account reserving
            account_id: u64,
            /// Seats reserved
            seats: u32,
        },
    }

    #[derive(Debug, Default)]
    struct Shared {
        calls: Mutex<Vec<CollaboratorCall>>,
        payment_failure: Mutex<Option<ServiceError>>,
        reservation_failure: Mutex<Option<ServiceError>>,
    }

    impl Shared {
        fn record(&self, call: CollaboratorCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }

        fn failure(slot: &Mutex<Option<ServiceError>>) -> Option<ServiceError> {
            slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    /// Payment and reservation doubles sharing one ordered call log.
    ///
    /// Calls are recorded even when configured to fail.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingCollaborators {
        shared: Arc<Shared>,
    }

    impl RecordingCollaborators {
        /// Create collaborators that always succeed
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every payment fail with `error`
        #[must_use]
        pub fn failing_payment(self, error: ServiceError) -> Self {
            *self
                .shared
                .payment_failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(error);
            self
        }

        /// Make every reservation fail with `error`
        #[must_use]
        pub fn failing_reservation(self, error: ServiceError) -> Self {
            *self
                .shared
                .reservation_failure
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(error);
            self
        }

        /// Payment service handle
        #[must_use]
        pub fn payments(&self) -> Arc<dyn TicketPaymentService> {
            Arc::new(RecordingPaymentService {
                shared: Arc::clone(&self.shared),
            })
        }

        /// Seat reservation service handle
        #[must_use]
        pub fn reservations(&self) -> Arc<dyn SeatReservationService> {
            Arc::new(RecordingSeatReservationService {
                shared: Arc::clone(&self.shared),
            })
        }

        /// All calls so far, in the order they were made
        #[must_use]
        pub fn calls(&self) -> Vec<CollaboratorCall> {
            self.shared
                .calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Clear the call log
        pub fn clear(&self) {
            self.shared
                .calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    /// Payment double backed by [`RecordingCollaborators`]
    #[derive(Debug)]
    pub struct RecordingPaymentService {
        shared: Arc<Shared>,
    }

    impl TicketPaymentService for RecordingPaymentService {
        fn make_payment(&self, account_id: AccountId, amount: Money) -> ServiceFuture<'_> {
            self.shared.record(CollaboratorCall::Payment {
                account_id: account_id.value(),
                amount: amount.units(),
            });
            let failure = Shared::failure(&self.shared.payment_failure);
            Box::pin(async move { failure.map_or(Ok(()), Err) })
        }
    }

    /// Seat reservation double backed by [`RecordingCollaborators`]
    #[derive(Debug)]
    pub struct RecordingSeatReservationService {
        shared: Arc<Shared>,
    }

    impl SeatReservationService for RecordingSeatReservationService {
        fn reserve_seat(&self, account_id: AccountId, seats: u32) -> ServiceFuture<'_> {
            self.shared.record(CollaboratorCall::Reservation {
                account_id: account_id.value(),
                seats,
            });
            let failure = Shared::failure(&self.shared.reservation_failure);
            Box::pin(async move { failure.map_or(Ok(()), Err) })
        }
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use cinema_tickets_core::{TicketType, TicketTypeRequest};
    use proptest::prelude::*;

    /// Any ticket type
    pub fn ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Adult),
            Just(TicketType::Child),
            Just(TicketType::Infant),
        ]
    }

    /// A ticket request with a count in `0..=max_count`
    pub fn ticket_request(max_count: u32) -> impl Strategy<Value = TicketTypeRequest> {
        (ticket_type(), 0..=max_count)
            .prop_map(|(ticket_type, count)| TicketTypeRequest::of(ticket_type, count))
    }

    /// A non-empty list of ticket requests, not necessarily a valid purchase
    pub fn ticket_requests(
        max_count: u32,
        max_len: usize,
    ) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(ticket_request(max_count), 1..=max_len)
    }

    /// A party that satisfies the default rules, as `(adults, children, infants)`
    pub fn valid_party() -> impl Strategy<Value = (u32, u32, u32)> {
        (1u32..=25)
            .prop_flat_map(|adults| (Just(adults), 0..=(25 - adults)))
            .prop_flat_map(|(adults, children)| {
                let room = 25 - adults - children;
                (Just(adults), Just(children), 0..=room.min(adults * 2))
            })
    }
}
