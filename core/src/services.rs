//! External collaborators: payment gateway and seat reservation.
//!
//! Both are opaque third-party services. The traits here are the seams the
//! [`crate::TicketService`] is built against; the `Mock*` implementations
//! stand in for the real services in development and simply log the call.

use crate::error::ServiceError;
use crate::types::{AccountId, Money};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Collaborator result
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Boxed future returned by collaborator calls
pub type ServiceFuture<'a> = Pin<Box<dyn Future<Output = ServiceResult<()>> + Send + 'a>>;

/// Payment gateway
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to `account_id`
    ///
    /// # Errors
    ///
    /// Returns error if the payment is not taken
    fn make_payment(&self, account_id: AccountId, amount: Money) -> ServiceFuture<'_>;
}

/// Seat reservation service
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    ///
    /// # Errors
    ///
    /// Returns error if the seats are not reserved
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> ServiceFuture<'_>;
}

/// Mock payment gateway (always succeeds)
#[derive(Clone, Debug, Default)]
pub struct MockTicketPaymentService;

impl MockTicketPaymentService {
    /// Creates a new mock payment service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for MockTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> ServiceFuture<'_> {
        Box::pin(async move {
            tracing::info!(
                account_id = account_id.value(),
                amount = amount.units(),
                "Mock payment taken"
            );
            Ok(())
        })
    }
}

/// Mock seat reservation service (always succeeds)
#[derive(Clone, Debug, Default)]
pub struct MockSeatReservationService;

impl MockSeatReservationService {
    /// Creates a new mock reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) -> ServiceFuture<'_> {
        Box::pin(async move {
            tracing::info!(account_id = account_id.value(), seats, "Mock seats reserved");
            Ok(())
        })
    }
}
