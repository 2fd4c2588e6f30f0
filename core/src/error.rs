//! Error types for ticket purchases

use crate::types::{AccountId, Money};
use thiserror::Error;

/// Failure reported by an external collaborator (payment gateway or seat
/// reservation service).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The collaborator refused the request
    #[error("declined: {reason}")]
    Declined {
        /// Reason given by the collaborator
        reason: String,
    },

    /// The collaborator could not be reached
    #[error("service unavailable: {reason}")]
    Unavailable {
        /// Transport or availability detail
        reason: String,
    },

    /// The collaborator did not answer in time
    #[error("timed out")]
    Timeout,
}

/// Errors returned by [`crate::TicketService`].
///
/// `InvalidInput` and `InvalidPurchase` come from validation and are raised
/// before any collaborator is called. Their `Display` text is the bare
/// message so callers can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The request is malformed: bad account id, empty or non-list request
    /// collection, negative or non-integer count, unknown ticket type.
    #[error("{0}")]
    InvalidInput(String),

    /// The request is well-formed but breaks a purchase rule.
    #[error("{0}")]
    InvalidPurchase(String),

    /// Payment was not taken; no seats were reserved.
    #[error("Payment failed for account {account_id}: {source}")]
    PaymentFailed {
        /// Account being charged
        account_id: AccountId,
        /// Collaborator failure
        #[source]
        source: ServiceError,
    },

    /// Payment was taken but the seats could not be reserved. No refund is
    /// attempted; `charged` tells the host how much to compensate.
    #[error("Seat reservation failed for account {account_id} after charging {charged}: {source}")]
    ReservationFailed {
        /// Account that was charged
        account_id: AccountId,
        /// Amount already charged
        charged: Money,
        /// Seats that could not be reserved
        seats: u32,
        /// Collaborator failure
        #[source]
        source: ServiceError,
    },
}

impl PurchaseError {
    /// Builds an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Builds an `InvalidPurchase` error
    pub fn invalid_purchase(message: impl Into<String>) -> Self {
        Self::InvalidPurchase(message.into())
    }

    /// Whether this is a malformed-request error
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Whether this is a business-rule violation
    #[must_use]
    pub const fn is_invalid_purchase(&self) -> bool {
        matches!(self, Self::InvalidPurchase(_))
    }

    /// Short label used for metrics and logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidPurchase(_) => "invalid_purchase",
            Self::PaymentFailed { .. } => "payment_failed",
            Self::ReservationFailed { .. } => "reservation_failed",
        }
    }
}

/// Result type for purchase operations
pub type Result<T> = std::result::Result<T, PurchaseError>;
