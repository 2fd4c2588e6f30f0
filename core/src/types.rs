//! Domain types for ticket purchases.
//!
//! Every value here is constructed through a validating factory, so an
//! `AccountId`, `TicketTypeRequest` or `PurchaseRequest` that exists is
//! already well-formed. Raw, untyped input is handled by [`crate::input`].

use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Account the purchase is charged to. Always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId`, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] if `value < 1`.
    pub fn new(value: i64) -> Result<Self, PurchaseError> {
        u64::try_from(value)
            .ok()
            .filter(|id| *id >= 1)
            .map(Self)
            .ok_or_else(|| PurchaseError::invalid_input("accountId must be a positive integer"))
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Currency-agnostic amount in whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` amount from units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a ticket count, saturating at `u64::MAX`
    #[must_use]
    pub const fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Adds two amounts, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket types
// ============================================================================

/// Kind of ticket being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket: priced, occupies a seat
    Adult,
    /// Child ticket: priced, occupies a seat
    Child,
    /// Infant ticket: free, sits on an adult's lap
    Infant,
}

impl TicketType {
    /// All ticket types, in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of a single ticket of this type
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_units(25),
            Self::Child => Money::from_units(15),
            Self::Infant => Money::ZERO,
        }
    }

    /// Whether a ticket of this type needs a reserved seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        matches!(self, Self::Adult | Self::Child)
    }

    /// Wire name (`ADULT`, `CHILD`, `INFANT`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(PurchaseError::invalid_input(
                "ticketType must be ADULT, CHILD, or INFANT",
            )),
        }
    }
}

/// Request for `count` tickets of one type.
///
/// Immutable once built. Several requests for the same type may appear in
/// one purchase; their counts are summed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    #[serde(rename = "noOfTickets")]
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a ticket request.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] if `count` is negative.
    pub fn new(ticket_type: TicketType, count: i64) -> Result<Self, PurchaseError> {
        if count < 0 {
            return Err(PurchaseError::invalid_input("noOfTickets must be >= 0"));
        }
        Ok(Self::saturating(ticket_type, count.unsigned_abs()))
    }

    /// Creates a request from an unsigned count.
    ///
    /// Counts above `u32::MAX` are clamped to it; such a party is far past
    /// any size limit and is rejected as an invalid purchase.
    #[must_use]
    pub fn saturating(ticket_type: TicketType, count: u64) -> Self {
        Self {
            ticket_type,
            count: u32::try_from(count).unwrap_or(u32::MAX),
        }
    }

    /// Shorthand for an infallible request with an unsigned count
    #[must_use]
    pub const fn of(ticket_type: TicketType, count: u32) -> Self {
        Self { ticket_type, count }
    }

    /// Ticket type requested
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Number of tickets requested
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

// ============================================================================
// Purchase
// ============================================================================

/// A validated purchase: an account and a non-empty list of ticket requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    account_id: AccountId,
    ticket_type_requests: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    /// Creates a purchase request.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] if `requests` is empty.
    pub fn new(
        account_id: AccountId,
        requests: Vec<TicketTypeRequest>,
    ) -> Result<Self, PurchaseError> {
        if requests.is_empty() {
            return Err(PurchaseError::invalid_input(
                "ticketTypeRequests must not be empty",
            ));
        }
        Ok(Self {
            account_id,
            ticket_type_requests: requests,
        })
    }

    /// Account to charge
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Ticket requests, in caller order
    #[must_use]
    pub fn requests(&self) -> &[TicketTypeRequest] {
        &self.ticket_type_requests
    }
}

/// Result of a successful purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOutcome {
    /// Account charged
    pub account_id: AccountId,
    /// Amount charged
    pub total_price: Money,
    /// Seats reserved (infants excluded)
    pub total_seats: u32,
}
