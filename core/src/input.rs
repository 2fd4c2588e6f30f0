//! Parsing of untyped purchase input.
//!
//! Callers that receive purchases as JSON (HTTP bodies, CLI arguments) go
//! through here. Checks run in a fixed order and stop at the first failure:
//! account id, then the shape of the request list, then each element in
//! request order (count before type).

use crate::error::{PurchaseError, Result};
use crate::types::{AccountId, PurchaseRequest, TicketType, TicketTypeRequest};
use serde::Deserialize;
use serde_json::Value;

const NOT_A_TICKET_REQUEST: &str =
    "ticketTypeRequests must be an array of TicketTypeRequest objects";

/// Wire shape of a single ticket request, before validation.
///
/// Fields stay untyped so a present but mistyped field gets its own message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTicketTypeRequest {
    ticket_type: Value,
    #[serde(alias = "count")]
    no_of_tickets: Value,
}

/// Parses an account id. Only JSON integers `>= 1` are accepted.
///
/// Floats are rejected even when integral: `1.0` is not an account id.
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidInput`] for strings, floats, null or
/// integers below 1.
pub fn parse_account_id(value: &Value) -> Result<AccountId> {
    value
        .as_i64()
        .ok_or_else(|| PurchaseError::invalid_input("accountId must be a positive integer"))
        .and_then(AccountId::new)
}

/// Parses one ticket request object.
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidInput`] if the value is not an object
/// with `ticketType` and `noOfTickets`, the count is not a non-negative
/// JSON integer (floats such as `1.0` included), or the type is not one of
/// the known names.
///
/// Counts too large for a `u32` are accepted here and clamped; the party
/// size rule rejects them later.
pub fn parse_ticket_request(value: &Value) -> Result<TicketTypeRequest> {
    let raw = RawTicketTypeRequest::deserialize(value)
        .map_err(|_| PurchaseError::invalid_input(NOT_A_TICKET_REQUEST))?;

    // Validate the count before the type
    let count = raw
        .no_of_tickets
        .as_u64()
        .ok_or_else(|| PurchaseError::invalid_input("noOfTickets must be >= 0"))?;
    let ticket_type: TicketType = raw
        .ticket_type
        .as_str()
        .ok_or_else(|| PurchaseError::invalid_input("ticketType must be ADULT, CHILD, or INFANT"))?
        .parse()?;

    Ok(TicketTypeRequest::saturating(ticket_type, count))
}

/// Parses a list of ticket requests.
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidInput`] if `value` is not an array, is
/// empty, or contains an invalid element. The first invalid element wins.
pub fn parse_ticket_requests(value: &Value) -> Result<Vec<TicketTypeRequest>> {
    let items = value
        .as_array()
        .ok_or_else(|| PurchaseError::invalid_input("ticketTypeRequests must be an array"))?;

    if items.is_empty() {
        return Err(PurchaseError::invalid_input(
            "ticketTypeRequests must not be empty",
        ));
    }

    items.iter().map(parse_ticket_request).collect()
}

/// Parses an account id and a request list into a [`PurchaseRequest`].
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidInput`] on the first malformed field.
pub fn parse_purchase(account_id: &Value, requests: &Value) -> Result<PurchaseRequest> {
    let account_id = parse_account_id(account_id)?;
    let requests = parse_ticket_requests(requests)?;
    PurchaseRequest::new(account_id, requests)
}

impl PurchaseRequest {
    /// Parses an envelope `{ "accountId": .., "ticketTypeRequests": [..] }`.
    ///
    /// Missing fields are treated as null and rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidInput`] on the first malformed field.
    pub fn from_json(envelope: &Value) -> Result<Self> {
        parse_purchase(
            envelope.get("accountId").unwrap_or(&Value::Null),
            envelope.get("ticketTypeRequests").unwrap_or(&Value::Null),
        )
    }
}
