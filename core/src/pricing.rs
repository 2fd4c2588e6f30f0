//! Aggregation of ticket requests into totals.

use crate::types::{Money, TicketType, TicketTypeRequest};
use serde::Serialize;

/// Totals for a party, folded from its ticket requests.
///
/// Independent of request order: only the summed count per type matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TicketTotals {
    /// Adult tickets
    pub adults: u32,
    /// Child tickets
    pub children: u32,
    /// Infant tickets
    pub infants: u32,
    /// Tickets of all types
    pub total_tickets: u32,
    /// Seats to reserve (adults and children)
    pub total_seats: u32,
    /// Amount to charge
    pub total_price: Money,
}

impl TicketTotals {
    /// Adds one request to the running totals
    #[must_use]
    pub fn add(mut self, request: &TicketTypeRequest) -> Self {
        let count = request.count();
        let ticket_type = request.ticket_type();

        match ticket_type {
            TicketType::Adult => self.adults = self.adults.saturating_add(count),
            TicketType::Child => self.children = self.children.saturating_add(count),
            TicketType::Infant => self.infants = self.infants.saturating_add(count),
        }
        self.total_tickets = self.total_tickets.saturating_add(count);
        if ticket_type.occupies_seat() {
            self.total_seats = self.total_seats.saturating_add(count);
        }
        self.total_price = self
            .total_price
            .saturating_add(ticket_type.unit_price().times(u64::from(count)));
        self
    }
}

/// Folds ticket requests into [`TicketTotals`].
#[must_use]
pub fn aggregate(requests: &[TicketTypeRequest]) -> TicketTotals {
    requests.iter().fold(TicketTotals::default(), TicketTotals::add)
}
