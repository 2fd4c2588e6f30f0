//! # Cinema Tickets Core
//!
//! Validation, pricing and dispatch of ticket purchases for a single account.
//!
//! A purchase is a list of [`TicketTypeRequest`]s (ADULT, CHILD, INFANT and a
//! count). The [`TicketService`] folds them into a total price and seat
//! count, enforces the purchase rules, then charges the account and reserves
//! the seats through injected collaborators.
//!
//! ## Pricing
//!
//! | Type   | Price | Seat |
//! |--------|-------|------|
//! | ADULT  | 25    | yes  |
//! | CHILD  | 15    | yes  |
//! | INFANT | 0     | no   |
//!
//! ## Rules
//!
//! - At least one ADULT ticket
//! - At most 25 tickets per purchase
//! - At most 2 INFANT tickets per ADULT ticket
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{
//!     AccountId, MockSeatReservationService, MockTicketPaymentService, TicketService,
//!     TicketType, TicketTypeRequest,
//! };
//!
//! # async fn example() -> Result<(), cinema_tickets_core::PurchaseError> {
//! let service = TicketService::new(
//!     MockTicketPaymentService::shared(),
//!     MockSeatReservationService::shared(),
//! );
//!
//! let outcome = service
//!     .purchase_tickets(
//!         AccountId::new(1)?,
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 2)?,
//!             TicketTypeRequest::new(TicketType::Child, 3)?,
//!             TicketTypeRequest::new(TicketType::Infant, 1)?,
//!         ],
//!     )
//!     .await?;
//!
//! assert_eq!(outcome.total_price.units(), 95);
//! assert_eq!(outcome.total_seats, 5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod pricing;
pub mod rules;
pub mod services;
pub mod ticket_service;
pub mod types;

pub use config::{Config, PurchaseRules};
pub use error::{PurchaseError, ServiceError};
pub use pricing::{TicketTotals, aggregate};
pub use services::{
    MockSeatReservationService, MockTicketPaymentService, SeatReservationService,
    ServiceFuture, ServiceResult, TicketPaymentService,
};
pub use ticket_service::TicketService;
pub use types::{
    AccountId, Money, PurchaseOutcome, PurchaseRequest, TicketType, TicketTypeRequest,
};
