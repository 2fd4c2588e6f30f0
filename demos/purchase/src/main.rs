//! Ticket purchase driver
//!
//! Runs one purchase against the mock payment and seat reservation services
//! and reports the result.
//!
//! # Usage
//!
//! ```bash
//! # Fixed party: 2 adults, 3 children, 2 infants on account 1
//! cargo run --bin purchase
//!
//! # Custom purchase
//! cargo run --bin purchase -- '{"accountId": 7, "ticketTypeRequests": [{"ticketType": "ADULT", "noOfTickets": 2}]}'
//! ```

use cinema_tickets_core::metrics::register_purchase_metrics;
use cinema_tickets_core::{
    AccountId, Config, MockSeatReservationService, MockTicketPaymentService, PurchaseError,
    PurchaseOutcome, PurchaseRequest, TicketService, TicketType, TicketTypeRequest,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn default_purchase() -> Result<PurchaseRequest, PurchaseError> {
    PurchaseRequest::new(
        AccountId::new(1)?,
        vec![
            TicketTypeRequest::new(TicketType::Adult, 2)?,
            TicketTypeRequest::new(TicketType::Child, 3)?,
            TicketTypeRequest::new(TicketType::Infant, 2)?,
        ],
    )
}

fn purchase_from_args() -> Result<PurchaseRequest, PurchaseError> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let envelope: serde_json::Value = serde_json::from_str(&arg)
                .map_err(|e| PurchaseError::invalid_input(format!("purchase is not valid JSON: {e}")))?;
            PurchaseRequest::from_json(&envelope)
        }
        None => default_purchase(),
    }
}

async fn run(service: &TicketService) -> Result<PurchaseOutcome, PurchaseError> {
    let request = purchase_from_args()?;
    service.purchase(&request).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!(rules = ?config.rules, "Configuration loaded");
    register_purchase_metrics();

    let service = TicketService::new(
        MockTicketPaymentService::shared(),
        MockSeatReservationService::shared(),
    )
    .with_rules(config.rules);

    match run(&service).await {
        Ok(outcome) => {
            println!(
                "Tickets purchased successfully: account {}, total {}, seats {}",
                outcome.account_id, outcome.total_price, outcome.total_seats
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error purchasing tickets: {error}");
            ExitCode::FAILURE
        }
    }
}
