//! End-to-end purchase scenarios against recording collaborators.
//!
//! Run with: `cargo test -p cinema-tickets-testing --test purchase_scenarios`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cinema_tickets_core::{
    AccountId, Money, PurchaseError, PurchaseRequest, PurchaseRules, ServiceError, TicketService,
    TicketType, TicketTypeRequest,
};
use cinema_tickets_testing::mocks::{CollaboratorCall, RecordingCollaborators};
use serde_json::json;

fn service(collaborators: &RecordingCollaborators) -> TicketService {
    TicketService::new(collaborators.payments(), collaborators.reservations())
}

fn account(id: i64) -> AccountId {
    AccountId::new(id).expect("valid account id")
}

fn req(ticket_type: TicketType, count: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(ticket_type, count).expect("valid ticket request")
}

/// Mixed party is priced, charged, then seated
#[tokio::test]
async fn test_mixed_party_is_charged_then_seated() {
    let collaborators = RecordingCollaborators::new();

    let outcome = service(&collaborators)
        .purchase_tickets(
            account(1),
            &[
                req(TicketType::Adult, 2),
                req(TicketType::Child, 3),
                req(TicketType::Infant, 1),
            ],
        )
        .await
        .unwrap();

    assert_eq!(outcome.total_price, Money::from_units(95));
    assert_eq!(outcome.total_seats, 5);
    assert_eq!(
        collaborators.calls(),
        vec![
            CollaboratorCall::Payment { account_id: 1, amount: 95 },
            CollaboratorCall::Reservation { account_id: 1, seats: 5 },
        ]
    );
}

/// Counts past `u32::MAX` reach the rules and break the party size limit
#[tokio::test]
async fn test_huge_counts_are_invalid_purchases() {
    let collaborators = RecordingCollaborators::new();
    let service = service(&collaborators);

    for huge in [json!(5_000_000_000_u64), json!(u64::MAX)] {
        let err = service
            .purchase_json(&json!(1), &json!([{ "ticketType": "ADULT", "noOfTickets": huge }]))
            .await
            .unwrap_err();
        assert!(err.is_invalid_purchase(), "expected InvalidPurchase, got {err:?}");
        assert_eq!(err.to_string(), "Maximum of 25 tickets can be purchased");
    }

    let err = service
        .purchase_tickets(account(1), &[req(TicketType::Adult, 5_000_000_000)])
        .await
        .unwrap_err();
    assert!(err.is_invalid_purchase(), "expected InvalidPurchase, got {err:?}");

    assert!(collaborators.calls().is_empty());
}

/// Negative infant count is rejected at construction
#[test]
fn test_negative_count_is_invalid_input() {
    let err = TicketTypeRequest::new(TicketType::Infant, -1).unwrap_err();
    assert_eq!(err, PurchaseError::invalid_input("noOfTickets must be >= 0"));
}

/// Negative count through JSON is rejected before any call
#[tokio::test]
async fn test_negative_count_json_is_invalid_input() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_json(
            &json!(1),
            &json!([
                { "ticketType": "ADULT", "noOfTickets": 1 },
                { "ticketType": "INFANT", "noOfTickets": -1 },
            ]),
        )
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
    assert!(collaborators.calls().is_empty());
}

/// 26 single adult requests exceed the party limit
#[tokio::test]
async fn test_twenty_six_adults_is_invalid_purchase() {
    let collaborators = RecordingCollaborators::new();
    let requests = vec![req(TicketType::Adult, 1); 26];

    let err = service(&collaborators)
        .purchase_tickets(account(1), &requests)
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::invalid_purchase("Maximum of 25 tickets can be purchased"));
    assert!(collaborators.calls().is_empty());
}

/// Exactly 25 tickets is allowed
#[tokio::test]
async fn test_twenty_five_tickets_is_allowed() {
    let collaborators = RecordingCollaborators::new();

    let outcome = service(&collaborators)
        .purchase_tickets(account(1), &[req(TicketType::Adult, 20), req(TicketType::Child, 5)])
        .await
        .unwrap();

    assert_eq!(outcome.total_price, Money::from_units(20 * 25 + 5 * 15));
    assert_eq!(outcome.total_seats, 25);
}

/// Five infants for two adults breaks the ratio
#[tokio::test]
async fn test_too_many_infants_is_invalid_purchase() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_tickets(account(1), &[req(TicketType::Adult, 2), req(TicketType::Infant, 5)])
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::invalid_purchase("Maximum of 2 infants per adult allowed"));
    assert!(collaborators.calls().is_empty());
}

/// Child without an adult is rejected
#[tokio::test]
async fn test_child_only_is_invalid_purchase() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_tickets(account(1), &[req(TicketType::Child, 1)])
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::invalid_purchase("At least one adult ticket is required"));
    assert!(collaborators.calls().is_empty());
}

/// Zero adults counts as no adult, even if an ADULT entry is present
#[tokio::test]
async fn test_zero_count_adult_entry_is_not_an_adult() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_tickets(account(1), &[req(TicketType::Adult, 0), req(TicketType::Child, 2)])
        .await
        .unwrap_err();

    assert!(err.is_invalid_purchase());
}

/// Non-integer account id is rejected whatever the requests are
#[tokio::test]
async fn test_non_integer_account_is_invalid_input() {
    let collaborators = RecordingCollaborators::new();
    let service = service(&collaborators);

    for requests in [
        json!([{ "ticketType": "ADULT", "noOfTickets": 1 }]),
        json!([{ "ticketType": "CHILD", "noOfTickets": 99 }]),
        json!("invalid"),
        json!([]),
    ] {
        let err = service.purchase_json(&json!("x"), &requests).await.unwrap_err();
        assert_eq!(err, PurchaseError::invalid_input("accountId must be a positive integer"));
    }
    assert!(collaborators.calls().is_empty());
}

#[tokio::test]
async fn test_request_list_must_be_array() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_json(&json!(1), &json!("invalid"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn test_empty_request_list_is_invalid_input() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_tickets(account(1), &[])
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::invalid_input("ticketTypeRequests must not be empty"));
}

#[tokio::test]
async fn test_unknown_ticket_type_is_invalid_input() {
    let collaborators = RecordingCollaborators::new();

    let err = service(&collaborators)
        .purchase_json(&json!(1), &json!([{ "ticketType": "SENIOR", "noOfTickets": 1 }]))
        .await
        .unwrap_err();

    assert_eq!(err, PurchaseError::invalid_input("ticketType must be ADULT, CHILD, or INFANT"));
}

#[tokio::test]
async fn test_payment_failure_skips_reservation() {
    let collaborators = RecordingCollaborators::new().failing_payment(ServiceError::Declined {
        reason: "insufficient funds".to_string(),
    });

    let err = service(&collaborators)
        .purchase_tickets(account(7), &[req(TicketType::Adult, 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, PurchaseError::PaymentFailed { account_id, .. } if account_id.value() == 7));
    assert_eq!(
        collaborators.calls(),
        vec![CollaboratorCall::Payment { account_id: 7, amount: 25 }]
    );
}

#[tokio::test]
async fn test_reservation_failure_reports_charge() {
    let collaborators = RecordingCollaborators::new().failing_reservation(ServiceError::Unavailable {
        reason: "connection refused".to_string(),
    });

    let err = service(&collaborators)
        .purchase_tickets(account(3), &[req(TicketType::Adult, 1), req(TicketType::Child, 1)])
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            PurchaseError::ReservationFailed { charged, seats: 2, .. } if charged == Money::from_units(40)
        ),
        "expected ReservationFailed, got {err:?}"
    );
    assert_eq!(collaborators.calls().len(), 2);
}

#[tokio::test]
async fn test_envelope_purchase() {
    let collaborators = RecordingCollaborators::new();
    let request = PurchaseRequest::from_json(&json!({
        "accountId": 12,
        "ticketTypeRequests": [
            { "ticketType": "ADULT", "noOfTickets": 1 },
            { "ticketType": "INFANT", "noOfTickets": 2 },
        ],
    }))
    .unwrap();

    let outcome = service(&collaborators).purchase(&request).await.unwrap();

    assert_eq!(outcome.total_price, Money::from_units(25));
    assert_eq!(outcome.total_seats, 1);
    assert_eq!(
        collaborators.calls(),
        vec![
            CollaboratorCall::Payment { account_id: 12, amount: 25 },
            CollaboratorCall::Reservation { account_id: 12, seats: 1 },
        ]
    );
}

#[tokio::test]
async fn test_relaxed_rules_allow_larger_party() {
    let collaborators = RecordingCollaborators::new();
    let service = service(&collaborators).with_rules(PurchaseRules {
        max_tickets_per_purchase: 40,
        max_infants_per_adult: 3,
    });

    let outcome = service
        .purchase_tickets(account(1), &[req(TicketType::Adult, 10), req(TicketType::Infant, 30)])
        .await
        .unwrap();

    assert_eq!(outcome.total_seats, 10);
    assert_eq!(outcome.total_price, Money::from_units(250));
}

#[tokio::test]
async fn test_service_is_stateless_across_calls() {
    let collaborators = RecordingCollaborators::new();
    let service = service(&collaborators);

    let _ = service
        .purchase_tickets(account(1), &[req(TicketType::Child, 1)])
        .await
        .unwrap_err();
    let outcome = service
        .purchase_tickets(account(2), &[req(TicketType::Adult, 1)])
        .await
        .unwrap();

    assert_eq!(outcome.total_price, Money::from_units(25));
    assert_eq!(collaborators.calls().len(), 2);
}
