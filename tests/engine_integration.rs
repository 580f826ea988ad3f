//! Integration tests for the order-taking dialogue engine.
//!
//! These drive the engine end to end through its public boundary, the same
//! way the HTTP layer does: `process_message` in, response text out, with
//! order snapshots checked through `get_order`. Generative-path tests use
//! the mock provider instead of a real AI API.

use std::sync::Arc;

use nopickles_engine::adapters::ai::{MockAiProvider, MockError};
use nopickles_engine::application::OrderEngine;
use nopickles_engine::config::EngineConfig;
use nopickles_engine::domain::catalog::Catalog;
use nopickles_engine::domain::foundation::{Price, SessionId};
use nopickles_engine::domain::order::OrderStatus;

fn deterministic_engine() -> OrderEngine {
    OrderEngine::deterministic(Catalog::sample(), &EngineConfig::default())
}

fn session(id: &str) -> SessionId {
    SessionId::new(id).unwrap()
}

#[tokio::test]
async fn full_ordering_conversation() {
    let engine = deterministic_engine();
    let id = session("walkthrough");

    let greeting = engine.process_message(&id, "hi there").await;
    assert!(greeting.contains("Welcome to NoPickles"));

    let menu = engine.process_message(&id, "show me the menu").await;
    assert!(menu.contains("=== MENU ==="));
    assert!(menu.contains("Classic Burger: $6.99"));

    let confirm = engine
        .process_message(&id, "I'll take a Classic Burger and a Small Coke")
        .await;
    assert!(confirm.contains("Classic Burger ($6.99)"));
    assert!(confirm.contains("Small Coke ($1.99)"));
    assert!(confirm.contains("$8.98"));

    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.lines().len(), 2);
    assert_eq!(order.total(), Price::from_cents(898));
    assert_eq!(order.status(), OrderStatus::InProgress);

    let done = engine.process_message(&id, "I'm done").await;
    assert!(done.contains("Your order is complete."));
    assert!(done.contains("Classic Burger"));
    assert!(done.contains("$6.99"));
    assert!(done.contains("Total: $8.98"));

    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.status(), OrderStatus::Completed);
    assert!(order.completed_at().is_some());
}

#[tokio::test]
async fn greeting_takes_precedence_over_item_extraction() {
    let engine = deterministic_engine();
    let id = session("greeting-priority");

    let response = engine
        .process_message(&id, "hi, I'll have a Classic Burger")
        .await;

    assert!(response.contains("Welcome to NoPickles"));
    let order = engine.get_order(&id).await.unwrap();
    assert!(order.is_empty());
}

#[tokio::test]
async fn empty_order_completion_prompts_instead() {
    let engine = deterministic_engine();
    let id = session("too-eager");

    let response = engine.process_message(&id, "that's all").await;

    assert_eq!(response, "You haven't ordered anything yet. What would you like?");
    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.status(), OrderStatus::InProgress);
}

#[tokio::test]
async fn completion_is_one_way() {
    let engine = deterministic_engine();
    let id = session("closer");

    engine.process_message(&id, "a Veggie Burger please").await;
    engine.process_message(&id, "finish").await;
    let completed_at = *engine.get_order(&id).await.unwrap().completed_at().unwrap();

    // Neither repeating the phrase nor sending anything else reopens it.
    engine.process_message(&id, "finish").await;
    engine.process_message(&id, "actually wait").await;

    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.status(), OrderStatus::Completed);
    assert_eq!(order.completed_at(), Some(&completed_at));
}

#[tokio::test]
async fn total_matches_line_subtotals_after_every_message() {
    let engine = deterministic_engine();
    let id = session("sums");

    for message in [
        "a Classic Burger",
        "add French Fries and Onion Rings",
        "one Milkshake please",
    ] {
        engine.process_message(&id, message).await;
        let order = engine.get_order(&id).await.unwrap();
        let expected: Price = order.lines().iter().map(|l| l.subtotal()).sum();
        assert_eq!(order.total(), expected);
    }

    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.total(), Price::from_cents(699 + 349 + 449 + 499));
}

#[tokio::test]
async fn unknown_session_and_category_are_absent_not_errors() {
    let engine = deterministic_engine();

    assert!(engine.get_order(&session("never-seen")).await.is_none());
    assert!(engine.list_menu_by_category("tapas").is_empty());
    assert!(engine.all_orders().await.is_empty());
}

#[tokio::test]
async fn adversarial_input_gets_a_safe_response() {
    let engine = deterministic_engine();
    let id = session("fuzzer");

    for message in ["", "    ", "🍔🍔🍔", "\0\0", &"x".repeat(10_000)] {
        let response = engine.process_message(&id, message).await;
        assert!(!response.is_empty());
    }
}

#[tokio::test]
async fn generative_engine_uses_model_text_and_extracts_items() {
    let provider = MockAiProvider::new().with_response("Great choice! One burger coming up.");
    let engine = OrderEngine::generative(
        Catalog::sample(),
        Arc::new(provider),
        &EngineConfig::default(),
    );
    let id = session("llm");

    let response = engine.process_message(&id, "a Classic Burger please").await;

    assert_eq!(response, "Great choice! One burger coming up.");
    let order = engine.get_order(&id).await.unwrap();
    assert_eq!(order.lines().len(), 1);
    assert_eq!(order.total(), Price::from_cents(699));
}

#[tokio::test]
async fn generative_failure_matches_deterministic_extraction() {
    let message = "I'll take a Classic Burger and a Small Coke";

    // Reference run through the rule table.
    let reference = deterministic_engine();
    let ref_id = session("reference");
    let expected_response = reference.process_message(&ref_id, message).await;
    let expected_order = reference.get_order(&ref_id).await.unwrap();

    // Failing backend must fall back to the identical result.
    let provider = MockAiProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
    let engine = OrderEngine::generative(
        Catalog::sample(),
        Arc::new(provider),
        &EngineConfig::default(),
    );
    let id = session("degraded");

    let response = engine.process_message(&id, message).await;
    let order = engine.get_order(&id).await.unwrap();

    assert_eq!(response, expected_response);
    assert_eq!(order.total(), expected_order.total());
    assert_eq!(order.lines().len(), expected_order.lines().len());
    for (line, expected) in order.lines().iter().zip(expected_order.lines()) {
        assert_eq!(line.menu_item_name(), expected.menu_item_name());
        assert_eq!(line.subtotal(), expected.subtotal());
    }
}

#[tokio::test]
async fn concurrent_sessions_do_not_interfere() {
    let engine = Arc::new(deterministic_engine());

    let mut tasks = Vec::new();
    for i in 0..16 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            let id = session(&format!("customer-{i}"));
            engine.process_message(&id, "a Bottled Water").await;
            engine.process_message(&id, "that's it").await;
            id
        }));
    }

    for task in tasks {
        let id = task.await.unwrap();
        let order = engine.get_order(&id).await.unwrap();
        assert_eq!(order.status(), OrderStatus::Completed);
        assert_eq!(order.total(), Price::from_cents(149));
    }
    assert_eq!(engine.all_orders().await.len(), 16);
}
