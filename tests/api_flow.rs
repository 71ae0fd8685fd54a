use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use internal_transfers::gateway::{build_router, state::AppState};
use internal_transfers::persistence::MemoryStore;

/// Helper to start a server over a fresh in-memory store
fn new_server() -> TestServer {
    let state = AppState::with_store(Arc::new(MemoryStore::new()));
    TestServer::new(build_router(Arc::new(state)))
}

async fn create_account(server: &TestServer, id: i64, balance: Value) -> StatusCode {
    server
        .post("/accounts")
        .json(&json!({"account_id": id, "initial_balance": balance}))
        .await
        .status_code()
}

async fn transfer(server: &TestServer, from: i64, to: i64, amount: Value) -> (StatusCode, Value) {
    let response = server
        .post("/transactions")
        .json(&json!({
            "source_account_id": from,
            "destination_account_id": to,
            "amount": amount,
        }))
        .await;
    let status = response.status_code();
    let body = if status == StatusCode::NO_CONTENT {
        Value::Null
    } else {
        response.json()
    };
    (status, body)
}

async fn balance(server: &TestServer, id: i64) -> String {
    let body: Value = server.get(&format!("/accounts/{id}")).await.json();
    body["data"]["balance"]
        .as_str()
        .expect("balance should be a decimal string")
        .to_string()
}

async fn transactions(server: &TestServer) -> Vec<Value> {
    let body: Value = server.get("/transactions").await.json();
    body["data"].as_array().cloned().unwrap_or_default()
}

#[tokio::test]
async fn qa_tc_transfer_moves_funds_and_records_once() {
    let server = new_server();
    assert_eq!(create_account(&server, 1, json!(200)).await, StatusCode::NO_CONTENT);
    assert_eq!(create_account(&server, 2, json!("50")).await, StatusCode::NO_CONTENT);

    let (status, _) = transfer(&server, 1, 2, json!(50)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(balance(&server, 1).await, "150");
    assert_eq!(balance(&server, 2).await, "100");

    let records = transactions(&server).await;
    assert_eq!(records.len(), 1, "exactly one record per transfer");
    assert_eq!(records[0]["source_account_id"], 1);
    assert_eq!(records[0]["destination_account_id"], 2);
    assert_eq!(records[0]["amount"], "50");

    let id = records[0]["transaction_id"].as_i64().unwrap();
    let body: Value = server.get(&format!("/transactions/{id}")).await.json();
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"], records[0]);
}

#[tokio::test]
async fn qa_tc_insufficient_funds_changes_nothing() {
    let server = new_server();
    create_account(&server, 1, json!(100)).await;
    create_account(&server, 2, json!(50)).await;

    let (status, body) = transfer(&server, 1, 2, json!(500)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Insufficient funds in account 1");
    assert_eq!(balance(&server, 1).await, "100");
    assert_eq!(balance(&server, 2).await, "50");
    assert!(transactions(&server).await.is_empty());
}

#[tokio::test]
async fn qa_tc_duplicate_account_keeps_original_balance() {
    let server = new_server();
    assert_eq!(create_account(&server, 7, json!(100)).await, StatusCode::NO_CONTENT);

    let response = server
        .post("/accounts")
        .json(&json!({"account_id": 7, "initial_balance": 5}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], 409);
    assert_eq!(balance(&server, 7).await, "100");
}

#[tokio::test]
async fn qa_tc_unknown_accounts_are_not_found() {
    let server = new_server();
    create_account(&server, 1, json!(100)).await;

    let (status, _) = transfer(&server, 99, 1, json!(10)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = transfer(&server, 1, 99, json!(10)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    server
        .get("/accounts/99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/transactions/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(balance(&server, 1).await, "100");
    assert!(transactions(&server).await.is_empty());
}

#[tokio::test]
async fn qa_tc_failures_repeat_identically() {
    let server = new_server();
    create_account(&server, 1, json!(100)).await;
    create_account(&server, 2, json!(50)).await;

    for _ in 0..3 {
        let (status, body) = transfer(&server, 1, 2, json!(500)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Insufficient funds in account 1");

        let (status, body) = transfer(&server, 1, 42, json!(5)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Account 42 not found");
    }
    assert_eq!(balance(&server, 1).await, "100");
}

#[tokio::test]
async fn qa_tc_non_positive_values_rejected() {
    let server = new_server();

    for balance in [json!(0), json!(-1), json!("-0.5")] {
        assert_eq!(
            create_account(&server, 1, balance).await,
            StatusCode::BAD_REQUEST
        );
    }

    create_account(&server, 1, json!(100)).await;
    create_account(&server, 2, json!(100)).await;
    for amount in [json!(0), json!("-10")] {
        let (status, _) = transfer(&server, 1, 2, amount).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = transfer(&server, 1, 1, json!(10)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "self-transfer is rejected");
    assert!(transactions(&server).await.is_empty());
}

#[tokio::test]
async fn qa_tc_decimal_precision_preserved() {
    let server = new_server();
    create_account(&server, 123, json!("100.23344")).await;
    create_account(&server, 456, json!(0.5)).await;

    let (status, _) = transfer(&server, 123, 456, json!("100.12345")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(balance(&server, 123).await, "0.10999");
    assert_eq!(balance(&server, 456).await, "100.62345");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn qa_tc_concurrent_double_spend_prevented() {
    let server = new_server();
    create_account(&server, 1, json!(100)).await;
    create_account(&server, 3, json!(1)).await;

    let (a, b) = tokio::join!(
        transfer(&server, 1, 3, json!(70)),
        transfer(&server, 1, 3, json!(70)),
    );
    let mut statuses = vec![a.0.as_u16(), b.0.as_u16()];
    statuses.sort();

    assert_eq!(statuses, vec![204, 400]);
    assert_eq!(balance(&server, 1).await, "30");
    assert_eq!(balance(&server, 3).await, "71");
    assert_eq!(transactions(&server).await.len(), 1);
}
