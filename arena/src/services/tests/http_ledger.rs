//! Tests for the HTTP sheet ledger against a mock sheet API

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::tally;
use crate::error::ArenaError;
use crate::services::{HttpLedger, HttpLedgerConfig};
use crate::traits::{ItemStore, VoteStore};
use shared::{Item, Vote};

const TWEETS_RECORDS: &str = "/workbooks/HotOrNotTweets/sheets/Tweets/records";
const VOTES_RECORDS: &str = "/workbooks/HotOrNotTweets/sheets/Votes/records";
const VOTES_ROWS: &str = "/workbooks/HotOrNotTweets/sheets/Votes/rows";

fn ledger_for(server: &MockServer) -> HttpLedger {
    HttpLedger::new(HttpLedgerConfig {
        base_url: server.uri(),
        ..HttpLedgerConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_items_from_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TWEETS_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 101, "text": " Hot take "},
            {"id": "102", "text": "Cold take"},
            {"id": "", "text": "no id"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = ledger_for(&server).fetch_all().await.unwrap();
    assert_eq!(items, vec![Item::new("101", "Hot take"), Item::new("102", "Cold take")]);
}

#[tokio::test]
async fn test_missing_sheet_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TWEETS_RECORDS))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = ledger_for(&server).fetch_all().await;
    match result {
        Err(ArenaError::NotFound { name }) => assert_eq!(name, "HotOrNotTweets/Tweets"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOTES_RECORDS))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = ledger_for(&server).read_all().await;
    assert!(matches!(result, Err(ArenaError::Unavailable { .. })));
}

#[tokio::test]
async fn test_non_array_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TWEETS_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .mount(&server)
        .await;

    let result = ledger_for(&server).fetch_all().await;
    assert!(matches!(result, Err(ArenaError::MalformedData { .. })));
}

#[tokio::test]
async fn test_append_posts_three_columns_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VOTES_ROWS))
        .and(header("authorization", "Bearer sheet-token"))
        .and(body_json(json!({"values": ["X", "Y", "X"], "value_input": "RAW"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let ledger = HttpLedger::new(HttpLedgerConfig {
        base_url: server.uri(),
        api_token: Some("sheet-token".to_string()),
        ..HttpLedgerConfig::default()
    })
    .unwrap();

    ledger.append(&Vote::win("X", "Y").unwrap()).await.unwrap();
}

#[tokio::test]
async fn test_append_rejection_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VOTES_ROWS))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = ledger_for(&server).append(&Vote::tie("X", "Y").unwrap()).await;
    assert!(matches!(result, Err(ArenaError::Unavailable { .. })));
}

#[tokio::test]
async fn test_read_votes_skips_inconsistent_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VOTES_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id1": "A", "id2": "B", "result": "A"},
            {"id1": "A", "id2": "B", "result": "nobody"},
            {"id1": "B", "id2": "C", "result": "tie"}
        ])))
        .mount(&server)
        .await;

    let votes = ledger_for(&server).read_all().await.unwrap();
    assert_eq!(votes, vec![Vote::win("A", "B").unwrap(), Vote::tie("B", "C").unwrap()]);
}

#[tokio::test]
async fn test_slow_sheet_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TWEETS_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let ledger = HttpLedger::new(HttpLedgerConfig {
        base_url: server.uri(),
        timeout: Duration::from_millis(100),
        ..HttpLedgerConfig::default()
    })
    .unwrap();

    assert!(matches!(ledger.fetch_all().await, Err(ArenaError::Unavailable { .. })));
}

/// Mount an append expectation for one row and a records response for the
/// rows the sheet hands back afterwards
async fn mount_sheet(server: &MockServer, appended: serde_json::Value, stored: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(VOTES_ROWS))
        .and(body_json(json!({"values": appended, "value_input": "RAW"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(VOTES_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_padded_ids_are_sent_and_tallied_trimmed() {
    let server = MockServer::start().await;
    mount_sheet(
        &server,
        json!(["X", "Y", "X"]),
        json!([{"id1": "X", "id2": "Y", "result": "X"}]),
    )
    .await;
    let ledger = ledger_for(&server);

    let vote = Vote::win(" X ", "Y").unwrap();
    ledger.append(&vote).await.unwrap();

    let votes = ledger.read_all().await.unwrap();
    assert_eq!(votes, vec![vote]);
    assert_eq!(tally(&votes).wins_for("X"), 1);
}

#[tokio::test]
async fn test_numeric_sheet_ids_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TWEETS_RECORDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "text": "seven"},
            {"id": 8, "text": "eight"}
        ])))
        .mount(&server)
        .await;
    mount_sheet(
        &server,
        json!(["7", "8", "7"]),
        json!([{"id1": 7, "id2": 8, "result": 7}]),
    )
    .await;
    let ledger = ledger_for(&server);

    let items = ledger.fetch_all().await.unwrap();
    let vote = Vote::win(&items[0].id, &items[1].id).unwrap();
    ledger.append(&vote).await.unwrap();

    let votes = ledger.read_all().await.unwrap();
    assert_eq!(votes, vec![vote]);

    let report = tally(&votes);
    assert_eq!(report.wins_for("7"), 1);
    assert_eq!(report.pairwise_wins["7"], vec!["8"]);
}

#[tokio::test]
async fn test_leading_zero_ids_are_stored_raw() {
    let server = MockServer::start().await;
    mount_sheet(
        &server,
        json!(["007", "8", "007"]),
        json!([{"id1": "007", "id2": 8, "result": "007"}]),
    )
    .await;
    let ledger = ledger_for(&server);

    ledger.append(&Vote::win("007", "8").unwrap()).await.unwrap();

    let report = tally(&ledger.read_all().await.unwrap());
    assert_eq!(report.wins_for("007"), 1);
    assert_eq!(report.wins_for("7"), 0);
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let result = HttpLedger::new(HttpLedgerConfig {
        base_url: "not a url".to_string(),
        ..HttpLedgerConfig::default()
    });
    assert!(matches!(result, Err(ArenaError::Config { .. })));
}
