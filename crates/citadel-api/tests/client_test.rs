#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use citadel_api::{Client, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn character_json(id: u64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {
            "name": "Earth (C-137)",
            "url": "https://rickandmortyapi.com/api/location/1"
        },
        "location": {
            "name": "Citadel of Ricks",
            "url": "https://rickandmortyapi.com/api/location/3"
        },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": ["https://rickandmortyapi.com/api/episode/28"],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

// ── Page fetch tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_character_page_success() {
    let (server, client) = setup().await;

    let envelope = json!({
        "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=3", "prev": "https://rickandmortyapi.com/api/character?page=1" },
        "results": [
            character_json(21, "Aqua Morty", "unknown"),
            character_json(22, "Aqua Rick", "Alive"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let page = client.character_page(2).await.unwrap();

    assert_eq!(page.info.pages, 42);
    assert_eq!(page.info.count, 826);
    assert_eq!(page.results.len(), 2);
    // Server order must be preserved.
    assert_eq!(page.results[0].id, 21);
    assert_eq!(page.results[1].id, 22);
    assert_eq!(page.results[0].name, "Aqua Morty");
    assert_eq!(page.results[1].status, "Alive");
}

#[tokio::test]
async fn test_character_page_out_of_range() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "There is nothing here" })),
        )
        .mount(&server)
        .await;

    let result = client.character_page(9000).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "There is nothing here");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_character_page_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>nope"))
        .mount(&server)
        .await;

    let result = client.character_page(1).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Detail fetch tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_character_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character/183"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(character_json(183, "Johnny Depp", "Alive")),
        )
        .mount(&server)
        .await;

    let character = client.character(183).await.unwrap();

    assert_eq!(character.id, 183);
    assert_eq!(character.name, "Johnny Depp");
    assert_eq!(character.location.name, "Citadel of Ricks");
    assert_eq!(character.episode.len(), 1);
}

#[tokio::test]
async fn test_character_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character/99999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Character not found" })),
        )
        .mount(&server)
        .await;

    let result = client.character(99999).await;

    match result {
        Err(err) => {
            assert!(err.is_not_found(), "expected not-found, got: {err:?}");
            assert!(
                matches!(&err, Error::Api { message, .. } if message == "Character not found"),
                "remote message should pass through, got: {err:?}"
            );
        }
        Ok(c) => panic!("expected error, got character {}", c.id),
    }
}

// ── Error-body handling tests ───────────────────────────────────────

#[tokio::test]
async fn test_plain_text_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = client.character_page(1).await;

    assert!(
        matches!(result, Err(Error::Api { status: 500, ref message }) if message == "upstream exploded"),
        "expected raw-body message, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client.character(1).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.starts_with("503"), "got message: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Base URL handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_base_path_is_preserved() {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let client = Client::from_reqwest(&base, reqwest::Client::new()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/character/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(character_json(1, "Rick Sanchez", "Alive")),
        )
        .mount(&server)
        .await;

    let character = client.character(1).await.unwrap();
    assert_eq!(character.name, "Rick Sanchez");
}
