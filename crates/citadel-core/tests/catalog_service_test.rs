#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogService` using wiremock: the full
// wire-to-domain path, including error folding.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use citadel_api::{Client, TransportConfig};
use citadel_core::{CatalogService, Error, StatusCategory};

async fn setup() -> (MockServer, CatalogService) {
    let server = MockServer::start().await;
    let client = Client::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, CatalogService::new(client))
}

fn character_json(id: u64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Female",
        "origin": { "name": "Earth (Replacement Dimension)", "url": "" },
        "location": { "name": "Earth (Replacement Dimension)", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T19:26:10.154Z"
    })
}

#[tokio::test]
async fn test_page_returns_domain_entries_in_server_order() {
    let (server, service) = setup().await;

    let envelope = json!({
        "info": { "count": 826, "pages": 42, "next": null, "prev": null },
        "results": [
            character_json(3, "Summer Smith", "Alive"),
            character_json(1, "Rick Sanchez", "Alive"),
        ]
    });

    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let page = service.page(1).await.unwrap();

    assert_eq!(page.total_pages, 42);
    let ids: Vec<u64> = page.characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1], "server order must be preserved");
    assert_eq!(page.characters[0].status_category(), StatusCategory::Alive);
}

#[tokio::test]
async fn test_http_failure_folds_to_fetch_error() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "There is nothing here" })),
        )
        .mount(&server)
        .await;

    let err = service.page(9000).await.unwrap_err();

    assert_eq!(
        err,
        Error::Fetch {
            message: "There is nothing here".to_owned()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_folds_to_parse_error() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"info\": 12"))
        .mount(&server)
        .await;

    let err = service.page(1).await.unwrap_err();

    assert!(
        matches!(err, Error::Parse { .. }),
        "expected Parse, got: {err:?}"
    );
}

#[tokio::test]
async fn test_profile_carries_location_name() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(character_json(3, "Summer Smith", "Alive")),
        )
        .mount(&server)
        .await;

    let profile = service.profile(3).await.unwrap();

    assert_eq!(profile.name, "Summer Smith");
    assert_eq!(profile.gender, "Female");
    assert_eq!(profile.location, "Earth (Replacement Dimension)");
}

#[tokio::test]
async fn test_unknown_id_surfaces_the_remote_message() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/character/826000"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Character not found" })),
        )
        .mount(&server)
        .await;

    let err = service.profile(826_000).await.unwrap_err();

    assert_eq!(err.message(), "Character not found");
}
