//! Integration Tests for the PokeAPI Client and REPL Commands
//!
//! Runs the client against a local axum server standing in for the PokeAPI
//! and counts how many requests actually reach it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::rngs::mock::StepRng;
use serde_json::json;

use pokedex::commands::ControlFlow;
use pokedex::repl::eval_line;
use pokedex::{Cache, CommandRegistry, PokeApiClient, PokedexError, Session};

// == Fake PokeAPI ==

#[derive(Clone, Default)]
struct FakeApi {
    hits: Arc<AtomicUsize>,
}

impl FakeApi {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn pokemon_handler(State(api): State<FakeApi>, Path(name): Path<String>) -> Response {
    api.hits.fetch_add(1, Ordering::SeqCst);

    match name.as_str() {
        "pikachu" => Json(json!({
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": ""}}],
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]
        }))
        .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn location_list_handler(
    State(api): State<FakeApi>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    api.hits.fetch_add(1, Ordering::SeqCst);

    let offset: u32 = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let body = if offset == 0 {
        json!({
            "count": 3,
            "next": null,
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": ""},
                {"name": "eterna-city-area", "url": ""},
                {"name": "pastoria-city-area", "url": ""}
            ]
        })
    } else {
        json!({"count": 3, "next": null, "previous": null, "results": []})
    };
    Json(body).into_response()
}

async fn location_handler(State(api): State<FakeApi>, Path(name): Path<String>) -> Response {
    api.hits.fetch_add(1, Ordering::SeqCst);

    if name != "pastoria-city-area" {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    Json(json!({
        "name": "pastoria-city-area",
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": ""}},
            {"pokemon": {"name": "pikachu", "url": ""}}
        ]
    }))
    .into_response()
}

/// Serves the fake API on an ephemeral port and returns its base URL.
async fn spawn_fake_api(api: FakeApi) -> String {
    let app = Router::new()
        .route("/api/v2/pokemon/:name/", get(pokemon_handler))
        .route("/api/v2/location-area/", get(location_list_handler))
        .route("/api/v2/location-area/:name/", get(location_handler))
        .with_state(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/v2", addr)
}

async fn create_test_client(interval: Duration) -> (PokeApiClient, FakeApi) {
    let api = FakeApi::default();
    let base_url = spawn_fake_api(api.clone()).await;
    let cache = Arc::new(Cache::new(interval));
    let client = PokeApiClient::new(&base_url, cache, Duration::from_secs(5)).unwrap();
    (client, api)
}

// == Client Tests ==

#[tokio::test]
async fn test_second_fetch_served_from_cache() {
    let (client, api) = create_test_client(Duration::from_secs(60)).await;

    let first = client.pokemon("pikachu").await.unwrap();
    let second = client.pokemon("pikachu").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.hits(), 1);

    let cached = client.cache().get(&client.pokemon_url("pikachu")).await;
    assert!(cached.is_some(), "raw body should be cached under its URL");
}

#[tokio::test]
async fn test_expired_response_refetched() {
    let (client, api) = create_test_client(Duration::from_millis(50)).await;

    client.pokemon("pikachu").await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    client.pokemon("pikachu").await.unwrap();

    assert_eq!(api.hits(), 2);
}

#[tokio::test]
async fn test_not_found_not_cached() {
    let (client, api) = create_test_client(Duration::from_secs(60)).await;

    let err = client.pokemon("missingno").await.unwrap_err();
    assert!(matches!(err, PokedexError::NotFound(_)));

    let _ = client.pokemon("missingno").await;
    assert_eq!(api.hits(), 2);
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let (client, _api) = create_test_client(Duration::from_secs(60)).await;

    let err = client.pokemon("broken").await.unwrap_err();
    assert!(matches!(err, PokedexError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_location_area_listing_and_detail() {
    let (client, api) = create_test_client(Duration::from_secs(60)).await;

    let page = client
        .location_areas(&client.location_areas_url(20))
        .await
        .unwrap();
    assert_eq!(page.results.len(), 3);
    assert!(page.next.is_none());

    let area = client.location_area("pastoria-city-area").await.unwrap();
    let names: Vec<&str> = area.pokemon_names().collect();
    assert_eq!(names, vec!["tentacool", "pikachu"]);

    assert_eq!(api.hits(), 2);
}

// == REPL Flow ==

#[tokio::test]
async fn test_repl_session_flow() {
    let (client, api) = create_test_client(Duration::from_secs(60)).await;
    let registry = CommandRegistry::new();
    let mut session = Session::with_rng(client, 20, Box::new(StepRng::new(0, 0)));
    let mut out = Vec::new();

    for line in [
        "map",
        "explore pastoria-city-area",
        "catch Pikachu",
        "inspect pikachu",
        "pokedex",
        "explore pastoria-city-area",
    ] {
        let flow = eval_line(&registry, &mut session, line, &mut out).await.unwrap();
        assert_eq!(flow, ControlFlow::Continue);
    }

    let flow = eval_line(&registry, &mut session, "exit", &mut out).await.unwrap();
    assert_eq!(flow, ControlFlow::Exit);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("canalave-city-area\neterna-city-area\npastoria-city-area\n"));
    assert!(out.contains("Found Pokemon:\n - tentacool\n - pikachu\n"));
    assert!(out.contains("pikachu was caught!"));
    assert!(out.contains("Name: pikachu\nHeight: 4\nWeight: 60\n"));
    assert!(out.contains("Your Pokedex:\n - pikachu\n"));
    assert!(out.ends_with("Closing the Pokedex... Goodbye!\n"));

    // map, explore and catch each reach the server once; the repeat explore is cached.
    assert_eq!(api.hits(), 3);
}

#[tokio::test]
async fn test_repl_reports_unknown_area() {
    let (client, _api) = create_test_client(Duration::from_secs(60)).await;
    let registry = CommandRegistry::new();
    let mut session = Session::new(client, 20);
    let mut out = Vec::new();

    let flow = eval_line(&registry, &mut session, "explore nowhere", &mut out)
        .await
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(flow, ControlFlow::Continue);
    assert!(out.contains("Exploring nowhere..."));
    assert!(out.contains("Error: Not found:"));
}
