// HTTP behaviour of the Google Books client against a mock server
use bookmatch_catalog::{CatalogConfig, CatalogError, GoogleBooksClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GoogleBooksClient {
    let config = CatalogConfig::default()
        .with_base_url(format!("{}/volumes", server.uri()))
        .with_item_delay(Duration::ZERO);
    GoogleBooksClient::new(config, "test-key").unwrap()
}

fn volume(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": ["Ursula K. Le Guin"],
            "categories": ["Fantasy"],
            "averageRating": 4.0,
            "ratingsCount": 120,
            "pageCount": 183,
            "publishedDate": "1968",
            "industryIdentifiers": [
                { "type": "ISBN_13", "identifier": "9780547773742" }
            ]
        }
    })
}

fn volume_list(ids: &[&str]) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "totalItems": ids.len(), "items": items })
}

async fn mount_volume(server: &MockServer, id: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/volumes/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume(id, title)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_book_maps_volume_and_caches_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes/earthsea"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume("earthsea", "A Wizard of Earthsea")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let book = client.fetch_book("earthsea").await.unwrap();
    assert_eq!(book.id, "earthsea");
    assert_eq!(book.title, "A Wizard of Earthsea");
    assert_eq!(book.authors, vec!["Ursula K. Le Guin"]);
    assert_eq!(book.categories, vec!["Fantasy"]);
    assert_eq!(book.average_rating, Some(4.0));
    assert_eq!(book.page_count, Some(183));
    assert_eq!(book.isbn13, vec!["9780547773742"]);

    // Second lookup is served from the cache; `expect(1)` is checked on drop
    let again = client.fetch_book("earthsea").await.unwrap();
    assert_eq!(again.title, book.title);
    assert_eq!(client.cached_len(), 1);
}

#[tokio::test]
async fn test_too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes/busy"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.fetch_book("busy").await,
        Err(CatalogError::RateLimited)
    ));
    assert_eq!(client.cached_len(), 0);
}

#[tokio::test]
async fn test_server_error_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.search("dune", 5).await {
        Err(CatalogError::Status { status, context }) => {
            assert_eq!(status, 503);
            assert_eq!(context, "search 'dune'");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.fetch_book("broken").await,
        Err(CatalogError::Decode(_))
    ));
}

#[tokio::test]
async fn test_search_sends_query_and_skips_failed_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "wizards"))
        .and(query_param("maxResults", "3"))
        .and(query_param("printType", "books"))
        .and(query_param("langRestrict", "en"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_list(&["a", "b", "c"])))
        .mount(&server)
        .await;
    mount_volume(&server, "a", "First").await;
    Mock::given(method("GET"))
        .and(path("/volumes/b"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_volume(&server, "c", "Third").await;

    let client = client_for(&server);
    let books = client.search("wizards", 3).await.unwrap();
    let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[tokio::test]
async fn test_search_without_items_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0 })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.search("zzzz", 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_similar_books_excludes_source_and_truncates() {
    let server = MockServer::start().await;
    mount_volume(&server, "src", "Source").await;
    // The related query asks for one extra hit to make room for the source
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "Fantasy OR inauthor:Ursula K. Le Guin"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_list(&["x", "src", "y", "z"])))
        .expect(1)
        .mount(&server)
        .await;
    for id in ["x", "y", "z"] {
        mount_volume(&server, id, id).await;
    }

    let client = client_for(&server);
    let related = client.similar_books("src", 2).await.unwrap();
    let ids: Vec<&str> = related.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
}

#[tokio::test]
async fn test_similar_books_without_categories_or_authors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes/bare"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "bare", "volumeInfo": { "title": "Bare" } })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.similar_books("bare", 5).await.unwrap().is_empty());
}
