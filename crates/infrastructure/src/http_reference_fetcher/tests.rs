use editable_profile_application::ReferenceFetcher;
use editable_profile_core::AppError;
use editable_profile_domain::AttributeGroup;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use super::{HttpReferenceFetcher, parse_attributes, parse_locations};

const VALID_LOCATIONS: &str =
    r#"{"cities":[{"lat":"56°09'N", "lon":"10°13'E", "city":"Aarhus"}]}"#;
const VALID_ATTRIBUTES: &str = r#"{
    "gender":[{"id":"123", "name":"Male"}],
    "ethnicity":[{"id":"123", "name":"Male"}],
    "religion":[{"id":"123", "name":"Male"}],
    "figure":[{"id":"123", "name":"Male"}],
    "marital_status":[{"id":"123", "name":"Male"}]
}"#;
const EMPTY_GROUP_ATTRIBUTES: &str = r#"{
    "gender":[{"id":"g1", "name":"Male"}],
    "ethnicity":[],
    "religion":[{"id":"r1", "name":"None"}],
    "figure":[{"id":"f1", "name":"Slim"}],
    "marital_status":[{"id":"m1", "name":"Single"}]
}"#;

fn base_url(value: &str) -> Url {
    Url::parse(value).unwrap_or_else(|_| unreachable!())
}

async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|_| unreachable!());
    let address = listener.local_addr().unwrap_or_else(|_| unreachable!());

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = [0_u8; 1024];
        let _ = socket.read(&mut request).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    base_url(format!("http://{address}/en/").as_str())
}

#[test]
fn endpoints_are_joined_to_base_url() {
    let fetcher = HttpReferenceFetcher::new(
        reqwest::Client::new(),
        &base_url("http://localhost:8080/en/"),
    );
    assert!(fetcher.is_ok());
    let fetcher = fetcher.unwrap_or_else(|_| unreachable!());

    assert_eq!(
        fetcher.locations_url().as_str(),
        "http://localhost:8080/en/locations/cities.json"
    );
    assert_eq!(
        fetcher.attributes_url().as_str(),
        "http://localhost:8080/en/single_choice_attributes.json"
    );
}

#[test]
fn valid_city_list_is_decoded() {
    let catalog = parse_locations(VALID_LOCATIONS);
    assert!(catalog.is_ok());
    let catalog = catalog.unwrap_or_else(|_| unreachable!());

    assert_eq!(catalog.cities().len(), 1);
    let aarhus = catalog.cities().first();
    assert_eq!(aarhus.map(|city| city.city()), Some("Aarhus"));
    assert_eq!(aarhus.map(|city| city.lat()), Some("56°09'N"));
    assert_eq!(aarhus.map(|city| city.lon()), Some("10°13'E"));
}

#[test]
fn empty_or_invalid_city_list_is_unavailable() {
    assert!(matches!(
        parse_locations(r#"{"cities":[]}"#),
        Err(AppError::Unavailable(_))
    ));
    assert!(matches!(parse_locations(""), Err(AppError::Unavailable(_))));
}

#[test]
fn valid_attribute_lists_are_decoded() {
    let catalog = parse_attributes(VALID_ATTRIBUTES);
    assert!(catalog.is_ok());
    let catalog = catalog.unwrap_or_else(|_| unreachable!());

    for group in AttributeGroup::all() {
        assert_eq!(catalog.choices(*group).len(), 1);
    }
    assert_eq!(
        catalog
            .find(AttributeGroup::MaritalStatus, "123")
            .map(|attribute| attribute.name()),
        Some("Male")
    );
}

#[test]
fn any_empty_attribute_group_makes_catalog_unavailable() {
    let Err(AppError::Unavailable(message)) = parse_attributes(EMPTY_GROUP_ATTRIBUTES) else {
        panic!("an empty group should make the catalog unavailable");
    };
    assert!(message.contains("ethnicity"));
}

#[test]
fn camel_case_marital_status_key_is_rejected() {
    let body = r#"{"gender":[], "ethnicity":[], "religion":[], "figure":[], "maritalStatus":[{"id":"123", "name":"Male"}]}"#;
    assert!(matches!(
        parse_attributes(body),
        Err(AppError::Unavailable(_))
    ));
    assert!(matches!(parse_attributes(""), Err(AppError::Unavailable(_))));
}

#[tokio::test]
async fn fetches_locations_over_http() {
    let base_url = serve_once("200 OK", VALID_LOCATIONS).await;
    let fetcher = HttpReferenceFetcher::new(reqwest::Client::new(), &base_url)
        .unwrap_or_else(|_| unreachable!());

    let catalog = fetcher.fetch_locations().await;
    assert!(catalog.is_ok());
    let catalog = catalog.unwrap_or_else(|_| unreachable!());
    assert_eq!(catalog.get(0).map(|city| city.city()), Some("Aarhus"));
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let base_url = serve_once("503 Service Unavailable", VALID_ATTRIBUTES).await;
    let fetcher = HttpReferenceFetcher::new(reqwest::Client::new(), &base_url)
        .unwrap_or_else(|_| unreachable!());

    let catalog = fetcher.fetch_attributes().await;
    assert!(matches!(catalog, Err(AppError::Unavailable(_))));
}
