//! HTTP tests for the feature store client against a local mock server

use featurestore_client::{FeatureStoreClient, FeatureStoreClientTrait, FeatureStoreError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "sha256~test-token";

async fn client(server: &MockServer) -> FeatureStoreClient {
    FeatureStoreClient::new(format!("{}/", server.uri()), Some(TOKEN.to_string())).expect("Failed to create client")
}

#[tokio::test]
async fn test_list_projects_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [{
                "spec": {"name": "credit_scoring"},
                "meta": {"createdTimestamp": "2025-01-01T00:00:00Z", "lastUpdatedTimestamp": "2025-01-01T00:00:00Z"}
            }]
        })))
        .mount(&server)
        .await;

    let projects = client(&server).await.list_projects().await.expect("Failed to list projects");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name(), "credit_scoring");
}

#[tokio::test]
async fn test_list_data_sources_passes_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/data_sources"))
        .and(query_param("project", "credit scoring"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data_sources": [{"name": "zipcode_source", "type": "BATCH_FILE"}]
        })))
        .mount(&server)
        .await;

    let sources = client(&server)
        .await
        .list_data_sources("credit scoring")
        .await
        .expect("Failed to list data sources");
    assert_eq!(sources[0].name(), "zipcode_source");
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/entities"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let result = client(&server).await.list_entities("credit_scoring").await;
    assert!(matches!(result, Err(FeatureStoreError::Authentication(_))));
}

#[tokio::test]
async fn test_missing_project_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/feature_views"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server).await.list_feature_views("missing").await;
    assert!(matches!(result, Err(FeatureStoreError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/feature_services"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let result = client(&server).await.list_feature_services("credit_scoring").await;
    assert!(matches!(result, Err(FeatureStoreError::Serialization(_))));
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .respond_with(ResponseTemplate::new(503).set_body_string("registry unavailable"))
        .mount(&server)
        .await;

    match client(&server).await.list_projects().await {
        Err(FeatureStoreError::Api(message)) => assert!(message.contains("registry unavailable")),
        other => panic!("Expected an API error, got {:?}", other.map(|p| p.len())),
    }
}
