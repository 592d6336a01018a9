//! Integration tests for the tree store.
//!
//! These tests verify the store boundary works correctly: the mock store
//! for deterministic behavior and failure injection, and the HTTP store
//! against a wiremock server speaking the backend's wire format.

use serde_json::json;

use tagtree::core::canonical::CanonicalNode;
use tagtree::store::http::HttpTreeStore;
use tagtree::store::mock::{FailOn, MockOperation, MockTreeStore};
use tagtree::store::{StoreError, TreeRecord, TreeStore};

fn leaf(name: &str, data: &str) -> CanonicalNode {
    CanonicalNode {
        name: name.to_string(),
        children: None,
        data: Some(data.to_string()),
    }
}

// =============================================================================
// MockTreeStore Tests
// =============================================================================

mod mock_store_tests {
    use super::*;

    #[tokio::test]
    async fn create_then_update_round_trip() {
        let store = MockTreeStore::new();

        let created = store.create(&leaf("root", "Data")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.data.name, "root");

        let updated = store.update(1, &leaf("root", "edited")).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.data.data.as_deref(), Some("edited"));

        let fetched = store.get(1).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn list_reflects_creates() {
        let store = MockTreeStore::new();
        store.create(&leaf("a", "1")).await.unwrap();
        store.create(&leaf("b", "2")).await.unwrap();

        let records = store.list().await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.data.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn failure_injection_covers_each_operation() {
        let err = StoreError::NetworkError("offline".to_string());

        let store = MockTreeStore::new().fail_on(FailOn::List(err.clone()));
        assert!(store.list().await.is_err());

        let store = MockTreeStore::new().fail_on(FailOn::Get(err.clone()));
        assert!(store.get(1).await.is_err());

        let store = MockTreeStore::new().fail_on(FailOn::Create(err.clone()));
        assert!(store.create(&leaf("a", "1")).await.is_err());

        let store = MockTreeStore::with_trees(vec![TreeRecord {
            id: 1,
            data: leaf("a", "1"),
        }])
        .fail_on(FailOn::Update(err));
        assert!(store.update(1, &leaf("a", "2")).await.is_err());
        // The stored tree is untouched by the failed update
        assert_eq!(
            store.get(1).await.unwrap().data.data.as_deref(),
            Some("1")
        );
    }

    #[tokio::test]
    async fn recorded_operations_carry_payloads() {
        let store = MockTreeStore::new();
        let tree = leaf("root", "Data");
        store.create(&tree).await.unwrap();
        store.update(1, &tree).await.unwrap();

        let ops = store.operations();
        assert_eq!(ops[0], MockOperation::Create { data: tree.clone() });
        assert_eq!(ops[1], MockOperation::Update { id: 1, data: tree });
    }
}

// =============================================================================
// HttpTreeStore Tests (wiremock)
// =============================================================================

mod http_store_tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> HttpTreeStore {
        HttpTreeStore::new(format!("{}/trees", server.uri()))
    }

    #[tokio::test]
    async fn list_parses_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "data": {"name": "root"}},
                {"id": 2, "data": {"name": "other", "data": ""}}
            ])))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let records = store.list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        // name-only shape (the empty root) survives the wire
        assert_eq!(records[0].data.children, None);
        assert_eq!(records[0].data.data, None);
        // empty-string payload is preserved, not treated as absent
        assert_eq!(records[1].data.data.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn create_sends_wrapped_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/trees"))
            .and(body_json(json!({
                "data": {"name": "root", "children": [{"name": "New Child", "data": "Data"}]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "data": {"name": "root", "children": [{"name": "New Child", "data": "Data"}]}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tree = CanonicalNode {
            name: "root".to_string(),
            children: Some(vec![leaf("New Child", "Data")]),
            data: None,
        };

        let store = store_for(&server);
        let record = store.create(&tree).await.unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.data, tree);
    }

    #[tokio::test]
    async fn update_puts_to_tree_url() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/trees/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "data": {"name": "renamed"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server);
        let record = store.update(7, &leaf("renamed", "x")).await.unwrap();
        // The server's copy is what comes back, even when it differs
        assert_eq!(record.data.name, "renamed");
        assert_eq!(record.data.data, None);
    }

    #[tokio::test]
    async fn not_found_maps_with_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trees/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Tree not found"})),
            )
            .mount(&server)
            .await;

        let store = store_for(&server);
        match store.get(99).await {
            Err(StoreError::NotFound(message)) => assert_eq!(message, "Tree not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trees"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let store = store_for(&server);
        match store.list().await {
            Err(StoreError::ApiError { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trees"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let store = store_for(&server);
        assert!(matches!(
            store.list().await,
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Port 1 is never listening
        let store = HttpTreeStore::new("http://127.0.0.1:1/trees");
        assert!(matches!(
            store.list().await,
            Err(StoreError::NetworkError(_))
        ));
    }
}
