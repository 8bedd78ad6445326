use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use http::StatusCode;
use mentio::labels::EntityLabel;
use mentio::recognizer::{EntityMention, PatternRecognizer, Recognizer};
use mentio_server::config::ServerConfig;
use mentio_server::{AppState, create_router};
use serde_json::{Value, json};

/// Helper function to create a test server backed by the real recognizer
fn create_test_server() -> TestServer {
    create_test_server_with_config(ServerConfig::default())
}

fn create_test_server_with_config(config: ServerConfig) -> TestServer {
    let recognizer = PatternRecognizer::new().expect("Failed to build recognizer");
    let state = Arc::new(AppState::new(Arc::new(recognizer), config));
    let app = create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_root_redirects_to_docs() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/docs");
}

#[tokio::test]
async fn test_root_redirect_honors_route_prefix() {
    let config = ServerConfig {
        route_prefix: "/api/ner".to_string(),
        ..ServerConfig::default()
    };
    let server = create_test_server_with_config(config);

    let response = server.get("/").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/api/ner/docs");
}

#[tokio::test]
async fn test_openapi_spec_available() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["info"]["title"], "Mentio NER Service");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["recognizer"], "pattern");
    assert_eq!(json["labels"].as_array().unwrap().len(), 18);
}

mod entities {
    use super::*;

    #[tokio::test]
    async fn test_batch_preserves_order_and_record_ids() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "a", "data": {"text": "Paris is lovely."}},
                {"recordId": "b", "data": {"text": "London too."}},
                {"recordId": "c", "data": {"text": ""}}
            ]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let values = json["values"].as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["recordId"], "a");
        assert_eq!(values[1]["recordId"], "b");
        assert_eq!(values[2]["recordId"], "c");
    }

    #[tokio::test]
    async fn test_entities_come_back_in_scan_order() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "Google hired Steve Jobs in Paris."}}
            ]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let entities = json["values"][0]["data"]["entities"].as_array().unwrap();
        let texts: Vec<&str> = entities.iter().map(|e| e["text"].as_str().unwrap()).collect();
        let labels: Vec<&str> = entities.iter().map(|e| e["label"].as_str().unwrap()).collect();
        assert_eq!(texts, vec!["Google", "Steve Jobs", "Paris"]);
        assert_eq!(labels, vec!["ORG", "PERSON", "GPE"]);
    }

    #[tokio::test]
    async fn test_empty_values_yield_empty_values() {
        let server = create_test_server();

        let response = server.post("/entities").json(&json!({"values": []})).await;
        response.assert_status_ok();

        let json: Value = response.json();
        assert_eq!(json, json!({"values": []}));
    }

    #[tokio::test]
    async fn test_empty_text_is_valid_and_yields_no_entities() {
        let server = create_test_server();

        let body = json!({
            "values": [{"recordId": "1", "data": {"text": ""}}]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let record = &json["values"][0];
        assert_eq!(record["recordId"], "1");
        assert_eq!(record["data"]["entities"], json!([]));
        assert!(record.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_fails_alone() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "Paris is lovely."}},
                {"recordId": "2", "data": {}},
                {"recordId": "3", "data": {"text": "Berlin as well."}}
            ]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let values = json["values"].as_array().unwrap();
        assert_eq!(values.len(), 3);

        // Healthy siblings still carry their entities
        assert_eq!(values[0]["data"]["entities"][0]["text"], "Paris");
        assert!(values[0].get("errors").is_none());
        assert_eq!(values[2]["data"]["entities"][0]["text"], "Berlin");

        // The malformed record keeps its slot with an error marker
        assert_eq!(values[1]["recordId"], "2");
        assert_eq!(values[1]["data"]["entities"], json!([]));
        let message = values[1]["errors"][0]["message"].as_str().unwrap();
        assert!(message.contains("data.text"));
    }

    #[tokio::test]
    async fn test_same_batch_twice_yields_identical_output() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "Steve Jobs founded Apple in California."}},
                {"recordId": "2", "data": {"text": "She paid $100 on January 15, 2024."}}
            ]
        });

        let first: Value = server.post("/entities").json(&body).await.json();
        let second: Value = server.post("/entities").json(&body).await.json();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_oversized_batch_is_rejected() {
        let config = ServerConfig {
            max_batch_size: 2,
            ..ServerConfig::default()
        };
        let server = create_test_server_with_config(config);

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "a"}},
                {"recordId": "2", "data": {"text": "b"}},
                {"recordId": "3", "data": {"text": "c"}}
            ]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let json: Value = response.json();
        assert_eq!(json["error"], "batch_too_large");
    }
}

mod entities_by_type {
    use super::*;

    const ALL_CATEGORY_FIELDS: [&str; 18] = [
        "cardinals", "dates", "events", "facilities", "gpes", "languages", "laws",
        "locations", "money", "norps", "ordinals", "organizations", "percentages",
        "people", "products", "quanities", "times", "worksOfArt",
    ];

    #[tokio::test]
    async fn test_example_sentence_fills_only_gpes() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "Paris is the capital of France."}}
            ]
        });

        let response = server.post("/entities_by_type").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let values = json["values"].as_array().unwrap();
        assert_eq!(values.len(), 1);

        let record = &values[0];
        assert_eq!(record["recordId"], "1");
        assert!(record.get("errors").is_none());

        let data = record["data"].as_object().unwrap();
        assert_eq!(data["gpes"], json!(["Paris", "France"]));
        for field in ALL_CATEGORY_FIELDS {
            if field != "gpes" {
                assert_eq!(data[field], json!([]), "expected {field} to be empty");
            }
        }
    }

    #[tokio::test]
    async fn test_all_categories_present_for_empty_text() {
        let server = create_test_server();

        let body = json!({
            "values": [{"recordId": "1", "data": {"text": ""}}]
        });

        let response = server.post("/entities_by_type").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let record = &json["values"][0];
        assert!(record.get("errors").is_none());

        let data = record["data"].as_object().unwrap();
        assert_eq!(data.len(), 18);
        for field in ALL_CATEGORY_FIELDS {
            assert_eq!(data[field], json!([]), "expected {field} to be empty");
        }
    }

    #[tokio::test]
    async fn test_categories_collect_matches_in_source_order() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "She paid $100 in Tokyo on January 15, 2024."}}
            ]
        });

        let response = server.post("/entities_by_type").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let data = &json["values"][0]["data"];
        assert_eq!(data["money"], json!(["$100"]));
        assert_eq!(data["gpes"], json!(["Tokyo"]));
        assert_eq!(data["dates"], json!(["January 15, 2024"]));
    }

    #[tokio::test]
    async fn test_empty_values_yield_empty_values() {
        let server = create_test_server();

        let response = server
            .post("/entities_by_type")
            .json(&json!({"values": []}))
            .await;
        response.assert_status_ok();

        let json: Value = response.json();
        assert_eq!(json, json!({"values": []}));
    }

    #[tokio::test]
    async fn test_malformed_record_keeps_slot_with_all_categories_empty() {
        let server = create_test_server();

        let body = json!({
            "values": [
                {"recordId": "1", "data": {"text": "Paris is lovely."}},
                {"recordId": "2"}
            ]
        });

        let response = server.post("/entities_by_type").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let values = json["values"].as_array().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["data"]["gpes"], json!(["Paris"]));

        let failed = &values[1];
        assert_eq!(failed["recordId"], "2");
        assert!(failed["errors"][0]["message"].as_str().is_some());
        for field in ALL_CATEGORY_FIELDS {
            assert_eq!(failed["data"][field], json!([]));
        }
    }
}

mod recognizer_injection {
    use super::*;

    /// Deterministic fake standing in for the real pipeline: always returns
    /// one mapped and one unmapped mention.
    #[derive(Debug)]
    struct FakeRecognizer;

    #[async_trait]
    impl Recognizer for FakeRecognizer {
        async fn recognize(&self, _text: &str) -> mentio::Result<Vec<EntityMention>> {
            Ok(vec![
                EntityMention::new("Paris", EntityLabel::Gpe, 0, 5),
                EntityMention {
                    text: "widget".to_string(),
                    label: "WIDGET".to_string(),
                    start: 6,
                    end: 12,
                },
            ])
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn supported_labels(&self) -> Vec<EntityLabel> {
            vec![EntityLabel::Gpe]
        }
    }

    fn create_fake_server() -> TestServer {
        let state = Arc::new(AppState::new(
            Arc::new(FakeRecognizer),
            ServerConfig::default(),
        ));
        TestServer::new(create_router(state)).expect("Failed to create test server")
    }

    #[tokio::test]
    async fn test_handlers_use_the_injected_recognizer() {
        let server = create_fake_server();

        let body = json!({
            "values": [{"recordId": "1", "data": {"text": "anything"}}]
        });

        let response = server.post("/entities").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let entities = json["values"][0]["data"]["entities"].as_array().unwrap();
        // Flat mode echoes the recognizer output verbatim, unmapped label included
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[1]["label"], "WIDGET");
    }

    #[tokio::test]
    async fn test_grouped_mode_drops_unmapped_labels() {
        let server = create_fake_server();

        let body = json!({
            "values": [{"recordId": "1", "data": {"text": "anything"}}]
        });

        let response = server.post("/entities_by_type").json(&body).await;
        response.assert_status_ok();

        let json: Value = response.json();
        let data = json["values"][0]["data"].as_object().unwrap();
        assert_eq!(data["gpes"], json!(["Paris"]));

        let total: usize = data.values().map(|v| v.as_array().unwrap().len()).sum();
        assert_eq!(total, 1, "the unmapped mention must not appear anywhere");
    }
}
