use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use screener_ai::Recommender;
use screener_core::keys;
use screener_engine::Engine;
use screener_engine::fallback::NOTES;
use screener_server::app;
use screener_server::state::AppState;

fn test_app(dir: &tempfile::TempDir) -> Router {
    let recommender = Recommender::rules_only(Engine::default());
    app(AppState::new(recommender, dir.path().to_path_buf(), 4001))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn intake() -> Value {
    json!({
        "child_name": "Robin",
        "age": "2",
        "eye_contact": "Poor",
        "speech_level": "Fluent",
        "social_response": "Active",
        "sensory_reactions": "Typical"
    })
}

#[tokio::test]
async fn status_and_health() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Server is running");
    assert_eq!(body["port"], 4001);

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn analyze_reports_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) =
        post_json(&app, "/analyze", r#"{"age": "4", "eye_contact": "  ", "speech_level": "Fluent"}"#)
            .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(
        body["missing_fields"],
        json!(["eye_contact", "social_response", "sensory_reactions"])
    );
    assert_eq!(
        body["message"],
        "The following fields are required: eye_contact, social_response, sensory_reactions"
    );
    assert_eq!(body["required_fields"].as_array().unwrap().len(), 5);
    assert_eq!(body["example"]["eye_contact"], "Moderate");
}

#[tokio::test]
async fn analyze_rejects_non_objects() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    for body in ["not json", "[1, 2]", "\"text\""] {
        let (status, body) = post_json(&app, "/analyze", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
        assert!(body.get("missing_fields").is_none());
    }
}

#[tokio::test]
async fn analyze_rejects_inconsistent_emotion_data() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let mut body = intake();
    body["emotion_data"] = json!({
        "dominant_emotion": "sad",
        "confidence": 90.0,
        "all_emotions": { "sad": 40.0, "happy": 60.0 }
    });

    let (status, body) = post_json(&app, "/analyze", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("confidence"));
}

#[tokio::test]
async fn analyze_stores_and_serves_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (status, body) = post_json(&app, "/analyze", &intake().to_string()).await;
    assert_eq!(status, StatusCode::OK);

    assert!(
        body["focus_areas"]
            .as_array()
            .unwrap()
            .contains(&json!("Eye contact & visual attention"))
    );
    assert_eq!(body["therapy_goals"].as_array().unwrap().len(), 3);
    assert_eq!(body["activities"].as_array().unwrap().len(), 8);
    assert_eq!(body["notes"], NOTES);
    assert_eq!(body["_input"], intake());

    let id = body["_record_id"].as_str().unwrap().to_string();

    let (status, records) = get_json(&app, "/records").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["id"], id.as_str());
    assert_eq!(records[0]["source"], "rule_engine");

    let (status, record) = get_json(&app, &format!("/records/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["input"]["child_name"], "Robin");
    assert_eq!(record["output"]["therapy_goals"], body["therapy_goals"]);
}

#[tokio::test]
async fn export_returns_and_keeps_a_docx() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let (_, body) = post_json(&app, "/analyze", &intake().to_string()).await;
    let id: uuid::Uuid = body["_record_id"].as_str().unwrap().parse().unwrap();

    let request = Request::get(format!("/records/{id}/export"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"PK"));

    let stored = std::fs::read(dir.path().join(keys::report_docx(id))).unwrap();
    assert_eq!(stored, bytes.to_vec());
}

#[tokio::test]
async fn unknown_record_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let id = uuid::Uuid::new_v4();
    let (status, body) = get_json(&app, &format!("/records/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));

    let (status, _) = get_json(&app, &format!("/records/{id}/export")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_record_list() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get_json(&test_app(&dir), "/records").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn emotion_estimate_from_photo() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir);

    let request = Request::post("/emotion")
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(Body::from(vec![0xff, 0xd8, 0xff, 0xe0, 1, 2, 3]))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let estimate: screener_core::models::emotion::EmotionEstimate =
        serde_json::from_slice(&body).unwrap();
    estimate.check_invariants().unwrap();

    let request = Request::post("/emotion").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
