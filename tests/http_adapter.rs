use career_navigator::adapters::api::HttpAnalysisAdapter;
use career_navigator::domain::{AnalysisRequest, DomainError, UNKNOWN_SERVER_ERROR};
use career_navigator::ports::AnalysisPort;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn report_body() -> serde_json::Value {
    json!({
        "role_title": "Software Developer",
        "impact_level": "High Transformation",
        "description": "Builds software.",
        "user_skills": ["Creativity", "Emotional Intelligence", "Programming"],
        "required_skills_for_role": ["Programming", "Cloud Computing"],
        "learning_plan": [{
            "skill_to_learn": "Cloud Computing",
            "suggested_resources": [
                {"title": "AWS Basics", "type": "Course", "url": "https://example.com/aws"}
            ]
        }]
    })
}

fn request(title: &str) -> AnalysisRequest {
    AnalysisRequest::new(title).expect("non-empty title")
}

/// Origin on a local port that nothing listens on.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn posts_trimmed_title_as_json_and_parses_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "job_title": "Software Developer" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let response = adapter
        .analyze(&request("  Software Developer  "))
        .await
        .expect("analysis ok");

    assert_eq!(response.role_title, "Software Developer");
    assert_eq!(response.learning_plan[0].suggested_resources.len(), 1);
}

#[tokio::test]
async fn error_status_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Unknown role" })))
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let err = adapter.analyze(&request("Astronaut")).await.unwrap_err();

    assert!(matches!(err, DomainError::Server(_)));
    assert_eq!(err.to_string(), "Unknown role");
}

#[tokio::test]
async fn error_status_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let err = adapter.analyze(&request("Nurse")).await.unwrap_err();

    assert_eq!(err.to_string(), UNKNOWN_SERVER_ERROR);
}

#[tokio::test]
async fn non_string_error_field_is_shown_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": 42 })))
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let err = adapter.analyze(&request("Nurse")).await.unwrap_err();

    assert_eq!(err.to_string(), "42");
}

#[tokio::test]
async fn success_status_with_error_field_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "Server data not loaded correctly." })),
        )
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let err = adapter.analyze(&request("Nurse")).await.unwrap_err();

    assert!(matches!(err, DomainError::Server(_)));
    assert_eq!(err.to_string(), "Server data not loaded correctly.");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let adapter = HttpAnalysisAdapter::new(&server.uri());
    let err = adapter.analyze(&request("Nurse")).await.unwrap_err();

    assert!(matches!(err, DomainError::Decode(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let uri = closed_port_uri();

    let adapter = HttpAnalysisAdapter::new(&uri);
    let err = adapter.analyze(&request("Nurse")).await.unwrap_err();

    assert!(matches!(err, DomainError::Transport(_)));
    let message = err.to_string();
    assert!(
        message.contains("error sending request"),
        "unexpected transport message: {}",
        message
    );
}
