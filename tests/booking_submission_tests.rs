use barbershop::core::state::BookingRequest;
use barbershop::mail::{EmailJsConfig, EmailJsProvider, Templates, submit_booking};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const SEND_PATH: &str = "/api/v1.0/email/send";

fn provider_for(server: &MockServer) -> EmailJsProvider {
    EmailJsProvider::new(EmailJsConfig {
        service_id: "service_test".to_string(),
        public_key: "public_test".to_string(),
        private_key: None,
        base_url: Some(server.uri()),
    })
}

fn templates() -> Templates {
    Templates {
        owner_notification: "template_owner".to_string(),
        auto_reply: "template_reply".to_string(),
    }
}

fn request() -> BookingRequest {
    BookingRequest {
        name: "Sam Carter".to_string(),
        email: "sam@example.com".to_string(),
        service: "Classic Cut".to_string(),
        day: NaiveDate::from_ymd_opt(2026, 10, 17),
    }
}

// ============================================================================
// Booking Flow
// ============================================================================

#[tokio::test]
async fn test_booking_sends_owner_then_reply_with_booking_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({
            "service_id": "service_test",
            "user_id": "public_test",
            "template_params": {
                "name": "Sam Carter",
                "email": "sam@example.com",
                "title": "New booking request from Sam Carter",
                "message": "Service: Classic Cut\nPreferred day: Saturday, October 17",
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert_eq!(submit_booking(&provider, &templates(), &request()).await, Ok(()));

    let requests = mock_server.received_requests().await.unwrap();
    let template_ids: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["template_id"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(template_ids, vec!["template_owner", "template_reply"]);
}

#[tokio::test]
async fn test_failed_booking_notification_skips_auto_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({ "template_id": "template_owner" })))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({ "template_id": "template_reply" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = submit_booking(&provider, &templates(), &request())
        .await
        .unwrap_err();
    assert_eq!(err.code, "503");
}
