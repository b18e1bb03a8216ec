use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use atlas_api::{app, AppState};
use atlas_reserve::templates::ContactDetails;
use atlas_reserve::{MailError, Mailer, OutboundEmail};

/// Records every dispatch; optionally fails from the nth send onwards so the
/// partial-delivery policy can be exercised.
struct MockMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_from: Option<usize>,
}

impl MockMailer {
    fn new(fail_from: Option<usize>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from,
        }
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: OutboundEmail) -> Result<(), MailError> {
        let mut sent = self.sent.lock().unwrap();
        if let Some(n) = self.fail_from {
            if sent.len() >= n {
                return Err(MailError::Unavailable("connexion refusée".to_string()));
            }
        }
        sent.push(mail);
        Ok(())
    }
}

fn test_app(admin_email: Option<&str>, fail_from: Option<usize>) -> (Router, Arc<MockMailer>) {
    let mailer = Arc::new(MockMailer::new(fail_from));
    let state = AppState {
        mailer: mailer.clone(),
        sender_name: "Luxury Car Rental Morocco".to_string(),
        admin_email: admin_email.map(str::to_string),
        contact: ContactDetails {
            phone: "+212 6 00 00 00 00".to_string(),
            email: "contact@luxurycar.ma".to_string(),
        },
    };
    (app(state), mailer)
}

fn reservation_payload() -> Value {
    json!({
        "email": "a@b.com",
        "firstName": "Jean",
        "lastName": "Dupont",
        "pickupDate": "2025-06-01",
        "returnDate": "2025-06-05"
    })
}

fn post_json(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_happy_path_sends_customer_then_admin() {
    let (app, mailer) = test_app(Some("admin@luxurycar.ma"), None);

    let response = app.oneshot(post_json(&reservation_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let reference = body["reference"].as_str().unwrap();
    assert_eq!(reference.len(), 8);
    assert!(reference
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "a@b.com");
    assert_eq!(sent[0].subject, "Confirmation de votre réservation de véhicule");
    assert!(sent[0].html_body.contains("Jean Dupont"));
    assert!(sent[0].html_body.contains(reference));
    assert_eq!(sent[1].to, "admin@luxurycar.ma");
    assert_eq!(sent[1].subject, "Nouvelle réservation de véhicule");
    assert!(sent[1].html_body.contains(reference));
}

#[tokio::test]
async fn test_missing_required_field_is_400() {
    let (app, mailer) = test_app(Some("admin@luxurycar.ma"), None);

    let mut payload = reservation_payload();
    payload.as_object_mut().unwrap().remove("returnDate");

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Des champs obligatoires sont manquants");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_empty_required_field_is_400() {
    let (app, _mailer) = test_app(None, None);

    let mut payload = reservation_payload();
    payload["email"] = json!("   ");

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_content_type_is_400_regardless_of_body() {
    let (app, mailer) = test_app(Some("admin@luxurycar.ma"), None);

    let request = Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(reservation_payload().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (app, _mailer) = test_app(None, None);

    let request = Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_caller_supplied_reference_wins() {
    let (app, mailer) = test_app(None, None);

    let mut payload = reservation_payload();
    payload["reference"] = json!("MYREF123");

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["reference"], "MYREF123");
    assert!(mailer.sent()[0].html_body.contains("MYREF123"));
}

#[tokio::test]
async fn test_no_admin_email_means_single_dispatch() {
    let (app, mailer) = test_app(None, None);

    let response = app.oneshot(post_json(&reservation_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@b.com");
}

#[tokio::test]
async fn test_duplicate_submission_dispatches_twice() {
    // No idempotency: the same payload twice means two independent sends.
    let (app, mailer) = test_app(None, None);
    let payload = reservation_payload();

    let first = app.clone().oneshot(post_json(&payload)).await.unwrap();
    let second = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_customer_send_failure_is_500_with_source_message() {
    let (app, _mailer) = test_app(Some("admin@luxurycar.ma"), Some(0));

    let response = app.oneshot(post_json(&reservation_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Erreur lors de l'envoi de l'email"));
    assert!(message.contains("connexion refusée"));
}

#[tokio::test]
async fn test_admin_send_failure_is_still_success() {
    // Partial-delivery policy: the customer was notified, so the request
    // succeeds even though the admin copy failed.
    let (app, mailer) = test_app(Some("admin@luxurycar.ma"), Some(1));

    let response = app.oneshot(post_json(&reservation_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_preflight_gets_permissive_cors() {
    let (app, _mailer) = test_app(None, None);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/send-email")
        .header(header::ORIGIN, "https://luxurycar.ma")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
