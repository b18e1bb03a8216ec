use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use atlas_reserve::templates::{self, ADMIN_SUBJECT, CUSTOMER_SUBJECT};
use atlas_reserve::{reservation_reference, OutboundEmail, ReservationRequest};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct SendEmailResponse {
    success: bool,
    message: String,
    reference: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/send-email", post(send_email))
}

/// Reservation intake: validate the payload, render both bodies and dispatch
/// the customer confirmation followed by the admin notification.
///
/// Stateless and not idempotent: nothing is persisted, and resubmitting the
/// same payload dispatches a fresh set of emails.
async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SendEmailResponse>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.contains("application/json") {
        return Err(AppError::ValidationError(
            "Content-Type doit être application/json".to_string(),
        ));
    }

    let request: ReservationRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::ValidationError("Corps de requête JSON invalide".to_string()))?;
    request.validate()?;

    // Caller-supplied reference wins over a generated one.
    let reference = match request.reference.as_deref() {
        Some(r) if !r.trim().is_empty() => r.to_string(),
        _ => reservation_reference(),
    };

    let customer = OutboundEmail {
        from_name: state.sender_name.clone(),
        to: request.email.clone(),
        subject: CUSTOMER_SUBJECT.to_string(),
        html_body: templates::customer_email(&request, &reference, &state.contact),
    };
    state.mailer.send(customer).await?;

    // The admin copy is an internal courtesy: the customer has already been
    // notified, so a failure here is logged but does not fail the request.
    if let Some(admin_address) = &state.admin_email {
        let admin = OutboundEmail {
            from_name: "Système de Réservation".to_string(),
            to: admin_address.clone(),
            subject: ADMIN_SUBJECT.to_string(),
            html_body: templates::admin_email(&request, &reference),
        };
        if let Err(err) = state.mailer.send(admin).await {
            error!(reference = %reference, "notification admin échouée: {}", err);
        }
    }

    info!(reference = %reference, "demande de réservation traitée");

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email de confirmation envoyé avec succès".to_string(),
        reference,
    }))
}
