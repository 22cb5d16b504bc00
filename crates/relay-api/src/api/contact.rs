/// Contact form endpoint
use axum::{Json, extract::State};
use relay_core::email::compose;
use relay_core::models::ContactSubmission;
use relay_core::utils::logging::{redact_body, redact_email};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub status: String,
    pub message: String,
}

/// Relays one contact-form submission to the configured recipient.
///
/// Validates the payload, composes the email and makes a single delivery
/// attempt. No retries and nothing is persisted; a failed attempt is
/// surfaced to the caller and dropped.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactResponse>, ApiError> {
    submission.validate()?;

    info!(
        from = %redact_email(&submission.email),
        message = %redact_body(&submission.message),
        "Relaying contact form submission"
    );

    let email = compose(&submission, &ctx.config);

    let response = ctx.provider.send(&email).await.map_err(|e| {
        // Full detail stays server-side; the caller gets a generic message.
        error!("Erreur lors de l'envoi de l'email: {}", e);
        ApiError::Internal("Erreur serveur lors de l'envoi de l'email".to_string())
    })?;

    if !response.is_accepted() {
        error!(
            status = response.status,
            body = %response.body,
            "Provider rejected the email"
        );
        return Err(ApiError::Delivery {
            status: response.status,
            body: response.body,
        });
    }

    info!(status = response.status, "Email accepted for delivery");

    Ok(Json(ContactResponse {
        status: "succès".to_string(),
        message: "Email envoyé !".to_string(),
    }))
}
