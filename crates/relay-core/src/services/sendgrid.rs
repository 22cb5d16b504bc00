/// SendGrid email delivery binding
use crate::error::RelayError;
use crate::models::OutboundEmail;
use async_trait::async_trait;
use serde_json::json;

/// SendGrid acknowledges an accepted message with 202.
pub const SENDGRID_ACCEPTED_STATUS: u16 = 202;

const SENDGRID_BASE_URL: &str = "https://api.sendgrid.com";

/// The provider's verdict on a delivery attempt.
///
/// Carries the raw status and body so the caller decides what counts as
/// accepted; transport failures never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn is_accepted(&self) -> bool {
        self.status == SENDGRID_ACCEPTED_STATUS
    }
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Submits one email to the provider. Exactly one network call, no
    /// retries; a returned `ProviderResponse` may still be a rejection.
    async fn send(&self, email: &OutboundEmail) -> Result<ProviderResponse, RelayError>;
}

/// Concrete binding to the SendGrid v3 mail send API.
pub struct SendGridProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SendGridProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, SENDGRID_BASE_URL)
    }

    /// Base URL override for tests against a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<ProviderResponse, RelayError> {
        let payload = json!({
            "personalizations": [{
                "to": [{ "email": email.to }]
            }],
            "from": { "email": email.from },
            "subject": email.subject,
            "content": [{
                "type": "text/html",
                "value": email.html_body,
            }],
        });

        let response = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Provider(format!("SendGrid request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Provider(format!("Failed to read SendGrid response: {}", e)))?;

        tracing::debug!(status = status, "SendGrid responded");

        Ok(ProviderResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "noreply@example.com".to_string(),
            to: "owner@example.com".to_string(),
            subject: "Nouveau message de portfolio de : Alice".to_string(),
            html_body: "<p>Hello<br>World</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sends_v3_payload_with_bearer_auth() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(bearer_token("SG.test-key"))
            .and(body_partial_json(serde_json::json!({
                "from": { "email": "noreply@example.com" },
                "subject": "Nouveau message de portfolio de : Alice",
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let provider = SendGridProvider::with_base_url("SG.test-key", server.uri());
        let response = provider.send(&email()).await.unwrap();

        assert_eq!(response.status, 202);
        assert!(response.is_accepted());
    }

    #[tokio::test]
    async fn test_rejection_passes_through_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad sender"))
            .mount(&server)
            .await;

        let provider = SendGridProvider::with_base_url("SG.test-key", server.uri());
        let response = provider.send(&email()).await.unwrap();

        assert!(!response.is_accepted());
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "bad sender");
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_provider_error() {
        // Nothing listening on this port
        let provider =
            SendGridProvider::with_base_url("SG.test-key", "http://127.0.0.1:1");
        let result = provider.send(&email()).await;

        assert!(matches!(result, Err(RelayError::Provider(_))));
    }
}
