/// Email composer - renders a contact submission into an outbound email
use crate::models::{ContactSubmission, OutboundEmail, RelayConfig};

/// Builds the outbound email for a validated submission.
///
/// The result is fully determined by the submission plus the configured
/// sender and recipient addresses; composing the same input twice yields
/// the same output.
pub fn compose(submission: &ContactSubmission, config: &RelayConfig) -> OutboundEmail {
    OutboundEmail {
        from: config.from_email.clone(),
        to: config.to_email.clone(),
        subject: format!("Nouveau message de portfolio de : {}", submission.name),
        html_body: render_html_body(submission),
    }
}

/// Renders the HTML body with each field inserted as labeled text.
///
/// Newlines in the free-text message become explicit `<br>` tags so
/// multi-line input displays correctly in HTML-rendering clients.
fn render_html_body(submission: &ContactSubmission) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.6;">
    <p>Vous avez reçu un nouveau message de votre portfolio :</p>
    <p><strong>Nom :</strong> {}</p>
    <p><strong>Email :</strong> {}</p>
    <hr style="border: 0; border-top: 1px solid #eee;">
    <p><strong>Message :</strong></p>
    <p>{}</p>
</div>"#,
        submission.name,
        submission.email,
        submission.message.replace('\n', "<br>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RelayConfig {
        RelayConfig {
            sendgrid_api_key: "SG.test-key".to_string(),
            from_email: "noreply@example.com".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    fn submission(message: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_body_contains_all_fields() {
        let email = compose(&submission("Bonjour !"), &config());

        assert!(email.html_body.contains("Alice"));
        assert!(email.html_body.contains("alice@example.com"));
        assert!(email.html_body.contains("Bonjour !"));
    }

    #[test]
    fn test_addresses_and_subject_from_config() {
        let email = compose(&submission("Hi"), &config());

        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.subject, "Nouveau message de portfolio de : Alice");
    }

    #[test]
    fn test_newlines_become_break_tags() {
        let email = compose(&submission("Hello\nWorld"), &config());
        assert!(email.html_body.contains("Hello<br>World"));

        let email = compose(&submission("a\nb\nc"), &config());
        assert!(email.html_body.contains("a<br>b<br>c"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let sub = submission("line one\nline two");
        let cfg = config();
        assert_eq!(compose(&sub, &cfg), compose(&sub, &cfg));
    }
}
