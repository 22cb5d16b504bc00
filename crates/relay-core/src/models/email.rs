/// Outbound email model
use serde::Serialize;

/// The email handed to the delivery provider. Fully determined by the
/// submission plus the configured sender and recipient addresses; never
/// persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let email = OutboundEmail {
            from: "noreply@example.com".to_string(),
            to: "owner@example.com".to_string(),
            subject: "Subject".to_string(),
            html_body: "<p>Body</p>".to_string(),
        };

        let json = serde_json::to_string(&email).unwrap();
        assert!(json.contains("noreply@example.com"));
        assert!(json.contains("<p>Body</p>"));
    }
}
