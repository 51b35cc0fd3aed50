use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stored recipient/key/value/lastSent record that is the system's only
/// entity. Field names stay camelCase on the wire and on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: i64,
    pub recipient_email: String,
    pub key: String,
    pub value: String,
    /// Time of the last successful send, null until the first one.
    pub last_sent: Option<DateTime<Utc>>,
}

/// Next id over the loaded collection: max existing id + 1, or 1 when empty.
pub fn next_id(credentials: &[Credential]) -> i64 {
    credentials.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
}

/// Key uniqueness is checked with a linear scan at insert time.
pub fn key_exists(credentials: &[Credential], key: &str) -> bool {
    credentials.iter().any(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn credential(id: i64, key: &str) -> Credential {
        Credential {
            id,
            recipient_email: "someone@example.com".to_string(),
            key: key.to_string(),
            value: "secret".to_string(),
            last_sent: None,
        }
    }

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let credentials = vec![credential(1, "a"), credential(7, "b"), credential(3, "c")];
        assert_eq!(next_id(&credentials), 8);
    }

    #[test]
    fn test_key_exists_matches_exactly() {
        let credentials = vec![credential(1, "API_KEY")];
        assert!(key_exists(&credentials, "API_KEY"));
        assert!(!key_exists(&credentials, "api_key"));
    }

    #[test]
    fn test_serializes_camel_case_with_null_last_sent() {
        let json = serde_json::to_value(credential(1, "API_KEY")).unwrap();
        assert_eq!(json["recipientEmail"], "someone@example.com");
        assert_eq!(json["key"], "API_KEY");
        assert!(json["lastSent"].is_null());
    }

    #[test]
    fn test_deserializes_last_sent_timestamp() {
        let raw = r#"{
            "id": 2,
            "recipientEmail": "someone@example.com",
            "key": "DB_PASSWORD",
            "value": "hunter2",
            "lastSent": "2025-03-04T12:30:00Z"
        }"#;
        let parsed: Credential = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, 2);
        assert!(parsed.last_sent.is_some());
    }

    proptest! {
        #[test]
        fn next_id_exceeds_every_existing_id(ids in proptest::collection::vec(1i64..10_000, 0..50)) {
            let credentials: Vec<Credential> =
                ids.iter().enumerate().map(|(i, &id)| credential(id, &format!("k{i}"))).collect();
            let next = next_id(&credentials);
            prop_assert!(credentials.iter().all(|c| c.id < next));
        }
    }
}
