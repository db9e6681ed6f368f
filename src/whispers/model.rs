/**
 * Whisper Model
 *
 * The message resource. The wire format keeps the camelCase field names
 * the API has always used (`creationDate`, `updatedDate`).
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A message record owned by its author
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Whisper {
    /// Unique whisper ID (UUID, store-generated)
    pub id: Uuid,
    /// Message text
    pub message: String,
    /// Id of the creating user; immutable after creation
    pub author: Uuid,
    /// Set once at creation
    pub creation_date: DateTime<Utc>,
    /// Refreshed on every mutation; always >= creation_date
    pub updated_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case_dates() {
        let now = Utc::now();
        let whisper = Whisper {
            id: Uuid::new_v4(),
            message: "hi".to_string(),
            author: Uuid::new_v4(),
            creation_date: now,
            updated_date: now,
        };

        let json = serde_json::to_value(&whisper).unwrap();
        assert!(json.get("creationDate").is_some());
        assert!(json.get("updatedDate").is_some());
        assert!(json.get("creation_date").is_none());
        assert_eq!(json["message"], "hi");
    }
}
