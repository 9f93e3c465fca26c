use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An anonymous message-board entry. Immutable once stored.
///
/// `timestamp` is assigned by the server at insert time; clients never
/// supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
