use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored post. Ids are generated as v4 UUID strings, but any string key
/// already in the store is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
    pub text: String,
}
