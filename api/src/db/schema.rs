use crate::models::{Post, User, null_as_default};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The entire store: users keyed by email, posts keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    // Older stores were initialised as `{"users":null,"posts":null}`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: HashMap<String, User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: HashMap<String, Post>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn null_and_missing_maps_decode_empty() {
        let schema: Schema = serde_json::from_value(json!({"users": null, "posts": null})).unwrap();
        assert_eq!(schema, Schema::default());

        let schema: Schema = serde_json::from_value(json!({})).unwrap();
        assert_eq!(schema, Schema::default());
    }

    #[test]
    fn decodes_camel_case_records() {
        let id = Uuid::new_v4().to_string();
        let schema: Schema = serde_json::from_value(json!({
            "users": {
                "a@b.com": {
                    "createdAt": "2024-03-01T12:00:00.123456789Z",
                    "email": "a@b.com",
                    "password": "p",
                    "name": "A",
                    "age": 20
                }
            },
            "posts": {
                id.clone(): {
                    "id": id,
                    "createdAt": "2024-03-01T12:05:00Z",
                    "userEmail": "a@b.com",
                    "text": "hi"
                }
            }
        }))
        .unwrap();

        let user = &schema.users["a@b.com"];
        assert_eq!(user.age, 20);
        assert_eq!(
            user.created_at.to_rfc3339(),
            "2024-03-01T12:00:00.123456789+00:00"
        );
        assert_eq!(schema.posts[&id].user_email, "a@b.com");
    }

    #[test]
    fn accepts_post_keys_that_are_not_uuids() {
        let schema: Schema = serde_json::from_value(json!({
            "users": {},
            "posts": {
                "legacy-1": {
                    "id": "legacy-1",
                    "createdAt": "2023-11-05T08:30:00Z",
                    "userEmail": "a@b.com",
                    "text": "imported"
                }
            }
        }))
        .unwrap();

        assert_eq!(schema.posts["legacy-1"].text, "imported");
    }
}
