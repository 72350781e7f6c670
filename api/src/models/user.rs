use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored user. The email doubles as the primary key and never changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i64,
}

/// Fields accepted when registering a user.
///
/// The `Validate` rules are the eligibility check run before anything is
/// written to the store.
#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub struct NewUser {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    #[validate(length(min = 1, message = "email can't be empty"))]
    pub email: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    #[validate(length(min = 1, message = "password can't be empty"))]
    pub password: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    #[validate(range(min = 18, message = "age must be at least 18 years old"))]
    pub age: i64,
}

/// Mutable user fields. Email is deliberately absent: it is the key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub password: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub age: i64,
}

impl User {
    pub fn from_new(new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            email: new_user.email,
            password: new_user.password,
            name: new_user.name,
            age: new_user.age,
        }
    }

    /// Overwrite the mutable fields, leaving `email` and `created_at` alone.
    pub fn apply(&mut self, update: UserUpdate) {
        self.password = update.password;
        self.name = update.name;
        self.age = update.age;
    }
}
