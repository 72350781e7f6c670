//! File-backed persistence.
//!
//! The whole store lives in one JSON document. Every operation reads it in
//! full, mutates the in-memory copy and writes it back in full.

mod error;
mod schema;

pub use error::DbError;
pub use schema::Schema;

use crate::models::{NewUser, Post, User, UserUpdate};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

pub type DbResult<T> = Result<T, DbError>;

/// Client owning the backing store file.
///
/// Read-modify-write cycles are serialised through `write_gate`; writes go
/// through a temporary file and a rename so readers never see a torn file.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    write_gate: Mutex<()>,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_gate: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store with an empty schema if the file does not exist.
    pub async fn ensure(&self) -> DbResult<()> {
        let _guard = self.write_gate.lock().await;

        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        if exists {
            debug!("Using existing database at {}", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        self.write_all(&Schema::default()).await?;
        info!("Initialised empty database at {}", self.path.display());
        Ok(())
    }

    pub async fn read_all(&self) -> DbResult<Schema> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        serde_json::from_slice(&data).map_err(|source| DbError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    pub async fn write_all(&self, schema: &Schema) -> DbResult<()> {
        let data = serde_json::to_vec(schema).map_err(DbError::Encode)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &data)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        Ok(())
    }

    pub async fn create_user(&self, new_user: NewUser) -> DbResult<User> {
        ensure_eligible(&new_user)?;

        let _guard = self.write_gate.lock().await;
        let mut schema = self.read_all().await?;

        if schema.users.contains_key(&new_user.email) {
            return Err(DbError::Conflict("User already exists".into()));
        }

        let user = User::from_new(new_user, Utc::now());
        schema.users.insert(user.email.clone(), user.clone());
        self.write_all(&schema).await?;

        info!("User created: {}", user.email);
        Ok(user)
    }

    pub async fn update_user(&self, email: &str, update: UserUpdate) -> DbResult<User> {
        let _guard = self.write_gate.lock().await;
        let mut schema = self.read_all().await?;

        let user = schema
            .users
            .get_mut(email)
            .ok_or_else(|| DbError::NotFound("User doesn't exist".into()))?;
        user.apply(update);
        let user = user.clone();

        self.write_all(&schema).await?;

        info!("User updated: {}", email);
        Ok(user)
    }

    pub async fn get_user(&self, email: &str) -> DbResult<User> {
        let schema = self.read_all().await?;

        schema
            .users
            .get(email)
            .cloned()
            .ok_or_else(|| DbError::NotFound("User doesn't exist".into()))
    }

    /// Remove a user. Absent emails are not an error. Posts written by the
    /// user are left in place.
    pub async fn delete_user(&self, email: &str) -> DbResult<()> {
        let _guard = self.write_gate.lock().await;
        let mut schema = self.read_all().await?;

        if schema.users.remove(email).is_some() {
            info!("User deleted: {}", email);
        }

        self.write_all(&schema).await
    }

    pub async fn create_post(&self, user_email: &str, text: &str) -> DbResult<Post> {
        if user_email.is_empty() {
            return Err(DbError::Validation("email can't be empty".into()));
        }

        let _guard = self.write_gate.lock().await;
        let mut schema = self.read_all().await?;

        if !schema.users.contains_key(user_email) {
            return Err(DbError::NotFound("User does not exist".into()));
        }

        let post = Post {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            user_email: user_email.to_string(),
            text: text.to_string(),
        };
        schema.posts.insert(post.id.clone(), post.clone());
        self.write_all(&schema).await?;

        info!("Post created: {} by user {}", post.id, user_email);
        Ok(post)
    }

    /// All posts written by `user_email`, in no particular order.
    pub async fn get_posts(&self, user_email: &str) -> DbResult<Vec<Post>> {
        let schema = self.read_all().await?;

        Ok(schema
            .posts
            .into_values()
            .filter(|post| post.user_email == user_email)
            .collect())
    }

    /// Remove a post. Unknown ids are not an error.
    pub async fn delete_post(&self, id: &str) -> DbResult<()> {
        let _guard = self.write_gate.lock().await;
        let mut schema = self.read_all().await?;

        if schema.posts.remove(id).is_some() {
            info!("Post deleted: {}", id);
        }

        self.write_all(&schema).await
    }

    fn io_error(&self, source: std::io::Error) -> DbError {
        DbError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Reports the first failed rule in field order: email, password, age.
fn ensure_eligible(new_user: &NewUser) -> DbResult<()> {
    let Err(errors) = new_user.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    let reason = ["email", "password", "age"]
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    Err(DbError::Validation(reason))
}
