// src/store.rs

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};

use crate::models::post::{MAX_CONTENT_CHARS, Post};
use crate::utils::author;

/// Failure modes of store operations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    NotOwner,
    EmptyContent,
    ContentTooLong,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for StoreError {}

/// The ordered in-memory post collection plus its id counter.
///
/// The head of the collection is the newest post. Ids are assigned
/// monotonically and never reused, not even after deletion. Every
/// operation runs atomically under the lock, so check-then-act sequences
/// (ownership, content rules) cannot interleave with other requests.
///
/// Constructed explicitly and injected through `AppState`; tests build
/// their own independent stores.
pub struct PostStore {
    inner: Mutex<Inner>,
}

struct Inner {
    posts: Vec<Post>,
    next_id: i64,
}

impl PostStore {
    /// Empty store; the first created post gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store preloaded with the two welcome posts the demo ships with.
    /// The counter starts past their ids, so the first real post gets id 3.
    pub fn with_demo_posts() -> Self {
        let now = Utc::now();
        let posts = vec![
            Post {
                id: 1,
                content: "¡Bienvenidos a EcuaPost! Esta es la nueva red social ecuatoriana 🇪🇨"
                    .to_string(),
                author_id: "demo-user".to_string(),
                created_at: now,
                author_username: "ecuapost_oficial".to_string(),
                author_display_name: "EcuaPost Oficial".to_string(),
                author_avatar_url:
                    "https://ui-avatars.com/api/?name=EcuaPost&background=3b82f6&color=fff"
                        .to_string(),
                like_count: 15,
                comment_count: 3,
            },
            Post {
                id: 2,
                content:
                    "Probando las funcionalidades de la plataforma. ¡Todo funciona perfectamente! 🚀"
                        .to_string(),
                author_id: "demo-user-2".to_string(),
                created_at: now - Duration::hours(2),
                author_username: "usuario_demo".to_string(),
                author_display_name: "Usuario Demo".to_string(),
                author_avatar_url:
                    "https://ui-avatars.com/api/?name=Usuario+Demo&background=10b981&color=fff"
                        .to_string(),
                like_count: 8,
                comment_count: 1,
            },
        ];

        Self {
            inner: Mutex::new(Inner { posts, next_id: 3 }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Nothing panics while the lock is held, so a poisoned guard still
        // holds consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the full collection, newest first.
    pub fn list(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().posts.is_empty()
    }

    /// Validates the content, allocates the next id, derives the author
    /// display fields and inserts the new post at the head.
    pub fn create(&self, content: &str, author_id: &str) -> Result<Post, StoreError> {
        let content = validate_content(content)?;

        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let post = Post {
            id,
            content,
            author_id: author_id.to_string(),
            created_at: Utc::now(),
            author_username: author::derive_username(author_id),
            author_display_name: author::derive_display_name(author_id),
            author_avatar_url: author::derive_avatar_url(author_id),
            like_count: 0,
            comment_count: 0,
        };

        inner.posts.insert(0, post.clone());
        Ok(post)
    }

    pub fn get(&self, id: i64) -> Result<Post, StoreError> {
        self.lock()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Replaces the content of an existing post and refreshes its
    /// timestamp. Checked in order: existence, ownership, content rules.
    /// The post keeps its id and position in the collection.
    pub fn update(&self, id: i64, author_id: &str, content: &str) -> Result<Post, StoreError> {
        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if post.author_id != author_id {
            return Err(StoreError::NotOwner);
        }

        post.content = validate_content(content)?;
        post.created_at = Utc::now();
        Ok(post.clone())
    }

    /// Removes a post permanently. Checked in order: existence, ownership.
    pub fn delete(&self, id: i64, author_id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = inner
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if inner.posts[index].author_id != author_id {
            return Err(StoreError::NotOwner);
        }

        inner.posts.remove(index);
        Ok(())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Content rules shared by create and edit: non-empty after trimming,
/// at most 280 characters before trimming. Returns the trimmed content.
fn validate_content(raw: &str) -> Result<String, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyContent);
    }
    if raw.chars().count() > MAX_CONTENT_CHARS {
        return Err(StoreError::ContentTooLong);
    }
    Ok(trimmed.to_string())
}
