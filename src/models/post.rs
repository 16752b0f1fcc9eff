use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum post length, counted in characters on the raw (untrimmed) input.
pub const MAX_CONTENT_CHARS: usize = 280;

/// A published post.
///
/// The author display fields are derived from the author id once at
/// creation time and stored denormalized; they are never refreshed, even
/// if the same author id later produces different display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub author_id: String,

    /// Set at creation, rewritten on every successful edit.
    pub created_at: chrono::DateTime<chrono::Utc>,

    pub author_username: String,
    pub author_display_name: String,
    pub author_avatar_url: String,

    pub like_count: i32,
    pub comment_count: i32,
}

/// DTO for creating a new post.
///
/// Fields are `Option` so that absent body fields reach the ordered
/// validation checks in the handler instead of failing deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(max = 280, message = "Content must not exceed 280 characters"))]
    pub content: Option<String>,

    pub author_id: Option<String>,
}

/// DTO for editing a post. Content rules are enforced by the store after
/// the existence and ownership checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub author_id: Option<String>,
}

/// DTO for deleting a post.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    pub author_id: Option<String>,
}
