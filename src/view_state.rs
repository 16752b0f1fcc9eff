// src/view_state.rs

use std::collections::HashMap;

use crate::models::post::Post;

/// Session-local engagement flags for a single post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engagement {
    pub liked: bool,
    pub retweeted: bool,
    pub bookmarked: bool,
}

/// The client's ephemeral engagement ledger, keyed by post id.
///
/// Likes, retweets and bookmarks are session-local view-state: they are
/// never written back to the post store, and dropping the ledger loses
/// them. Keeping them here, instead of on `Post`, keeps the durable record
/// and the per-session decoration apart.
#[derive(Debug, Default)]
pub struct ViewState {
    entries: HashMap<i64, Engagement>,
    bookmark_order: Vec<i64>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the like flag and returns the new state.
    pub fn toggle_like(&mut self, post_id: i64) -> bool {
        let entry = self.entries.entry(post_id).or_default();
        entry.liked = !entry.liked;
        entry.liked
    }

    /// Flips the retweet flag and returns the new state.
    pub fn toggle_retweet(&mut self, post_id: i64) -> bool {
        let entry = self.entries.entry(post_id).or_default();
        entry.retweeted = !entry.retweeted;
        entry.retweeted
    }

    /// Flips the bookmark flag and returns the new state. The bookmark
    /// list keeps insertion order; un-bookmarking removes the entry.
    pub fn toggle_bookmark(&mut self, post_id: i64) -> bool {
        let bookmarked = {
            let entry = self.entries.entry(post_id).or_default();
            entry.bookmarked = !entry.bookmarked;
            entry.bookmarked
        };

        if bookmarked {
            self.bookmark_order.push(post_id);
        } else {
            self.bookmark_order.retain(|&id| id != post_id);
        }

        bookmarked
    }

    /// Current flags for a post; all false for posts never touched.
    pub fn engagement(&self, post_id: i64) -> Engagement {
        self.entries.get(&post_id).copied().unwrap_or_default()
    }

    /// Bookmarked post ids in the order they were saved.
    pub fn bookmarked_ids(&self) -> &[i64] {
        &self.bookmark_order
    }

    /// The like count the feed shows: the server-side base count plus the
    /// session's own like, if any.
    pub fn displayed_like_count(&self, post: &Post) -> i32 {
        post.like_count + i32::from(self.engagement(post.id).liked)
    }
}
