//! Feed post event type.
//!
//! This module contains FeedPost, a concrete time-stamped event used by the
//! replay tool and the demos. Any other type implementing
//! [`TimelineEvent`] works with the engine just as well.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timeline::types::event::TimelineEvent;

/// A single post in a social feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPost {
    /// Server-assigned identifier, larger means newer
    pub id: u64,
    /// Display name of the author
    #[serde(default)]
    pub author: String,
    /// Text content of the post
    #[serde(default)]
    pub body: String,
    /// When the post was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl FeedPost {
    /// Creates a new post stamped with the current time
    pub fn new(id: u64, author: impl Into<String>, body: impl Into<String>) -> Self {
        FeedPost {
            id,
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a new post with an explicit creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl TimelineEvent for FeedPost {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_creation() {
        let post = FeedPost::new(12, "ada", "hello");
        assert_eq!(post.id(), 12);
        assert_eq!(post.author, "ada");
        assert_eq!(post.body, "hello");
    }

    #[test]
    fn test_posts_with_same_id_are_same_event() {
        let original = FeedPost::new(5, "ada", "first draft");
        let edited = FeedPost::new(5, "ada", "second draft");
        assert!(original.same_event(&edited));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let post: FeedPost = serde_json::from_str(r#"{"id": 99}"#).unwrap();
        assert_eq!(post.id, 99);
        assert!(post.author.is_empty());
        assert!(post.body.is_empty());
    }

    #[test]
    fn test_explicit_timestamp_roundtrip() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let post = FeedPost::new(1, "bob", "hi").with_created_at(at);

        let json = serde_json::to_string(&post).unwrap();
        let back: FeedPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_at, at);
        assert_eq!(back.id, 1);
    }
}
