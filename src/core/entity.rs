//! Stored records for the social graph
//!
//! Records only ever hold ids for their relations. Resolved projections
//! (a user's posts, followers, the author of a comment) are computed on read
//! by the service, so reading never rewrites what is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member of the network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Store-assigned identifier
    pub id: String,

    pub name: String,

    pub email: String,

    /// Ids of the users this user follows (`abonnement`)
    #[serde(default)]
    pub following: Vec<String>,

    /// Ids of the users following this user (`abonnes`)
    #[serde(default)]
    pub followers: Vec<String>,
}

impl User {
    /// Create a user with no relations
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Whether this user already follows `user_id`
    pub fn follows(&self, user_id: &str) -> bool {
        self.following.iter().any(|id| id == user_id)
    }
}

/// A post published by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,

    pub title: String,

    pub content: String,

    /// Id of the authoring user. Not checked against the user collection.
    pub author_id: String,

    /// Ids of the users who liked the post, without duplicates
    #[serde(default)]
    pub likes: Vec<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with no likes and no comments
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author_id: author_id.into(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Record a like from `user_id`
    ///
    /// Returns `false` when the user had already liked the post.
    pub fn add_like(&mut self, user_id: &str) -> bool {
        if self.likes.iter().any(|id| id == user_id) {
            return false;
        }
        self.likes.push(user_id.to_string());
        true
    }

    /// Append a comment, assigning it the next id scoped to this post
    pub fn push_comment(
        &mut self,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Comment {
        let comment = Comment::new(self.next_comment_id(), content, author_id);
        self.comments.push(comment.clone());
        comment
    }

    /// Attach a comment that already carries its id (fixtures)
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Id for the next comment: the comment count plus one, or one past the
    /// highest numeric comment id when that is larger.
    ///
    /// Derived from `comments` alone, so a deserialized post continues where
    /// it left off.
    fn next_comment_id(&self) -> String {
        let by_count = (self.comments.len() as u64).saturating_add(1);
        let by_highest = self
            .comments
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .map(|id| id.saturating_add(1))
            .max()
            .unwrap_or(0);
        by_count.max(by_highest).to_string()
    }
}

/// A comment on a post
///
/// Comment ids are only unique within their parent post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,

    pub content: String,

    /// Id of the commenting user
    pub author_id: String,

    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author_id: author_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_like_is_idempotent() {
        let mut post = Post::new("0", "T", "C", "0");

        assert!(post.add_like("1"));
        assert!(!post.add_like("1"));
        assert_eq!(post.likes, vec!["1".to_string()]);
    }

    #[test]
    fn test_comment_ids_are_scoped_to_post() {
        let mut first = Post::new("0", "T", "C", "0");
        let mut second = Post::new("1", "T", "C", "0");

        assert_eq!(first.push_comment("a", "1").id, "1");
        assert_eq!(first.push_comment("b", "1").id, "2");
        assert_eq!(second.push_comment("c", "1").id, "1");
    }

    #[test]
    fn test_seeded_comment_counts_toward_next_id() {
        let mut post = Post::new("0", "T", "C", "0").with_comment(Comment::new("0", "Super!", "1"));

        let next = post.push_comment("Encore", "2");
        assert_eq!(next.id, "2");
        assert_eq!(post.comments.len(), 2);
    }

    #[test]
    fn test_comment_id_skips_past_highest_existing_id() {
        let mut post = Post::new("0", "T", "C", "0").with_comment(Comment::new("9", "x", "1"));

        assert_eq!(post.push_comment("y", "1").id, "10");
        assert_eq!(post.push_comment("z", "1").id, "11");
    }

    #[test]
    fn test_deserialized_post_keeps_comment_ids_unique() {
        let mut post = Post::new("0", "T", "C", "0");
        post.push_comment("a", "1");
        post.push_comment("b", "1");

        let json = serde_json::to_string(&post).unwrap();
        let mut restored: Post = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.push_comment("c", "1").id, "3");
    }

    #[test]
    fn test_comment_id_does_not_overflow() {
        let max = u64::MAX.to_string();
        let mut post = Post::new("0", "T", "C", "0").with_comment(Comment::new(max.clone(), "x", "1"));

        assert_eq!(post.push_comment("y", "1").id, max);
    }

    #[test]
    fn test_user_follows() {
        let mut user = User::new("0", "Alice", "alice@example.com");
        assert!(!user.follows("1"));

        user.following.push("1".to_string());
        assert!(user.follows("1"));
    }
}
