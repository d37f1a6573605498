//! Service trait for the social graph

use crate::core::entity::{Comment, Post, User};
use crate::core::error::SocialResult;
use async_trait::async_trait;

/// Read and write operations over users and posts
///
/// Implementations own the two collections and are injected into the server
/// host. The GraphQL layer is agnostic to the underlying storage mechanism:
/// every resolver goes through this trait.
///
/// Lookups that find nothing return `Ok(None)` (or an empty list); `Err` is
/// reserved for failures of the store itself.
#[async_trait]
pub trait SocialService: Send + Sync {
    // === Reads ===

    /// Get a user by id
    async fn get_user(&self, id: &str) -> SocialResult<Option<User>>;

    /// Resolve a list of user ids, in store order, skipping unknown ids
    async fn users_by_ids(&self, ids: &[String]) -> SocialResult<Vec<User>>;

    /// All posts authored by `user_id`, in insertion order
    async fn posts_by_author(&self, user_id: &str) -> SocialResult<Vec<Post>>;

    /// Users whose following list contains `user_id`
    async fn followers_of(&self, user_id: &str) -> SocialResult<Vec<User>>;

    /// Users that `user_id` follows
    async fn following_of(&self, user_id: &str) -> SocialResult<Vec<User>>;

    // === Writes ===

    /// Create a user with no relations
    async fn add_user(&self, name: &str, email: &str) -> SocialResult<User>;

    /// Create a post
    ///
    /// The author id is stored verbatim; it is not checked against the users.
    async fn add_post(&self, title: &str, content: &str, author_id: &str) -> SocialResult<Post>;

    /// Like a post, optionally leaving a comment
    ///
    /// Returns `None` when either the post or the user does not exist.
    /// A user appears at most once in the likes; a non-empty `comment`
    /// appends one comment per call.
    async fn like_post(
        &self,
        post_id: &str,
        user_id: &str,
        comment: Option<&str>,
    ) -> SocialResult<Option<Post>>;

    /// Comment on a post
    ///
    /// Returns `None`, leaving the store untouched, when either the post or
    /// the author does not exist.
    async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
        author_id: &str,
    ) -> SocialResult<Option<Comment>>;

    /// Make `follower_id` follow `followed_id`
    ///
    /// Returns the followed user, whether or not the relation is new, or
    /// `None` when either user does not exist.
    async fn follow_user(&self, follower_id: &str, followed_id: &str)
    -> SocialResult<Option<User>>;
}
