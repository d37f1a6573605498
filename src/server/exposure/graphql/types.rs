//! GraphQL object types
//!
//! Each node wraps a stored record together with the service, and resolves
//! relations lazily when the client selects them. Follower lists, posts and
//! comment authors are therefore computed per request and never written back
//! to the store.

use crate::core::entity::{Comment, Post, User};
use crate::core::error::SocialResult;
use crate::core::service::SocialService;
use async_graphql::{ErrorExtensions, ID, Object, Result};
use std::sync::Arc;

/// Convert a service result into a GraphQL result carrying the error code
pub(super) fn resolve<T>(result: SocialResult<T>) -> Result<T> {
    result.map_err(|e| e.extend())
}

/// A `[T]` field: both the list and its items are nullable
pub type NullableList<T> = Option<Vec<Option<T>>>;

pub(super) fn nullable_list<T>(items: impl IntoIterator<Item = T>) -> NullableList<T> {
    Some(items.into_iter().map(Some).collect())
}

pub struct UserNode {
    user: User,
    service: Arc<dyn SocialService>,
}

impl UserNode {
    pub fn new(user: User, service: Arc<dyn SocialService>) -> Self {
        Self { user, service }
    }

    fn wrap_all(users: Vec<User>, service: &Arc<dyn SocialService>) -> NullableList<UserNode> {
        nullable_list(
            users
                .into_iter()
                .map(|user| UserNode::new(user, service.clone())),
        )
    }
}

#[Object(name = "User")]
impl UserNode {
    async fn id(&self) -> ID {
        ID(self.user.id.clone())
    }

    async fn name(&self) -> &str {
        &self.user.name
    }

    async fn email(&self) -> &str {
        &self.user.email
    }

    /// Users following this user
    #[graphql(name = "abonnes")]
    async fn followers(&self) -> Result<NullableList<UserNode>> {
        let users = resolve(self.service.followers_of(&self.user.id).await)?;
        Ok(Self::wrap_all(users, &self.service))
    }

    /// Users this user follows
    #[graphql(name = "abonnement")]
    async fn following(&self) -> Result<NullableList<UserNode>> {
        let users = resolve(self.service.following_of(&self.user.id).await)?;
        Ok(Self::wrap_all(users, &self.service))
    }

    /// Posts authored by this user
    async fn posts(&self) -> Result<NullableList<PostNode>> {
        let posts = resolve(self.service.posts_by_author(&self.user.id).await)?;
        Ok(nullable_list(
            posts
                .into_iter()
                .map(|post| PostNode::new(post, self.service.clone())),
        ))
    }
}

pub struct PostNode {
    post: Post,
    service: Arc<dyn SocialService>,
}

impl PostNode {
    pub fn new(post: Post, service: Arc<dyn SocialService>) -> Self {
        Self { post, service }
    }
}

#[Object(name = "Post")]
impl PostNode {
    async fn id(&self) -> ID {
        ID(self.post.id.clone())
    }

    async fn title(&self) -> &str {
        &self.post.title
    }

    async fn content(&self) -> &str {
        &self.post.content
    }

    /// Author of the post, `null` if the author id matches no user
    async fn author(&self) -> Result<Option<UserNode>> {
        let user = resolve(self.service.get_user(&self.post.author_id).await)?;
        Ok(user.map(|u| UserNode::new(u, self.service.clone())))
    }

    /// Users who liked the post
    async fn likes(&self) -> Result<NullableList<UserNode>> {
        let users = resolve(self.service.users_by_ids(&self.post.likes).await)?;
        Ok(UserNode::wrap_all(users, &self.service))
    }

    async fn comments(&self) -> NullableList<CommentNode> {
        nullable_list(
            self.post
                .comments
                .iter()
                .cloned()
                .map(|comment| CommentNode::new(comment, self.service.clone())),
        )
    }

    /// Creation time, RFC 3339
    async fn created_at(&self) -> String {
        self.post.created_at.to_rfc3339()
    }
}

pub struct CommentNode {
    comment: Comment,
    service: Arc<dyn SocialService>,
}

impl CommentNode {
    pub fn new(comment: Comment, service: Arc<dyn SocialService>) -> Self {
        Self { comment, service }
    }
}

#[Object(name = "Comment")]
impl CommentNode {
    async fn id(&self) -> ID {
        ID(self.comment.id.clone())
    }

    async fn content(&self) -> &str {
        &self.comment.content
    }

    async fn author(&self) -> Result<Option<UserNode>> {
        let user = resolve(self.service.get_user(&self.comment.author_id).await)?;
        Ok(user.map(|u| UserNode::new(u, self.service.clone())))
    }

    /// Creation time, RFC 3339
    async fn created_at(&self) -> String {
        self.comment.created_at.to_rfc3339()
    }
}
