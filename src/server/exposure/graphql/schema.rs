//! GraphQL schema: query and mutation roots
//!
//! Field and argument names follow the public API (`abonnes`, `abonnement`,
//! `addCommentToPost`, ...). async-graphql camel-cases the Rust names.

use super::types::{CommentNode, NullableList, PostNode, UserNode, resolve};
use crate::server::host::ServerHost;
use async_graphql::{EmptySubscription, ID, Object, Result, Schema};
use std::sync::Arc;

/// The complete social schema
pub type SocialSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot {
    pub(super) host: Arc<ServerHost>,
}

#[Object]
impl QueryRoot {
    /// Fetch a user by id
    async fn user(&self, id: ID) -> Result<Option<UserNode>> {
        let service = &self.host.service;
        let user = resolve(service.get_user(id.as_str()).await)?;
        Ok(user.map(|u| UserNode::new(u, service.clone())))
    }

    /// Currently unsupported, always `null`
    async fn users_by_name(&self, name: String) -> NullableList<UserNode> {
        tracing::warn!(%name, "usersByName is not supported");
        None
    }

    /// Currently unsupported, always `null`
    async fn post(&self, id: ID) -> Option<PostNode> {
        tracing::warn!(id = %id.as_str(), "post is not supported");
        None
    }

    /// Currently unsupported, always `null`
    async fn posts(&self) -> NullableList<PostNode> {
        tracing::warn!("posts is not supported");
        None
    }
}

pub struct MutationRoot {
    pub(super) host: Arc<ServerHost>,
}

#[Object]
impl MutationRoot {
    /// Publish a post. The author id is not checked.
    async fn add_post(
        &self,
        title: String,
        content: String,
        author_id: ID,
    ) -> Result<Option<PostNode>> {
        let service = &self.host.service;
        let post = resolve(
            service
                .add_post(&title, &content, author_id.as_str())
                .await,
        )?;
        Ok(Some(PostNode::new(post, service.clone())))
    }

    /// Like a post, optionally commenting. `null` if the post or user is unknown.
    async fn like_post(
        &self,
        post_id: ID,
        user_id: ID,
        comment: Option<String>,
    ) -> Result<Option<PostNode>> {
        let service = &self.host.service;
        let post = resolve(
            service
                .like_post(post_id.as_str(), user_id.as_str(), comment.as_deref())
                .await,
        )?;
        Ok(post.map(|p| PostNode::new(p, service.clone())))
    }

    /// Comment on a post. `null` if the post or author is unknown.
    async fn add_comment_to_post(
        &self,
        post_id: ID,
        content: String,
        author_id: String,
    ) -> Result<Option<CommentNode>> {
        let service = &self.host.service;
        let comment = resolve(
            service
                .add_comment(post_id.as_str(), &content, &author_id)
                .await,
        )?;
        Ok(comment.map(|c| CommentNode::new(c, service.clone())))
    }

    /// Register a user
    async fn add_user(&self, name: String, email: String) -> Result<Option<UserNode>> {
        let service = &self.host.service;
        let user = resolve(service.add_user(&name, &email).await)?;
        Ok(Some(UserNode::new(user, service.clone())))
    }

    /// Follow a user and return the followed user. `null` if either is unknown.
    async fn follow_user(
        &self,
        follower_id: String,
        followed_id: String,
    ) -> Result<Option<UserNode>> {
        let service = &self.host.service;
        let user = resolve(service.follow_user(&follower_id, &followed_id).await)?;
        Ok(user.map(|u| UserNode::new(u, service.clone())))
    }
}

/// Build the schema over a host
pub fn build_schema(host: Arc<ServerHost>) -> SocialSchema {
    Schema::build(
        QueryRoot { host: host.clone() },
        MutationRoot { host },
        EmptySubscription,
    )
    .finish()
}
