//! GraphQL API exposure
//!
//! A single path serves the whole API: `POST` executes documents, `GET`
//! serves the GraphiQL explorer when it is enabled (or executes `GET`
//! queries when it is not).

mod schema;
mod types;

pub use schema::{MutationRoot, QueryRoot, SocialSchema, build_schema};
pub use types::{CommentNode, PostNode, UserNode};

use crate::core::error::SocialResult;
use crate::server::host::ServerHost;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{Router, response::Html, routing::get};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Fails if the configured endpoint path is not usable as a route.
    pub fn build_router(host: Arc<ServerHost>) -> SocialResult<Router> {
        host.config.validate()?;

        let path = host.config.graphql_path.clone();
        let graphiql = host.config.graphiql;
        let schema = build_schema(host);

        let router = if graphiql {
            let page = GraphiQLSource::build().endpoint(&path).finish();
            Router::new().route(
                &path,
                get(move || async move { Html(page) }).post_service(GraphQL::new(schema)),
            )
        } else {
            Router::new().route_service(&path, GraphQL::new(schema))
        };

        Ok(router)
    }
}
