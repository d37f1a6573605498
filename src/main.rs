//! social-api server
//!
//! Reads `social.yaml` from the working directory when present, then serves
//! the GraphQL endpoint (default `http://127.0.0.1:4000/graphql`).

use anyhow::Result;
use social::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "social.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::load_or_default(CONFIG_PATH)?;
    tracing::info!(
        seed = config.seed,
        graphiql = config.graphiql,
        "starting social-api"
    );

    ServerBuilder::new().with_config(config).serve().await
}
