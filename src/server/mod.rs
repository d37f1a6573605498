//! Server module: host, builder and protocol exposures
//!
//! `ServerBuilder` assembles a `ServerHost` (service + configuration) and
//! exposes it over GraphQL.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::GraphQLExposure;
pub use host::ServerHost;
