//! Storage implementations for the social graph

pub mod fixtures;
pub mod in_memory;

pub use in_memory::InMemorySocialService;
