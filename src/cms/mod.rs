//! Content repository access

mod client;
mod document;
mod error;

pub use client::{ContentRepository, PrismicClient, QueryOptions};
pub use document::RawDocument;
pub use error::RepositoryError;
