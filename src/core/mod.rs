//! Core types shared across the resolver pipeline.

mod url;

pub use url::UrlPath;
