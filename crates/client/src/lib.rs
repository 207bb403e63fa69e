//! Client code for newsgate.
//!
//! This crate provides the GNews HTTP client that backs the retrieval
//! service's `NewsUpstream` seam.

pub mod gnews;

pub use gnews::{GNewsClient, GNewsConfig, GNewsError, HeadlinesRequest, RetryPolicy, SearchRequest};
