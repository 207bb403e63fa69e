//! Core types and the retrieval service for newsgate.
//!
//! This crate provides:
//! - Article data model shared with the upstream wire format
//! - Unified error types
//! - Count validation and per-mode search filtering
//! - In-memory result cache with coalesced misses
//! - The `NewsUpstream` seam and the `NewsService` that ties it all together
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod service;
pub mod upstream;
pub mod validate;

pub use cache::{CacheSettings, CacheStats, CacheStore, NamespaceId, SearchKey};
pub use config::{AppConfig, ConfigError};
pub use error::{Error, ErrorKind};
pub use model::{Article, NewsEnvelope, SearchMode, Source};
pub use service::NewsService;
pub use upstream::NewsUpstream;
pub use validate::MAX_ARTICLE_COUNT;
