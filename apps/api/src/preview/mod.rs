//! Off-thread preview generation with a bounded FIFO cache.

pub mod cache;
pub mod fingerprint;
pub mod handlers;
pub mod service;
pub mod session;
pub mod worker;

pub use fingerprint::Fingerprint;
pub use service::{spawn, CacheStats, PreviewConfig, PreviewError, PreviewHandle, PreviewOutcome};
pub use worker::SitePipeline;
