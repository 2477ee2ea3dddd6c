#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for backend operations.
pub const TRACING_TARGET_BACKEND: &str = "fqsheet_object::backend";

mod config;
mod memory;
mod s3;

#[doc(hidden)]
pub mod prelude;

pub use config::S3Credentials;
pub use memory::MemoryBackend;
pub use s3::S3Backend;
