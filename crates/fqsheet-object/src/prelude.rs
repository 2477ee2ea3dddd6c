//! Convenience re-exports.

pub use crate::{MemoryBackend, S3Backend, S3Credentials};
pub use fqsheet_core::backend::{ObjectBackend, ObjectSummary};
