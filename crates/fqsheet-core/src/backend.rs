//! Storage backend capability consumed by the core operations.
//!
//! The core never talks to a cloud service directly. It consumes the two
//! capabilities described here — enumerate keys under a prefix, and mint a
//! time-bounded retrieval URL — through [`ObjectBackend`], so tests can
//! substitute an in-memory implementation without network access.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A single entry from a bucket listing.
///
/// Mirrors the minimal surface the listing capability must expose: the key
/// of the object and the name of the bucket that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// Name of the bucket that owns the object.
    pub bucket: String,
    /// Object key, `/`-delimited.
    pub key: String,
}

impl ObjectSummary {
    /// Creates a new summary for `key` in `bucket`.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Renders the fully-qualified URI `scheme://bucket/key`.
    pub fn uri(&self, scheme: &str) -> String {
        format!("{scheme}://{}/{}", self.bucket, self.key)
    }
}

/// Connected handle to an object-storage bucket.
///
/// Implementations hide pagination entirely: [`list`](Self::list) is one
/// logical blocking call that fully enumerates every key under the prefix.
#[async_trait::async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Name of the bucket this backend is bound to.
    fn bucket(&self) -> &str;

    /// URI scheme used when rendering fully-qualified object URIs.
    fn scheme(&self) -> &'static str {
        "s3"
    }

    /// Enumerates all object keys under `prefix`.
    ///
    /// Errors from the service (bucket missing, access denied, network)
    /// are propagated as-is; an empty listing is not an error.
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>>;

    /// Mints a signed, time-bounded retrieval URL for `key`.
    ///
    /// `expires_in` is passed through to the service without local
    /// validation. Object existence is not pre-checked.
    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_renders_scheme_bucket_and_key() {
        let summary = ObjectSummary::new("fh-pi-my-bucket", "SR/myfiles/a_R1.fastq.gz");
        assert_eq!(
            summary.uri("s3"),
            "s3://fh-pi-my-bucket/SR/myfiles/a_R1.fastq.gz"
        );
    }
}
