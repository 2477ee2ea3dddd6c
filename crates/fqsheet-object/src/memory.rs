//! In-memory backend for tests and local experiments.

use std::time::Duration;

use fqsheet_core::Result;
use fqsheet_core::backend::{ObjectBackend, ObjectSummary};
use futures::TryStreamExt;
use object_store::ObjectStore;
use object_store::memory::InMemory;
use object_store::path::Path;

use crate::s3::from_object_store;

/// Process-local implementation of [`ObjectBackend`].
///
/// Listing is served by [`object_store::memory::InMemory`]; signing emits a
/// deterministic URL for keys that exist and fails with a not-found error
/// otherwise, so both halves of the fail-soft contract can be exercised
/// without network access.
#[derive(Debug)]
pub struct MemoryBackend {
    store: InMemory,
    bucket: String,
}

impl MemoryBackend {
    /// Creates an empty in-memory bucket named `bucket`.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            store: InMemory::new(),
            bucket: bucket.into(),
        }
    }

    /// Stores an empty object at `key`.
    pub async fn insert(&self, key: &str) -> Result<()> {
        self.store
            .put(&Path::from(key), object_store::PutPayload::from_static(b""))
            .await
            .map_err(from_object_store)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectBackend for MemoryBackend {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let prefix = if prefix.is_empty() {
            None
        } else {
            Some(Path::from(prefix))
        };

        let metas: Vec<_> = self
            .store
            .list(prefix.as_ref())
            .try_collect()
            .await
            .map_err(from_object_store)?;

        Ok(metas
            .into_iter()
            .map(|meta| ObjectSummary::new(&self.bucket, meta.location.to_string()))
            .collect())
    }

    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String> {
        let path = Path::from(key);
        self.store.head(&path).await.map_err(from_object_store)?;
        Ok(format!(
            "https://{}.s3.example.com/{path}?X-Amz-Expires={}",
            self.bucket,
            expires_in.as_secs()
        ))
    }
}

#[cfg(test)]
mod tests {
    use fqsheet_core::ops::{DEFAULT_URL_EXPIRY, build_sample_sheet, issue_presigned_url};

    use super::*;

    async fn seeded() -> MemoryBackend {
        let backend = MemoryBackend::new("fh-pi-my-bucket");
        for key in [
            "SR/myfiles/sampleA/sampleA_R1.fastq.gz",
            "SR/myfiles/sampleA/sampleA_R2.fastq.gz",
            "SR/myfiles/sampleA/sampleA.bam",
        ] {
            backend.insert(key).await.unwrap();
        }
        backend
    }

    #[tokio::test]
    async fn list_scopes_to_prefix() {
        let backend = seeded().await;
        backend.insert("other/irrelevant.txt").await.unwrap();

        let objects = backend.list("SR/myfiles/").await.unwrap();
        assert_eq!(objects.len(), 3);
        assert!(objects.iter().all(|o| o.key.starts_with("SR/myfiles/")));
    }

    #[tokio::test]
    async fn sheet_scenario_end_to_end() {
        let backend = seeded().await;
        let sheet = build_sample_sheet(&backend, "SR/myfiles/", None)
            .await
            .unwrap();

        assert_eq!(sheet.len(), 1);
        let row = &sheet.rows[0];
        assert_eq!(row.sample, "sampleA");
        assert_eq!(
            row.r1,
            "s3://fh-pi-my-bucket/SR/myfiles/sampleA/sampleA_R1.fastq.gz"
        );
        assert_eq!(
            row.r2.as_deref(),
            Some("s3://fh-pi-my-bucket/SR/myfiles/sampleA/sampleA_R2.fastq.gz")
        );
    }

    #[tokio::test]
    async fn signing_existing_key_succeeds() {
        let backend = seeded().await;
        let url = issue_presigned_url(
            &backend,
            "SR/myfiles/sampleA/sampleA_R1.fastq.gz",
            DEFAULT_URL_EXPIRY,
        )
        .await
        .unwrap();
        assert!(url.contains("X-Amz-Expires=3600"));
    }

    #[tokio::test]
    async fn signing_missing_key_fails_soft() {
        let backend = MemoryBackend::new("no-such-bucket");
        let url =
            issue_presigned_url(&backend, "SR/missing.fastq.gz", DEFAULT_URL_EXPIRY).await;
        assert_eq!(url, None);
    }
}
