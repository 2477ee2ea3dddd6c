//! S3-compatible backend using [`object_store::aws::AmazonS3Builder`].
//!
//! Works with AWS S3, MinIO, and any S3-compatible service.

use std::sync::Arc;
use std::time::Duration;

use fqsheet_core::backend::{ObjectBackend, ObjectSummary};
use fqsheet_core::{Error, ErrorKind, Result};
use futures::TryStreamExt;
use http::Method;
use object_store::ObjectStore;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::signer::Signer;

use crate::S3Credentials;
use crate::TRACING_TARGET_BACKEND;

/// S3-backed implementation of [`ObjectBackend`].
///
/// The client is bound to a single bucket at construction; listing and
/// signing both operate relative to it.
#[derive(Clone)]
pub struct S3Backend {
    store: Arc<AmazonS3>,
    bucket: String,
}

impl S3Backend {
    /// Builds a connected backend from credentials.
    ///
    /// Ambient AWS environment variables are picked up first, then any
    /// explicit fields in `creds` override them. Plain-HTTP endpoints are
    /// allowed only when the endpoint itself is `http://`.
    pub fn connect(creds: &S3Credentials) -> Result<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(&creds.bucket)
            .with_region(&creds.region);

        if let Some(endpoint) = &creds.endpoint {
            builder = builder.with_endpoint(endpoint);
            if endpoint.starts_with("http://") {
                builder = builder.with_allow_http(true);
            }
        }

        if let Some(access_key) = &creds.access_key_id {
            builder = builder.with_access_key_id(access_key);
        }

        if let Some(secret_key) = &creds.secret_access_key {
            builder = builder.with_secret_access_key(secret_key);
        }

        if let Some(token) = &creds.session_token {
            builder = builder.with_token(token);
        }

        let store = builder.build().map_err(from_object_store)?;

        tracing::debug!(
            target: TRACING_TARGET_BACKEND,
            bucket = %creds.bucket,
            region = %creds.region,
            endpoint = ?creds.endpoint,
            "S3 backend connected"
        );

        Ok(Self {
            store: Arc::new(store),
            bucket: creds.bucket.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ObjectBackend for S3Backend {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    #[tracing::instrument(name = "object.list", skip(self), fields(bucket = %self.bucket))]
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

    #[tracing::instrument(name = "object.sign", skip(self), fields(bucket = %self.bucket))]
    async fn signed_url(&self, key: &str, expires_in: Duration) -> Result<String> {
        let path = Path::from(key);
        let url = self
            .store
            .signed_url(Method::GET, &path, expires_in)
            .await
            .map_err(from_object_store)?;
        Ok(url.to_string())
    }
}

/// Convert an [`object_store::Error`] into a core [`Error`].
pub(crate) fn from_object_store(err: object_store::Error) -> Error {
    let kind = match &err {
        object_store::Error::NotFound { .. } => ErrorKind::NotFound,
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => ErrorKind::AccessDenied,
        _ => ErrorKind::Backend,
    };
    Error::new(kind).with_message(err.to_string()).with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_builds_from_credentials() {
        let creds = S3Credentials {
            bucket: "fh-pi-my-bucket".into(),
            region: "us-west-2".into(),
            endpoint: Some("http://localhost:9000".into()),
            access_key_id: Some("test".into()),
            secret_access_key: Some("test".into()),
            session_token: None,
        };

        let backend = S3Backend::connect(&creds).unwrap();
        assert_eq!(backend.bucket(), "fh-pi-my-bucket");
        assert_eq!(backend.scheme(), "s3");
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found_kind() {
        use object_store::memory::InMemory;

        let store = InMemory::new();
        let err = store.head(&Path::from("missing")).await.unwrap_err();
        assert_eq!(from_object_store(err).kind(), ErrorKind::NotFound);
    }
}
