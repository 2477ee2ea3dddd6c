//! Typed credentials for the S3-compatible backend.

use serde::{Deserialize, Serialize};

/// Connection settings for AWS S3 and S3-compatible services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Credentials {
    /// S3 bucket name.
    pub bucket: String,
    /// AWS region (defaults to `us-east-1`).
    #[serde(default = "default_region")]
    pub region: String,
    /// Endpoint URL (e.g. `http://localhost:9000` for MinIO).
    /// Required for non-AWS S3-compatible services.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Access key ID for static credentials.
    #[serde(default)]
    pub access_key_id: Option<String>,
    /// Secret access key for static credentials.
    #[serde(default)]
    pub secret_access_key: Option<String>,
    /// Session token for temporary credentials.
    #[serde(default)]
    pub session_token: Option<String>,
}

impl S3Credentials {
    /// Creates credentials for `bucket` in the default region, leaving
    /// everything else to the ambient AWS environment.
    pub fn for_bucket(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: default_region(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_bucket_uses_default_region() {
        let creds = S3Credentials::for_bucket("fh-pi-my-bucket");
        assert_eq!(creds.bucket, "fh-pi-my-bucket");
        assert_eq!(creds.region, "us-east-1");
        assert!(creds.endpoint.is_none());
    }
}
