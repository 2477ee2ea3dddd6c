//! The two stateless operations: listing-and-grouping, and signed-URL
//! issuance.
//!
//! Both are leaf operations with no dependency on each other, and they
//! carry opposite failure contracts: [`build_sample_sheet`] propagates
//! every backend failure, [`issue_presigned_url`] degrades to `None`.

use std::time::Duration;

use crate::backend::ObjectBackend;
use crate::filter::SampleFilter;
use crate::sheet::{MateGroups, SampleSheet};
use crate::{Result, TRACING_TARGET_SHEET, TRACING_TARGET_SIGN, sample};

/// Default validity window for signed URLs.
pub const DEFAULT_URL_EXPIRY: Duration = Duration::from_secs(3600);

/// Enumerates keys under `prefix`, groups mate pairs by sample, and
/// assembles the sample sheet.
///
/// `sample_filter` is an optional comma- or space-separated list of name
/// fragments; absent or empty retains every sample. Keys that do not look
/// like mate-pair FASTQ files are silently skipped, as are keys too short
/// to carry a sample identifier. Listing failures propagate untouched; an
/// empty listing yields an empty sheet.
pub async fn build_sample_sheet<B: ObjectBackend + ?Sized>(
    backend: &B,
    prefix: &str,
    sample_filter: Option<&str>,
) -> Result<SampleSheet> {
    let filter = SampleFilter::parse(sample_filter)?;
    let objects = backend.list(prefix).await?;

    let mut groups = MateGroups::new();
    for object in objects {
        if !sample::is_mate_file(&object.key) {
            continue;
        }
        let Some(sample) = sample::sample_id(&object.key) else {
            tracing::debug!(
                target: TRACING_TARGET_SHEET,
                key = %object.key,
                "key has no sample segment, skipping"
            );
            continue;
        };
        groups.insert(sample, object.uri(backend.scheme()));
    }

    tracing::info!(
        target: TRACING_TARGET_SHEET,
        bucket = %backend.bucket(),
        prefix = %prefix,
        samples = groups.len(),
        "grouped mate-pair files"
    );

    Ok(groups.into_sheet(&filter))
}

/// Mints a time-bounded retrieval URL for `key`, or `None` when the
/// backend refuses.
///
/// Fail-soft by contract: any backend error is logged at error level and
/// swallowed, so callers treat "could not sign" as a normal outcome.
pub async fn issue_presigned_url<B: ObjectBackend + ?Sized>(
    backend: &B,
    key: &str,
    expires_in: Duration,
) -> Option<String> {
    match backend.signed_url(key, expires_in).await {
        Ok(url) => Some(url),
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SIGN,
                bucket = %backend.bucket(),
                key = %key,
                error = %error,
                "failed to issue presigned URL"
            );
            None
        }
    }
}
