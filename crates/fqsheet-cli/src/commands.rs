//! Subcommand implementations.

use std::time::Duration;

use anyhow::Context;
use fqsheet_core::ops::{build_sample_sheet, issue_presigned_url};
use fqsheet_object::S3Backend;

use crate::TRACING_TARGET_STARTUP;
use crate::config::{PresignArgs, SheetArgs};

/// Builds the sample sheet and writes or prints it.
///
/// Listing failures abort the run; this is the propagating half of the
/// error-handling policy.
pub async fn sheet(args: SheetArgs) -> anyhow::Result<()> {
    if !args.prefix.ends_with('/') {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            prefix = %args.prefix,
            "prefix does not end with `/`; partial segment matches are possible"
        );
    }

    let backend =
        S3Backend::connect(&args.storage.credentials()).context("failed to connect to S3")?;

    let sheet = build_sample_sheet(&backend, &args.prefix, args.samples.as_deref())
        .await
        .context("failed to build sample sheet")?;

    if args.print {
        print!("{}", sheet.to_tsv());
    } else {
        let written = sheet
            .write_to(&args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        tracing::info!(
            target: TRACING_TARGET_STARTUP,
            rows = written,
            path = %args.output.display(),
            "sample sheet written"
        );
    }

    Ok(())
}

/// Mints a presigned URL and prints it.
///
/// Fail-soft: a refused signing request is logged by the core operation
/// and reported here, but the process still exits successfully.
pub async fn presign(args: PresignArgs) -> anyhow::Result<()> {
    let backend =
        S3Backend::connect(&args.storage.credentials()).context("failed to connect to S3")?;

    let expires_in = Duration::from_secs(args.expires_in);
    match issue_presigned_url(&backend, &args.key, expires_in).await {
        Some(url) => println!("{url}"),
        None => {
            tracing::info!(
                target: TRACING_TARGET_STARTUP,
                key = %args.key,
                "no URL available"
            );
        }
    }

    Ok(())
}
