//! CLI configuration management.
//!
//! Two subcommands, each taking the shared storage options plus its own
//! arguments:
//!
//! ```text
//! fqsheet
//! ├── sheet    # list a prefix, group mate pairs, emit the sample sheet
//! └── presign  # mint a time-limited retrieval URL for one object
//! ```
//!
//! All options can be provided via CLI arguments or environment variables.
//! Use `--help` to see them.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use fqsheet_object::S3Credentials;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Parser)]
#[command(name = "fqsheet")]
#[command(about = "Sample sheets and presigned URLs for FASTQ files in object storage")]
#[command(version)]
pub struct Cli {
    /// The operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a tab-separated sample sheet from paired FASTQ files.
    Sheet(SheetArgs),
    /// Mint a time-limited presigned URL for a single object.
    Presign(PresignArgs),
}

/// Storage connection options shared by both subcommands.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct StorageArgs {
    /// Bucket to operate on.
    #[arg(long, env = "FQSHEET_BUCKET")]
    pub bucket: String,

    /// AWS region of the bucket.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Endpoint URL for S3-compatible services (e.g. MinIO).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint: Option<String>,

    /// Access key ID; falls back to the ambient AWS environment.
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key; falls back to the ambient AWS environment.
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,
}

impl StorageArgs {
    /// Converts the arguments into backend credentials.
    pub fn credentials(&self) -> S3Credentials {
        S3Credentials {
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            session_token: None,
        }
    }
}

/// Arguments for the `sheet` subcommand.
#[derive(Debug, Args)]
pub struct SheetArgs {
    /// Storage connection options.
    #[clap(flatten)]
    pub storage: StorageArgs,

    /// Key prefix to enumerate; should end with `/`.
    #[arg(long, env = "FQSHEET_PREFIX")]
    pub prefix: String,

    /// Comma- or space-separated sample name fragments to retain.
    /// Omit to retain every sample.
    #[arg(long, env = "FQSHEET_SAMPLES")]
    pub samples: Option<String>,

    /// File type hint. Only FASTQ mate pairs are recognized today; the
    /// flag is accepted for interface parity.
    #[arg(long, default_value = "fastq")]
    pub filetype: String,

    /// Output filename for the tab-separated sheet.
    #[arg(long, default_value = "sample_sheet.txt")]
    pub output: PathBuf,

    /// Print the sheet to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the `presign` subcommand.
#[derive(Debug, Args)]
pub struct PresignArgs {
    /// Storage connection options.
    #[clap(flatten)]
    pub storage: StorageArgs,

    /// Key of the object to sign for.
    #[arg(long)]
    pub key: String,

    /// Validity window of the URL, in seconds.
    #[arg(long, default_value_t = 3600)]
    pub expires_in: u64,
}

impl Cli {
    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information and the selected operation at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            "build information"
        );

        match &self.command {
            Command::Sheet(args) => tracing::debug!(
                target: TRACING_TARGET_CONFIG,
                bucket = %args.storage.bucket,
                prefix = %args.prefix,
                samples = ?args.samples,
                filetype = %args.filetype,
                output = %args.output.display(),
                print = args.print,
                "sheet configuration"
            ),
            Command::Presign(args) => tracing::debug!(
                target: TRACING_TARGET_CONFIG,
                bucket = %args.storage.bucket,
                key = %args.key,
                expires_in = args.expires_in,
                "presign configuration"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn sheet_defaults() {
        let cli = Cli::try_parse_from([
            "fqsheet",
            "sheet",
            "--bucket",
            "fh-pi-my-bucket",
            "--prefix",
            "SR/myfiles/",
        ])
        .unwrap();

        let Command::Sheet(args) = cli.command else {
            panic!("expected sheet subcommand");
        };
        assert_eq!(args.filetype, "fastq");
        assert_eq!(args.output, PathBuf::from("sample_sheet.txt"));
        assert!(!args.print);
        assert_eq!(args.samples, None);
    }

    #[test]
    fn presign_defaults() {
        let cli = Cli::try_parse_from([
            "fqsheet",
            "presign",
            "--bucket",
            "fh-pi-my-bucket",
            "--key",
            "SR/myfiles/sampleA/sampleA_R1.fastq.gz",
        ])
        .unwrap();

        let Command::Presign(args) = cli.command else {
            panic!("expected presign subcommand");
        };
        assert_eq!(args.expires_in, 3600);
    }

    #[test]
    fn storage_args_become_credentials() {
        let args = StorageArgs {
            bucket: "bkt".into(),
            region: "eu-west-1".into(),
            endpoint: Some("http://localhost:9000".into()),
            access_key_id: None,
            secret_access_key: None,
        };

        let creds = args.credentials();
        assert_eq!(creds.bucket, "bkt");
        assert_eq!(creds.region, "eu-west-1");
        assert_eq!(creds.endpoint.as_deref(), Some("http://localhost:9000"));
    }
}
