#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for listing and grouping operations.
pub const TRACING_TARGET_SHEET: &str = "fqsheet_core::sheet";

/// Tracing target for signed-URL issuance.
pub const TRACING_TARGET_SIGN: &str = "fqsheet_core::sign";

mod error;

pub mod backend;
pub mod filter;
pub mod ops;
pub mod sample;
pub mod sheet;

#[doc(hidden)]
pub mod prelude;

pub use error::{BoxedError, Error, ErrorKind, Result};
