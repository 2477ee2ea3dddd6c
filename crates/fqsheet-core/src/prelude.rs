//! Convenience re-exports.

pub use crate::backend::{ObjectBackend, ObjectSummary};
pub use crate::filter::SampleFilter;
pub use crate::ops::{DEFAULT_URL_EXPIRY, build_sample_sheet, issue_presigned_url};
pub use crate::sheet::{MateGroups, SampleSheet, SampleSheetRow};
pub use crate::{Error, ErrorKind, Result};
