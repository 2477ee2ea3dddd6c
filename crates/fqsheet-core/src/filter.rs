//! Sample inclusion filtering from user-supplied name fragments.

use regex::Regex;

use crate::{Error, Result};

/// Inclusion filter built from a comma- or space-separated fragment list.
///
/// Fragments are joined with alternation and matched anywhere in the sample
/// identifier. They are intentionally not escaped, so pattern
/// metacharacters in a fragment act as wildcards; this mirrors the original
/// interface and is documented behavior, not a defect.
#[derive(Debug, Clone)]
pub struct SampleFilter {
    pattern: Regex,
}

impl SampleFilter {
    /// Builds a filter from an optional fragment list.
    ///
    /// `None` or an empty string compiles to the empty pattern, which
    /// matches every sample.
    pub fn parse(fragments: Option<&str>) -> Result<Self> {
        let raw = fragments.unwrap_or_default();
        let pattern = raw.split([',', ' ']).collect::<Vec<_>>().join("|");
        let pattern = Regex::new(&pattern).map_err(|err| {
            Error::invalid_filter()
                .with_message(format!("invalid sample filter `{raw}`"))
                .with_source(err)
        })?;
        Ok(Self { pattern })
    }

    /// Returns true when `sample` is retained by this filter.
    pub fn matches(&self, sample: &str) -> bool {
        self.pattern.is_match(sample)
    }
}
