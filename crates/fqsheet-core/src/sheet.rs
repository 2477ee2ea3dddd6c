//! Mate grouping and the tab-separated sample sheet.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::SampleFilter;
use crate::{Error, Result};

/// Column header of the serialized sheet.
pub const TSV_HEADER: &str = "Sample\tR1\tR2";

/// Transient grouping of object URIs by sample identifier.
///
/// Samples are kept in first-encounter order; each sample's URI list is
/// re-sorted after every insertion so that, under standard naming, the R1
/// file ends up at index 0 and the R2 file at index 1. Nothing enforces
/// that exactly two files exist per sample.
#[derive(Debug, Default)]
pub struct MateGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<String>>,
}

impl MateGroups {
    /// Creates an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `uri` to the group for `sample`, keeping the group sorted.
    pub fn insert(&mut self, sample: impl Into<String>, uri: impl Into<String>) {
        let sample = sample.into();
        if !self.groups.contains_key(&sample) {
            self.order.push(sample.clone());
        }
        let group = self.groups.entry(sample).or_default();
        group.push(uri.into());
        group.sort();
    }

    /// Number of distinct samples seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when no sample has been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Derives the sample sheet, retaining samples accepted by `filter`.
    ///
    /// The first two URIs of each group become R1 and R2. A sample with a
    /// single recognized file is still emitted, with R2 absent; whether
    /// downstream consumers tolerate that is their concern.
    pub fn into_sheet(mut self, filter: &SampleFilter) -> SampleSheet {
        let rows = self
            .order
            .drain(..)
            .filter(|sample| filter.matches(sample))
            .filter_map(|sample| {
                let mut uris = self.groups.remove(&sample)?.into_iter();
                Some(SampleSheetRow {
                    sample,
                    r1: uris.next()?,
                    r2: uris.next(),
                })
            })
            .collect();
        SampleSheet { rows }
    }
}

/// One row of the sample sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheetRow {
    /// Sample identifier.
    pub sample: String,
    /// Fully-qualified URI of the first mate file.
    pub r1: String,
    /// Fully-qualified URI of the second mate file, when one exists.
    pub r2: Option<String>,
}

/// Ordered table mapping each sample to its two mate files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSheet {
    /// Rows in first-encounter order of their samples.
    pub rows: Vec<SampleSheetRow>,
}

impl SampleSheet {
    /// Number of rows in the sheet.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the sheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the sheet as tab-separated text with a header row.
    ///
    /// Fields are not quoted; a missing R2 becomes an empty field.
    pub fn to_tsv(&self) -> String {
        let mut out = String::from(TSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.sample);
            out.push('\t');
            out.push_str(&row.r1);
            out.push('\t');
            if let Some(r2) = &row.r2 {
                out.push_str(r2);
            }
            out.push('\n');
        }
        out
    }

    /// Parses tab-separated text produced by [`to_tsv`](Self::to_tsv).
    pub fn from_tsv(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        match lines.next() {
            Some(TSV_HEADER) => {}
            other => {
                return Err(Error::invalid_sheet()
                    .with_message(format!("expected header `{TSV_HEADER}`, got {other:?}")));
            }
        }

        let mut rows = Vec::new();
        for (number, line) in lines.enumerate() {
            let mut fields = line.split('\t');
            let (Some(sample), Some(r1)) = (fields.next(), fields.next()) else {
                return Err(Error::invalid_sheet()
                    .with_message(format!("row {}: expected at least 2 fields", number + 1)));
            };
            let r2 = fields.next().filter(|f| !f.is_empty());
            rows.push(SampleSheetRow {
                sample: sample.to_string(),
                r1: r1.to_string(),
                r2: r2.map(str::to_string),
            });
        }
        Ok(Self { rows })
    }

    /// Writes the serialized sheet to `path`, returning the row count.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        fs::write(path, self.to_tsv())?;
        Ok(self.rows.len())
    }
}
