//! Mate-pair key recognition and sample identifier derivation.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a mate marker followed by a FASTQ extension somewhere in a key:
/// a separator, `R1`/`R2` (any case), one character, then `fastq` or `fq`.
static MATE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[._-]r[12].(fastq|fq)").unwrap());

/// Matches the mate/lane tail to strip from a path segment when deriving
/// the sample identifier.
static MATE_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[._-]r[12].+$").unwrap());

/// Returns true when `key` names a recognized mate-pair FASTQ file.
///
/// Keys that do not match are skipped by the grouping stage; this is
/// ordinary filtering, not an error.
pub fn is_mate_file(key: &str) -> bool {
    MATE_FILE.is_match(key)
}

/// Derives the sample identifier from an object key.
///
/// The identifier is the key's third path segment (zero-indexed) with any
/// trailing `_R1`/`.R2`-style mate suffix removed. Returns `None` for keys
/// with fewer than three segments, which cannot carry a sample name.
pub fn sample_id(key: &str) -> Option<String> {
    let segment = key.split('/').nth(2)?;
    Some(MATE_TAIL.replace(segment, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_standard_mate_files() {
        assert!(is_mate_file("SR/myfiles/sampleA/sampleA_R1.fastq.gz"));
        assert!(is_mate_file("SR/myfiles/sampleA/sampleA_R2.fastq.gz"));
        assert!(is_mate_file("SR/myfiles/sampleB/sampleB.r1.fq"));
        assert!(is_mate_file("SR/myfiles/sampleC/sampleC-R2.fq.gz"));
    }

    #[test]
    fn skips_non_mate_files() {
        assert!(!is_mate_file("SR/myfiles/sampleA/sampleA.bam"));
        assert!(!is_mate_file("SR/myfiles/sampleA/README.txt"));
        assert!(!is_mate_file("SR/myfiles/sampleA/sampleA_R3.fastq.gz"));
        // Marker present but no fastq/fq extension after it.
        assert!(!is_mate_file("SR/myfiles/sampleA/sampleA_R1.bam"));
    }

    #[test]
    fn derives_sample_from_third_segment() {
        assert_eq!(
            sample_id("SR/myfiles/sampleA/sampleA_R1.fastq.gz").as_deref(),
            Some("sampleA")
        );
    }

    #[test]
    fn strips_mate_tail_when_segment_is_a_filename() {
        assert_eq!(
            sample_id("SR/myfiles/sampleB_R2.fastq.gz").as_deref(),
            Some("sampleB")
        );
        assert_eq!(
            sample_id("SR/myfiles/sampleB.r1_001.fq.gz").as_deref(),
            Some("sampleB")
        );
        assert_eq!(
            sample_id("SR/myfiles/sampleB-R1.fastq").as_deref(),
            Some("sampleB")
        );
    }

    #[test]
    fn short_keys_have_no_sample() {
        assert_eq!(sample_id("sampleA_R1.fastq.gz"), None);
        assert_eq!(sample_id("SR/sampleA_R1.fastq.gz"), None);
    }
}
