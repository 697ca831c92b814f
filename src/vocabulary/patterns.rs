//! Compiled regular-expression tables shared by the extraction algorithms

use once_cell::sync::Lazy;
use regex::Regex;

/// KCD/ICD-style disease code: letter + 2-3 digits, optional decimal part
pub static DISEASE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z][0-9]{2,3}(?:\.[0-9]{1,2})?\b").expect("valid pattern"));

/// `YYYY.MM.DD ~ YYYY.MM.DD` shaped treatment-period range
pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{4}[.\-/]\d{1,2}[.\-/]\d{1,2})\s*~\s*(\d{4}[.\-/]\d{1,2}[.\-/]\d{1,2})",
    )
    .expect("valid pattern")
});

/// Short imaging abbreviations that need word-boundary matching
pub static IMAGING_ABBREV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:ct|mri|pet|x-?ray)\b").expect("valid pattern"));
