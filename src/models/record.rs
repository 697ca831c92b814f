//! Raw outpatient visit records, the correlator's input shape

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates;

/// A loosely structured outpatient visit record supplied by upstream
/// extraction. Read-only within this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutpatientRecord {
    /// Visit date in any parseable format
    pub date: String,
    /// Hospital or clinic name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    /// Stated reason for the visit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Diagnosis text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    /// Free-text visit content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl OutpatientRecord {
    /// Visit date as a calendar date, if the string parses
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        dates::parse_flexible_date(&self.date)
    }

    /// All textual fields joined for keyword scanning
    #[must_use]
    pub fn combined_text(&self) -> String {
        [&self.reason, &self.diagnosis, &self.content]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hospital name normalized for comparison
    #[must_use]
    pub fn normalized_hospital(&self) -> Option<String> {
        self.hospital
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_lowercase)
    }
}
