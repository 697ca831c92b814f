//! Symptom-priority classification for visit records
//!
//! Primary/secondary classification feeds an additive scoring boost during
//! episode attachment. It is never used as a hard filter.

use serde::{Deserialize, Serialize};

use crate::utils::text;
use crate::vocabulary::terms;

/// Priority class of a visit's stated symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomPriority {
    /// Chief-complaint markers present
    Primary,
    /// Associated-symptom markers present
    Secondary,
    /// No markers matched
    Unknown,
}

/// Classify a visit reason by its symptom vocabulary
///
/// Chief-complaint markers win over associated-symptom markers when both
/// are present.
#[must_use]
pub fn classify(reason: Option<&str>) -> SymptomPriority {
    let Some(reason) = reason else {
        return SymptomPriority::Unknown;
    };
    if text::count_keyword_hits(reason, terms::CHIEF_COMPLAINT) > 0 {
        return SymptomPriority::Primary;
    }
    if text::count_keyword_hits(reason, terms::ASSOCIATED_SYMPTOM) > 0 {
        return SymptomPriority::Secondary;
    }
    SymptomPriority::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chief_complaint_is_primary() {
        assert_eq!(classify(Some("급성 복부 통증")), SymptomPriority::Primary);
        assert_eq!(classify(Some("severe chest pain")), SymptomPriority::Primary);
    }

    #[test]
    fn test_associated_symptom_is_secondary() {
        assert_eq!(classify(Some("mild fatigue")), SymptomPriority::Secondary);
    }

    #[test]
    fn test_primary_wins_over_secondary() {
        assert_eq!(
            classify(Some("acute pain with mild nausea")),
            SymptomPriority::Primary
        );
    }

    #[test]
    fn test_missing_reason_is_unknown() {
        assert_eq!(classify(None), SymptomPriority::Unknown);
        assert_eq!(classify(Some("정기 검진")), SymptomPriority::Unknown);
    }
}
