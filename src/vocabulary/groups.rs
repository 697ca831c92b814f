//! Diagnostic groups for episode gating
//!
//! This module defines the seven fixed disease-domain buckets used to decide
//! whether two outpatient visits can belong to the same care episode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Disease-domain buckets used to gate episode grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticGroup {
    /// Circulatory system (hypertension, arrhythmia, heart failure)
    Cardiovascular,
    /// Respiratory system (asthma, pneumonia, bronchitis)
    Respiratory,
    /// Digestive system (gastritis, ulcers, hepatitis)
    Digestive,
    /// Nervous system (migraine, seizure, stroke)
    Neurological,
    /// Musculoskeletal system (fractures, arthritis, disc disease)
    Orthopedic,
    /// Endocrine and metabolic (diabetes, thyroid disease)
    Endocrine,
    /// Mental and behavioral (depression, anxiety, insomnia)
    Psychiatric,
}

impl DiagnosticGroup {
    /// Get the display name for this group
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cardiovascular => "cardiovascular",
            Self::Respiratory => "respiratory",
            Self::Digestive => "digestive",
            Self::Neurological => "neurological",
            Self::Orthopedic => "orthopedic",
            Self::Endocrine => "endocrine",
            Self::Psychiatric => "psychiatric",
        }
    }

    /// All seven groups, in the fixed tie-breaking order
    #[must_use]
    pub const fn all_groups() -> [Self; 7] {
        [
            Self::Cardiovascular,
            Self::Respiratory,
            Self::Digestive,
            Self::Neurological,
            Self::Orthopedic,
            Self::Endocrine,
            Self::Psychiatric,
        ]
    }

    /// Keyword dictionary for this group
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Cardiovascular => &[
                "hypertension",
                "고혈압",
                "blood pressure",
                "혈압",
                "cardiac",
                "심장",
                "chest pain",
                "흉통",
                "arrhythmia",
                "부정맥",
                "heart failure",
                "심부전",
                "angina",
                "협심증",
                "myocardial",
                "심근경색",
            ],
            Self::Respiratory => &[
                "asthma",
                "천식",
                "cough",
                "기침",
                "wheezing",
                "천명",
                "shortness of breath",
                "호흡곤란",
                "pneumonia",
                "폐렴",
                "bronchitis",
                "기관지염",
                "copd",
                "폐기종",
            ],
            Self::Digestive => &[
                "gastritis",
                "위염",
                "heartburn",
                "속쓰림",
                "abdominal pain",
                "복통",
                "ulcer",
                "궤양",
                "reflux",
                "역류",
                "hepatitis",
                "간염",
                "colitis",
                "장염",
                "indigestion",
                "소화불량",
            ],
            Self::Neurological => &[
                "headache",
                "두통",
                "migraine",
                "편두통",
                "seizure",
                "경련",
                "epilepsy",
                "뇌전증",
                "stroke",
                "뇌졸중",
                "dizziness",
                "어지럼증",
                "neuropathy",
                "신경병증",
            ],
            Self::Orthopedic => &[
                "fracture",
                "골절",
                "sprain",
                "염좌",
                "back pain",
                "요통",
                "arthritis",
                "관절염",
                "disc",
                "디스크",
                "ligament",
                "인대",
                "osteoporosis",
                "골다공증",
            ],
            Self::Endocrine => &[
                "diabetes",
                "당뇨",
                "thyroid",
                "갑상선",
                "hormone",
                "호르몬",
                "insulin",
                "인슐린",
                "hyperlipidemia",
                "고지혈증",
                "metabolic",
                "대사증후군",
            ],
            Self::Psychiatric => &[
                "depression",
                "우울",
                "anxiety",
                "불안",
                "insomnia",
                "불면",
                "panic",
                "공황",
                "bipolar",
                "조울",
                "adhd",
            ],
        }
    }

    /// Resolve free text to a diagnostic group by keyword coverage
    ///
    /// The group with the most distinct keyword hits wins; ties break on the
    /// fixed `all_groups` order. Text with no hits resolves to `None`.
    #[must_use]
    pub fn resolve(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let mut best: Option<(Self, usize)> = None;

        for group in Self::all_groups() {
            let hits = group
                .keywords()
                .iter()
                .filter(|kw| lowered.contains(&kw.to_lowercase()))
                .count();
            if hits == 0 {
                continue;
            }
            match best {
                Some((_, best_hits)) if hits <= best_hits => {}
                _ => best = Some((group, hits)),
            }
        }

        best.map(|(group, _)| group)
    }
}

impl fmt::Display for DiagnosticGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_respiratory_over_cardiovascular() {
        // "chest pain" is a cardiovascular hit, but two respiratory hits win
        let group = DiagnosticGroup::resolve("chest pain, shortness of breath, suspected asthma");
        assert_eq!(group, Some(DiagnosticGroup::Respiratory));
    }

    #[test]
    fn test_resolves_korean_keywords() {
        assert_eq!(
            DiagnosticGroup::resolve("고혈압 약 처방"),
            Some(DiagnosticGroup::Cardiovascular)
        );
    }

    #[test]
    fn test_unmatched_text_resolves_to_none() {
        assert_eq!(DiagnosticGroup::resolve("annual paperwork"), None);
    }

    #[test]
    fn test_display_names_are_lowercase_buckets() {
        assert_eq!(DiagnosticGroup::Respiratory.to_string(), "respiratory");
        assert_eq!(DiagnosticGroup::all_groups().len(), 7);
    }
}
