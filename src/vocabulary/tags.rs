//! Event tags detected from evidence text via synonym matching

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary::patterns;

/// Coarse category assigned to a piece of evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventTag {
    /// Inpatient admission or discharge context
    Admission,
    /// Surgical or operative context
    Surgery,
    /// Imaging studies (CT, MRI, X-ray, ultrasound)
    Imaging,
    /// Laboratory or diagnostic examinations
    Exam,
    /// Prior-condition statements
    PastHistory,
    /// Clinician assessments and plans
    DoctorOpinion,
}

impl EventTag {
    /// All tags, in detection order
    #[must_use]
    pub const fn all_tags() -> [Self; 6] {
        [
            Self::Admission,
            Self::Surgery,
            Self::Imaging,
            Self::Exam,
            Self::PastHistory,
            Self::DoctorOpinion,
        ]
    }

    /// Stable string form used in event metadata
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admission => "admission",
            Self::Surgery => "surgery",
            Self::Imaging => "imaging",
            Self::Exam => "exam",
            Self::PastHistory => "past-history",
            Self::DoctorOpinion => "doctor-opinion",
        }
    }

    /// Synonym dictionary for this tag
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Admission => &[
                "admission",
                "admitted",
                "hospitalization",
                "입원",
                "discharge",
                "퇴원",
            ],
            Self::Surgery => &[
                "surgery",
                "operation",
                "operative",
                "수술",
                "절제",
                "resection",
            ],
            Self::Imaging => &["ultrasound", "초음파", "촬영", "영상", "방사선"],
            Self::Exam => &[
                "examination",
                "검사",
                "test result",
                "lab",
                "endoscopy",
                "내시경",
                "심전도",
            ],
            Self::PastHistory => &[
                "past history",
                "history of",
                "기왕력",
                "과거력",
                "병력",
                "pmh",
            ],
            Self::DoctorOpinion => &[
                "opinion",
                "소견",
                "impression",
                "assessment",
                "판독",
                "recommend",
                "권고",
            ],
        }
    }

    /// Whether the text matches this tag's vocabulary
    ///
    /// Short imaging abbreviations (CT, MRI, PET) are matched on word
    /// boundaries so they do not fire inside unrelated words.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        if self
            .synonyms()
            .iter()
            .any(|syn| lowered.contains(&syn.to_lowercase()))
        {
            return true;
        }
        self == Self::Imaging && patterns::IMAGING_ABBREV.is_match(text)
    }

    /// Detect every tag whose vocabulary matches the text
    #[must_use]
    pub fn detect_all(text: &str) -> Vec<Self> {
        Self::all_tags()
            .into_iter()
            .filter(|tag| tag.matches(text))
            .collect()
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
