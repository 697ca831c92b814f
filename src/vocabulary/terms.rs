//! Flat term tables used by the slot packer, scorer and correlator

/// Visit-reason terms, in priority order (first match wins)
pub const VISIT_REASON: &[&str] = &[
    "referral",
    "의뢰",
    "follow-up",
    "follow up",
    "f/u",
    "재진",
    "경과관찰",
    "checkup",
    "검진",
    "emergency",
    "응급",
    "consult",
    "상담",
    "초진",
    "내원",
    "visit",
];

/// Diagnosis keywords matched alongside disease codes
pub const DIAGNOSIS: &[&str] = &[
    "cancer",
    "암종",
    "tumor",
    "종양",
    "neoplasm",
    "신생물",
    "diagnosis",
    "진단",
];

/// Imaging and laboratory examination variants
pub const EXAMINATION: &[&str] = &[
    "ultrasound",
    "초음파",
    "blood test",
    "혈액검사",
    "endoscopy",
    "내시경",
    "ekg",
    "ecg",
    "심전도",
    "urinalysis",
    "소변검사",
    "촬영",
];

/// Treatment variants (surgical, pharmacological, procedural)
pub const TREATMENT: &[&str] = &[
    "surgery",
    "수술",
    "chemotherapy",
    "항암",
    "radiation",
    "방사선치료",
    "medication",
    "약물",
    "처방",
    "prescription",
    "injection",
    "주사",
    "procedure",
    "시술",
    "physical therapy",
    "물리치료",
];

/// Subset of treatment terms that indicate surgery or an invasive procedure
pub const SURGICAL_TREATMENT: &[&str] = &["surgery", "수술", "operation", "절제", "procedure", "시술"];

/// Pathology report markers
pub const PATHOLOGY: &[&str] = &[
    "biopsy",
    "생검",
    "조직검사",
    "pathology",
    "병리",
    "tnm",
    "grade",
    "malignant",
    "악성",
    "benign",
    "양성",
];

/// Past-history statement terms
pub const PAST_HISTORY: &[&str] = &[
    "past history",
    "history of",
    "기왕력",
    "과거력",
    "병력",
    "pmh",
];

/// Clinician plan/assessment terms for the doctor-opinion slot
pub const OPINION: &[&str] = &[
    "plan",
    "impression",
    "assessment",
    "소견",
    "f/u",
    "follow-up",
    "권유",
    "요망",
];

/// Opinion phrases that signal a possible undisclosed pre-existing condition
pub const DISCLOSURE_TRIGGER: &[&str] = &[
    "admission needed",
    "입원 필요",
    "입원 권유",
    "surgery needed",
    "수술 필요",
    "수술 권유",
    "additional exam",
    "추가 검사",
    "정밀검사",
    "re-check",
    "recheck",
    "재검",
];

/// Treatment-continuity terms linking consecutive visits
pub const CONTINUITY: &[&str] = &[
    "follow-up",
    "follow up",
    "f/u",
    "재진",
    "경과관찰",
    "meds adjusted",
    "medication adjusted",
    "약물 조절",
    "처방 변경",
    "continue",
    "지속",
    "투약 유지",
];

/// Outpatient visit-sequence vocabulary (initial visit through re-check)
pub const OUTPATIENT_SEQUENCE: &[&str] = &[
    "초진",
    "first visit",
    "initial",
    "suspected",
    "의증",
    "재진",
    "follow-up",
    "follow up",
    "f/u",
    "경과관찰",
    "recheck",
    "재검",
];

/// Chief-complaint markers for primary-symptom classification
pub const CHIEF_COMPLAINT: &[&str] = &[
    "chief complaint",
    "c/c",
    "주소",
    "acute",
    "급성",
    "severe",
    "심한",
    "pain",
    "통증",
    "high fever",
    "고열",
];

/// Associated-symptom markers for secondary-symptom classification
pub const ASSOCIATED_SYMPTOM: &[&str] = &[
    "associated",
    "동반",
    "mild",
    "경미",
    "intermittent",
    "간헐적",
    "fatigue",
    "피로",
    "nausea",
    "오심",
    "itching",
    "가려움",
];

/// Outpatient-period context markers for treatment-range disambiguation
pub const OUTPATIENT_CONTEXT: &[&str] = &["outpatient", "외래", "통원"];

/// Literal fallback when the past-history tag fired without a textual match
pub const PAST_HISTORY_FALLBACK: &str = "past history indicated";

/// Literal fallback when the doctor-opinion tag fired without a textual match
pub const OPINION_FALLBACK: &str = "doctor opinion indicated";

/// Default value for absent narrative slots
pub const NOT_RECORDED: &str = "not recorded";
