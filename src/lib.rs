//! A Rust library for reconstructing date-anchored medical events and care
//! episodes from OCR-extracted fragments of scanned medical records.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod vocabulary;

// Re-export the most common types for easier use
// Core types
pub use config::BinderConfig;
pub use error::{MedLinkError, Result};
pub use models::{
    BoundingBox, DateAnchor, DateAnchorKind, Episode, EpisodeGrouping, EpisodeStats, Evidence,
    MedicalEvent, OutpatientRecord, TextBlock,
};

// Extraction pipeline
pub use algorithm::binder::bind;
pub use algorithm::packer::pack;
pub use algorithm::reconstruct_events;
pub use algorithm::scorer::{
    compute_relations, score_event, score_events, ScoreContext, ScorerWeights,
};

// Episode correlation
pub use algorithm::episode::{
    group_outpatient_episodes, CorrelationBoosts, CorrelationWeights, EpisodeConfig,
};

// Vocabularies
pub use vocabulary::{DiagnosticGroup, EventTag, VOCABULARY_VERSION};
