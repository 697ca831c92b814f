//! Domain models for the event and episode reconstruction engine
//!
//! This module contains the data contracts shared with the upstream OCR
//! collaborators and the downstream report renderer.

pub mod anchor;
pub mod episode;
pub mod event;
pub mod geometry;
pub mod record;

pub use anchor::{DateAnchor, DateAnchorKind, TextBlock};
pub use episode::{Episode, EpisodeGrouping, EpisodeLink, EpisodeStats};
pub use event::{EventMeta, EventSlots, Evidence, MedicalEvent, RelationEdge, MAX_SNIPPET_CHARS};
pub use geometry::BoundingBox;
pub use record::OutpatientRecord;
