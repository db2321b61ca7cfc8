//! Deterministic interpretation of sexagenary charts.
//!
//! Answers come from immutable rule tables keyed by the dominant and
//! weakest elements, ten-god family strength and favorable elements. An
//! age filter runs after composition. Reports are ordered text sections
//! and serialize identically for identical inputs.

pub mod composer;
pub mod error;
pub mod filter;
mod rules;
pub mod report;
pub mod topic;

pub use composer::{InterpretationAnswer, compose_interpretation, compose_topic};
pub use error::ReadingError;
pub use filter::{apply_age_filter, mentions_blocked_vocabulary};
pub use report::{DisplayMeta, Report, ReportInputs, ReportSection, assemble_report};
pub use topic::{ALL_TOPICS, AgeGroup, Topic, parse_topics};
