//! Request-scoped reading parameters.

use chrono::NaiveDate;
use ganzhi_reading::{ALL_TOPICS, DisplayMeta};
use serde::{Deserialize, Serialize};

/// Parameters of one reading request. Passed explicitly into every call
/// instead of living in process state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingContext {
    /// Date the reading is made for; fixes age, luck window and outlook.
    pub as_of: NaiveDate,
    /// Requested topic names; unknown names are skipped.
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub display: DisplayMeta,
}

impl ReadingContext {
    /// Context covering every topic.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            topics: ALL_TOPICS.iter().map(|t| t.name().to_string()).collect(),
            display: DisplayMeta::default(),
        }
    }

    pub fn with_topics<S: Into<String>>(mut self, topics: impl IntoIterator<Item = S>) -> Self {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.display.subject = Some(subject.into());
        self
    }
}
