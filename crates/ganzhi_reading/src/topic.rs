//! Interpretation topics and age groups.

use std::str::FromStr;

use ganzhi_base::TenGodFamily;
use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Personality,
    Career,
    Wealth,
    Romance,
    Health,
    Study,
    Social,
}

pub const ALL_TOPICS: [Topic; 7] = [
    Topic::Personality,
    Topic::Career,
    Topic::Wealth,
    Topic::Romance,
    Topic::Health,
    Topic::Study,
    Topic::Social,
];

impl Topic {
    pub const fn index(self) -> usize {
        match self {
            Self::Personality => 0,
            Self::Career => 1,
            Self::Wealth => 2,
            Self::Romance => 3,
            Self::Health => 4,
            Self::Study => 5,
            Self::Social => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Romance => "romance",
            Self::Health => "health",
            Self::Study => "study",
            Self::Social => "social",
        }
    }

    /// Section heading.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Personality => "Personality",
            Self::Career => "Career",
            Self::Wealth => "Wealth",
            Self::Romance => "Relationships",
            Self::Health => "Health",
            Self::Study => "Study",
            Self::Social => "Social life",
        }
    }

    /// Ten-god family whose strength drives this topic.
    pub const fn family(self) -> TenGodFamily {
        match self {
            Self::Personality | Self::Social => TenGodFamily::Companion,
            Self::Career => TenGodFamily::Authority,
            Self::Wealth => TenGodFamily::Wealth,
            Self::Romance | Self::Health => TenGodFamily::Output,
            Self::Study => TenGodFamily::Resource,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_TOPICS
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ReadingError::UnknownTopic(s.to_string()))
    }
}

/// Parse requested topic names in order. Unknown names are logged and
/// skipped; duplicates are kept once.
pub fn parse_topics<S: AsRef<str>>(requested: &[S]) -> Vec<Topic> {
    let mut topics = Vec::with_capacity(requested.len());
    for raw in requested {
        match raw.as_ref().parse::<Topic>() {
            Ok(t) if !topics.contains(&t) => topics.push(t),
            Ok(_) => {}
            Err(e) => log::warn!("skipping topic: {e}"),
        }
    }
    topics
}

/// Life stage used to gate content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Teen,
    YoungAdult,
    Adult,
    Senior,
}

impl AgeGroup {
    /// 0–12 child, 13–19 teen, 20–34 young adult, 35–59 adult, 60+ senior.
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=12 => Self::Child,
            13..=19 => Self::Teen,
            20..=34 => Self::YoungAdult,
            35..=59 => Self::Adult,
            _ => Self::Senior,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teen => "teen",
            Self::YoungAdult => "young_adult",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Career".parse::<Topic>(), Ok(Topic::Career));
        assert_eq!(" social ".parse::<Topic>(), Ok(Topic::Social));
        assert_eq!(
            "tarot".parse::<Topic>(),
            Err(ReadingError::UnknownTopic("tarot".into()))
        );
    }

    #[test]
    fn unknown_topics_skipped_in_order() {
        let got = parse_topics(&["wealth", "tarot", "career", "wealth"]);
        assert_eq!(got, vec![Topic::Wealth, Topic::Career]);
    }

    #[test]
    fn age_bands() {
        assert_eq!(AgeGroup::from_age(0), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(13), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(19), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(20), AgeGroup::YoungAdult);
        assert_eq!(AgeGroup::from_age(35), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Senior);
        assert_eq!(AgeGroup::from_age(101), AgeGroup::Senior);
    }
}
