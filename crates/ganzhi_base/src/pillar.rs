//! Pillars: validated stem/branch pairs, and the four-pillar chart.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::error::ComputationError;
use crate::sexagenary;
use crate::stem::HeavenlyStem;

/// One stem/branch pair of the sexagenary cycle.
///
/// Fields are private so every value satisfies the parity law; `element`
/// is always the stem's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPillar")]
pub struct Pillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
    element: Element,
}

#[derive(Deserialize)]
struct RawPillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
    #[serde(default)]
    element: Option<Element>,
}

impl TryFrom<RawPillar> for Pillar {
    type Error = ComputationError;

    fn try_from(raw: RawPillar) -> Result<Self, Self::Error> {
        let pillar = Self::try_new(raw.stem, raw.branch)?;
        match raw.element {
            Some(found) if found != pillar.element => Err(ComputationError::ElementMismatch {
                stem: raw.stem,
                found,
            }),
            _ => Ok(pillar),
        }
    }
}

impl Pillar {
    /// Pair a stem and branch; `None` when their parities differ.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self {
            stem,
            branch,
            element: stem.element(),
        })
    }

    /// Like [`Pillar::new`] but reporting the mismatch as an error.
    pub fn try_new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, ComputationError> {
        Self::new(stem, branch).ok_or(ComputationError::Parity { stem, branch })
    }

    /// Pillar at a cycle position (wraps mod 60).
    pub const fn from_cycle_index(index: u8) -> Self {
        let stem = sexagenary::stem_at(index);
        Self {
            stem,
            branch: sexagenary::branch_at(index),
            element: stem.element(),
        }
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.branch
    }

    /// Element of the stem.
    pub const fn element(&self) -> Element {
        self.element
    }

    /// Position in the 60-cycle (Jia-Zi = 0).
    pub const fn cycle_index(&self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar `n` cycle steps away.
    pub const fn offset(&self, n: i64) -> Self {
        Self::from_cycle_index(sexagenary::shift(self.cycle_index(), n))
    }

    /// Both characters, e.g. `庚午`.
    pub fn hanzi(&self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// Chart position of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Year, month, day and hour pillars of one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The day stem, reference point for every relational label.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }

    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// `(position, pillar)` pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.iter().map(move |&p| (p, self.get(p)))
    }

    pub fn stems(&self) -> [HeavenlyStem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub fn branches(&self) -> [EarthlyBranch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_enforced() {
        assert!(Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu).is_some());
        assert!(Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wei).is_none());
        assert_eq!(
            Pillar::try_new(HeavenlyStem::Jia, EarthlyBranch::Chou),
            Err(ComputationError::Parity {
                stem: HeavenlyStem::Jia,
                branch: EarthlyBranch::Chou
            })
        );
    }

    #[test]
    fn cycle_roundtrip_and_offset() {
        for i in 0..60 {
            let p = Pillar::from_cycle_index(i);
            assert_eq!(p.cycle_index(), i);
            assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
        }
        let jia_zi = Pillar::from_cycle_index(0);
        assert_eq!(jia_zi.offset(-1).to_string(), "Gui-Hai");
        assert_eq!(jia_zi.offset(61).to_string(), "Yi-Chou");
    }

    #[test]
    fn serde_roundtrip_and_rejects_bad_pair() {
        let p = Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Chen).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"stem":"geng","branch":"chen","element":"metal"}"#);
        let back: Pillar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let bad = r#"{"stem":"geng","branch":"si"}"#;
        assert!(serde_json::from_str::<Pillar>(bad).is_err());
        let wrong_element = r#"{"stem":"geng","branch":"chen","element":"wood"}"#;
        assert!(serde_json::from_str::<Pillar>(wrong_element).is_err());
    }

    #[test]
    fn hanzi_pair() {
        let p = Pillar::new(HeavenlyStem::Geng, EarthlyBranch::Wu).unwrap();
        assert_eq!(p.hanzi(), "庚午");
    }
}
