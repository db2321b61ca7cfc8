//! Luck timeline data types and lookups.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::calendar::{CalendarConfig, Gender};
use crate::element::{Element, Polarity};
use crate::error::LuckError;
use crate::pillar::Pillar;
use crate::stem::HeavenlyStem;
use crate::ten_god::TenGodFamily;

/// Windows are generated until one reaches this age.
pub const DEFAULT_MAX_AGE: u32 = 100;

/// Which way the month pillar walks through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Yang year with a male birth, or yin year with a female birth, runs
    /// forward; the other two combinations run backward. Without a gender
    /// the cycle runs forward.
    pub const fn from_chart(year_stem: HeavenlyStem, gender: Option<Gender>) -> Self {
        match (year_stem.polarity(), gender) {
            (_, None) => Self::Forward,
            (Polarity::Yang, Some(Gender::Male)) | (Polarity::Yin, Some(Gender::Female)) => {
                Self::Forward
            }
            _ => Self::Backward,
        }
    }

    /// +1 or −1 cycle steps per window.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Tone of a window, from the window element's family relative to the
/// Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckTheme {
    /// The opening window before the first decade pillar.
    Formative,
    SelfReliance,
    Expression,
    Prosperity,
    Discipline,
    Nurture,
}

impl LuckTheme {
    pub const fn from_family(family: TenGodFamily) -> Self {
        match family {
            TenGodFamily::Companion => Self::SelfReliance,
            TenGodFamily::Output => Self::Expression,
            TenGodFamily::Wealth => Self::Prosperity,
            TenGodFamily::Authority => Self::Discipline,
            TenGodFamily::Resource => Self::Nurture,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Formative => "formative",
            Self::SelfReliance => "self-reliance",
            Self::Expression => "expression",
            Self::Prosperity => "prosperity",
            Self::Discipline => "discipline",
            Self::Nurture => "nurture",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Formative => "early years shaped by family and surroundings",
            Self::SelfReliance => "a decade of independence and standing on your own",
            Self::Expression => "a decade for creating, speaking up and showing skills",
            Self::Prosperity => "a decade where effort turns into material results",
            Self::Discipline => "a decade of responsibility, structure and recognition",
            Self::Nurture => "a decade of learning, support and inner growth",
        }
    }
}

impl std::fmt::Display for LuckTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One window of the timeline, inclusive ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LuckPillar {
    pub age_start: u32,
    pub age_end: u32,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub element: Element,
    pub theme: LuckTheme,
}

impl LuckPillar {
    pub const fn contains(&self, age: u32) -> bool {
        age >= self.age_start && age <= self.age_end
    }
}

impl std::fmt::Display for LuckPillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3}-{:<3} {}-{} ({}, {})",
            self.age_start, self.age_end, self.stem, self.branch, self.element, self.theme
        )
    }
}

/// Where one window hands over to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LuckTransition {
    pub age: u32,
    /// Wide enough for any birth year plus any lookup age.
    pub year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckConfig {
    pub calendar: CalendarConfig,
    /// Generate windows until one ends at or beyond this age.
    pub max_age: u32,
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig::default(),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Ordered, contiguous windows from birth to at least the configured age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LuckTimeline {
    pub direction: LuckDirection,
    /// First age of the first decade pillar, 1..=10.
    pub start_age: u32,
    pub birth_date: NaiveDate,
    pub as_of: NaiveDate,
    /// Completed years at `as_of`.
    pub current_age: u32,
    pub day_master: HeavenlyStem,
    pub month_pillar: Pillar,
    pub windows: Vec<LuckPillar>,
}

impl LuckTimeline {
    /// Window number holding `age`; 0 is the formative window.
    pub const fn window_index(&self, age: u32) -> u32 {
        if age < self.start_age {
            0
        } else {
            (age - self.start_age) / 10 + 1
        }
    }

    /// Window `k`, whether or not it was generated up front.
    pub fn window(&self, k: u32) -> LuckPillar {
        if let Some(w) = self.windows.get(k as usize) {
            return *w;
        }
        build_window(
            self.month_pillar,
            self.day_master,
            self.direction,
            self.start_age,
            k,
        )
    }

    /// Window covering `age`. Ages past the generated range are extended
    /// with the same rule.
    pub fn current_luck_pillar(&self, age: i32) -> Result<LuckPillar, LuckError> {
        let age = non_negative(age)?;
        Ok(self.window(self.window_index(age)))
    }

    /// Window after the one covering `age`.
    pub fn next_luck_pillar(&self, age: i32) -> Result<LuckPillar, LuckError> {
        let age = non_negative(age)?;
        Ok(self.window(self.window_index(age) + 1))
    }

    /// Age and calendar year at which the window after `age` begins.
    pub fn transition(&self, age: i32) -> Result<LuckTransition, LuckError> {
        let next = self.next_luck_pillar(age)?;
        Ok(LuckTransition {
            age: next.age_start,
            year: i64::from(self.birth_date.year()) + i64::from(next.age_start),
        })
    }

    /// Window covering the as-of age.
    pub fn current(&self) -> LuckPillar {
        self.window(self.window_index(self.current_age))
    }
}

fn non_negative(age: i32) -> Result<u32, LuckError> {
    u32::try_from(age).map_err(|_| LuckError::NegativeAge(age))
}

pub(crate) fn build_window(
    month_pillar: Pillar,
    day_master: HeavenlyStem,
    direction: LuckDirection,
    start_age: u32,
    k: u32,
) -> LuckPillar {
    if k == 0 {
        return LuckPillar {
            age_start: 0,
            age_end: start_age.saturating_sub(1),
            stem: month_pillar.stem(),
            branch: month_pillar.branch(),
            element: month_pillar.element(),
            theme: LuckTheme::Formative,
        };
    }
    let pillar = month_pillar.offset(direction.step() * i64::from(k));
    let age_start = start_age + 10 * (k - 1);
    let family = TenGodFamily::of_element(day_master.element(), pillar.element());
    LuckPillar {
        age_start,
        age_end: age_start + 9,
        stem: pillar.stem(),
        branch: pillar.branch(),
        element: pillar.element(),
        theme: LuckTheme::from_family(family),
    }
}
