//! Sexagenary chart computation on top of `ganzhi_time`.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, hidden stems and the five elements
//! - Four-pillar computation from a birth moment (solar-term or
//!   calendar-month boundaries, lunar input, Zi-hour modes)
//! - Five-element balance and ten-god labels
//! - Day Master strength and favorable-element selection
//! - Stem combinations, branch harmonies and clashes
//! - Decade luck timelines
//!
//! Every function here is pure; lookups go through fixed tables.

pub mod balance;
pub mod branch;
pub mod calendar;
pub mod element;
pub mod error;
pub mod favorable;
pub mod luck;
pub mod pillar;
pub mod relations;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;

pub use balance::{
    CHART_POSITIONS, ElementBalance, ElementCounts, analyze_elements, hidden_element_counts,
};
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use calendar::{
    BirthMoment, CalendarConfig, CalendarType, Gender, MonthBoundary, ResolvedBirth, ZiHourMode,
    compute, day_pillar, month_pillar, resolve, sexagenary_year_month, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{CalendarError, ComputationError, LuckError, ValidationError};
pub use favorable::{
    FavorableElements, StrengthAssessment, StrengthClass, classify_strength,
    select_favorable_elements,
};
pub use luck::{
    DEFAULT_MAX_AGE, LuckConfig, LuckDirection, LuckPillar, LuckTheme, LuckTimeline,
    LuckTransition, project_luck_timeline,
};
pub use pillar::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition};
pub use relations::{
    ChartRelation, RelationKind, branch_harmony, branches_clash, chart_relations,
    stem_combination,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{
    ALL_FAMILIES, BranchTenGods, FamilyStrength, TenGod, TenGodAssignment, TenGodFamily,
    resolve_ten_gods,
};
