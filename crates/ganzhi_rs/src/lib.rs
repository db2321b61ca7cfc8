//! Convenience facade for the ganzhi sexagenary engine.
//!
//! Free functions cover the default configuration; [`Engine`] carries a
//! custom [`EngineConfig`] and memoizes charts. Request parameters travel
//! in a [`ReadingContext`], and [`ChartStore`] is the persistence seam.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Male);
//! let engine = Engine::default();
//! let ctx = ReadingContext::new(chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//! let reading = engine.reading(&birth, &ctx).unwrap();
//! println!("{}", reading.report.summary);
//! ```

pub mod config;
pub mod context;
pub mod convenience;
pub mod engine;
pub mod error;
pub mod store;

pub use config::{ConfigError, DEFAULT_CACHE_CAPACITY, EngineConfig};
pub use context::ReadingContext;
pub use convenience::{compute, project_luck_timeline};
pub use engine::{Engine, Reading};
pub use error::GanzhiError;
pub use store::{ChartStore, MemoryStore, StoreError, StoredChart};

// Stateless stages need no configuration; re-export them as-is.
pub use ganzhi_base::{
    analyze_elements, classify_strength, resolve_ten_gods, select_favorable_elements,
};
pub use ganzhi_reading::{assemble_report, compose_interpretation};

pub use ganzhi_base::{
    BirthMoment, CalendarConfig, CalendarType, EarthlyBranch, Element, ElementBalance,
    FavorableElements, FourPillars, Gender, HeavenlyStem, LuckDirection, LuckPillar, LuckTheme,
    LuckTimeline, MonthBoundary, Pillar, StrengthAssessment, StrengthClass, TenGod,
    TenGodAssignment, ZiHourMode,
};
pub use ganzhi_reading::{
    AgeGroup, DisplayMeta, InterpretationAnswer, Report, ReportInputs, ReportSection, Topic,
};
