//! Configured engine with a read-mostly chart cache.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use ganzhi_base::{
    BirthMoment, CalendarConfig, CalendarType, ElementBalance, FavorableElements, FourPillars,
    HeavenlyStem, LuckTimeline, ResolvedBirth, StrengthAssessment, TenGodAssignment,
};
use ganzhi_reading::{AgeGroup, InterpretationAnswer, Report, ReportInputs};
use ganzhi_time::UtcOffset;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::context::ReadingContext;
use crate::error::GanzhiError;
use crate::store::{ChartStore, StoredChart};

/// Everything that determines a chart; gender is left out since it only
/// affects the luck direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    calendar: CalendarType,
    leap_month: bool,
    timezone: String,
    config: CalendarConfig,
}

impl CacheKey {
    fn new(birth: &BirthMoment, config: CalendarConfig) -> Self {
        Self {
            year: birth.year,
            month: birth.month,
            day: birth.day,
            hour: birth.hour,
            calendar: birth.calendar,
            leap_month: birth.leap_month,
            timezone: birth.timezone.trim().to_string(),
            config,
        }
    }
}

/// Full pipeline output for one birth moment and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub pillars: FourPillars,
    pub balance: ElementBalance,
    pub ten_gods: TenGodAssignment,
    pub strength: StrengthAssessment,
    pub favorable: FavorableElements,
    pub timeline: LuckTimeline,
    pub age_group: AgeGroup,
    pub answers: Vec<InterpretationAnswer>,
    pub report: Report,
}

/// Sexagenary engine. Safe to share across threads; cached charts are
/// written once and never changed.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    cache: RwLock<HashMap<CacheKey, FourPillars>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of memoized charts.
    pub fn cached_charts(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Four pillars of `birth`, memoized per birth fields and calendar config.
    pub fn compute(&self, birth: &BirthMoment) -> Result<FourPillars, GanzhiError> {
        let capacity = self.config.cache_capacity;
        if capacity == 0 {
            return Ok(ganzhi_base::compute(birth, &self.config.calendar)?);
        }
        let key = CacheKey::new(birth, self.config.calendar);
        match self.cache.read() {
            Ok(cache) => {
                if let Some(p) = cache.get(&key) {
                    log::debug!("chart cache hit for {}-{}-{}", key.year, key.month, key.day);
                    return Ok(*p);
                }
            }
            Err(_) => log::warn!("chart cache lock poisoned; computing without cache"),
        }
        let pillars = ganzhi_base::compute(birth, &self.config.calendar)?;
        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < capacity {
                log::debug!("chart cache miss for {}-{}-{}", key.year, key.month, key.day);
                cache.entry(key).or_insert(pillars);
            }
        }
        Ok(pillars)
    }

    pub fn analyze_elements(&self, pillars: &FourPillars) -> ElementBalance {
        ganzhi_base::analyze_elements(pillars)
    }

    pub fn resolve_ten_gods(&self, pillars: &FourPillars) -> TenGodAssignment {
        ganzhi_base::resolve_ten_gods(pillars)
    }

    pub fn classify_strength(
        &self,
        balance: &ElementBalance,
        day_master: HeavenlyStem,
    ) -> StrengthAssessment {
        ganzhi_base::classify_strength(balance, day_master)
    }

    pub fn select_favorable_elements(
        &self,
        balance: &ElementBalance,
        strength: &StrengthAssessment,
    ) -> FavorableElements {
        ganzhi_base::select_favorable_elements(balance, strength)
    }

    pub fn project_luck_timeline(
        &self,
        pillars: &FourPillars,
        birth: &BirthMoment,
        as_of: NaiveDate,
    ) -> Result<LuckTimeline, GanzhiError> {
        Ok(ganzhi_base::project_luck_timeline(
            pillars,
            birth,
            as_of,
            &self.config.luck(),
        )?)
    }

    pub fn compose_interpretation<S: AsRef<str>>(
        &self,
        balance: &ElementBalance,
        ten_gods: &TenGodAssignment,
        favorable: &FavorableElements,
        age_group: AgeGroup,
        topics: &[S],
    ) -> Vec<InterpretationAnswer> {
        ganzhi_reading::compose_interpretation(balance, ten_gods, favorable, age_group, topics)
    }

    pub fn assemble_report(&self, inputs: &ReportInputs<'_>) -> Report {
        ganzhi_reading::assemble_report(inputs)
    }

    /// Sexagenary year in effect at noon (UTC+8) on `date`.
    pub fn sexagenary_year_at(&self, date: NaiveDate) -> Result<i32, GanzhiError> {
        let noon_china = ResolvedBirth {
            date,
            hour: 4,
            offset: UtcOffset::UTC,
        };
        let (year, _) =
            ganzhi_base::sexagenary_year_month(&noon_china, self.config.calendar.month_boundary)?;
        Ok(year)
    }

    /// Run the whole pipeline: chart, balance, ten gods, favorable
    /// elements, luck timeline, answers and report.
    pub fn reading(
        &self,
        birth: &BirthMoment,
        ctx: &ReadingContext,
    ) -> Result<Reading, GanzhiError> {
        let pillars = self.compute(birth)?;
        let balance = self.analyze_elements(&pillars);
        let ten_gods = self.resolve_ten_gods(&pillars);
        let strength = self.classify_strength(&balance, pillars.day_master());
        let favorable = self.select_favorable_elements(&balance, &strength);
        let timeline = self.project_luck_timeline(&pillars, birth, ctx.as_of)?;
        let age_group = AgeGroup::from_age(timeline.current_age);
        let answers =
            self.compose_interpretation(&balance, &ten_gods, &favorable, age_group, &ctx.topics);
        let as_of_year = self.sexagenary_year_at(ctx.as_of)?;
        let report = self.assemble_report(&ReportInputs {
            pillars: &pillars,
            balance: &balance,
            ten_gods: &ten_gods,
            strength: &strength,
            favorable: &favorable,
            timeline: &timeline,
            answers: &answers,
            as_of_year,
            display: &ctx.display,
        });
        Ok(Reading {
            pillars,
            balance,
            ten_gods,
            strength,
            favorable,
            timeline,
            age_group,
            answers,
            report,
        })
    }

    /// Persist a reading's chart and report under `owner`.
    pub fn save_reading(
        &self,
        store: &dyn ChartStore,
        owner: &str,
        birth: &BirthMoment,
        reading: &Reading,
    ) -> Result<(), GanzhiError> {
        store.save(StoredChart {
            owner: owner.to_string(),
            birth: birth.clone(),
            pillars: reading.pillars,
            report: reading.report.clone(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_send_sync() {
        assert_send_sync::<Engine>();
    }

    #[test]
    fn cache_ignores_gender_and_respects_capacity() {
        let engine = Engine::default();
        let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul");
        let a = engine.compute(&birth).unwrap();
        let b = engine
            .compute(&birth.clone().with_gender(ganzhi_base::Gender::Female))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(engine.cached_charts(), 1);

        let no_cache = Engine::new(EngineConfig {
            cache_capacity: 0,
            ..EngineConfig::default()
        });
        no_cache.compute(&birth).unwrap();
        assert_eq!(no_cache.cached_charts(), 0);
    }

    #[test]
    fn invalid_input_is_not_cached() {
        let engine = Engine::default();
        let err = engine
            .compute(&BirthMoment::solar(1990, 2, 30, 12, "UTC"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(engine.cached_charts(), 0);
    }

    #[test]
    fn sexagenary_year_turns_at_lichun() {
        let engine = Engine::default();
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        assert_eq!(engine.sexagenary_year_at(d(1, 20)).unwrap(), 2023);
        assert_eq!(engine.sexagenary_year_at(d(2, 10)).unwrap(), 2024);
    }
}
