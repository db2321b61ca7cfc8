//! Persistence seam for charts and reports.

use std::collections::BTreeMap;
use std::sync::RwLock;

use ganzhi_base::{BirthMoment, FourPillars};
use ganzhi_reading::Report;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("chart store lock poisoned")]
    Poisoned,
    #[error("chart store backend failed: {0}")]
    Backend(String),
}

/// A saved chart with its last report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredChart {
    pub owner: String,
    pub birth: BirthMoment,
    pub pillars: FourPillars,
    pub report: Report,
}

/// Save and load charts by owner id.
pub trait ChartStore: Send + Sync {
    /// Insert or replace the chart for `chart.owner`.
    fn save(&self, chart: StoredChart) -> Result<(), StoreError>;

    fn load(&self, owner: &str) -> Result<Option<StoredChart>, StoreError>;

    /// Remove and return the owner's chart.
    fn remove(&self, owner: &str) -> Result<Option<StoredChart>, StoreError>;
}

/// In-process store, mainly for tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    charts: RwLock<BTreeMap<String, StoredChart>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.charts.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChartStore for MemoryStore {
    fn save(&self, chart: StoredChart) -> Result<(), StoreError> {
        let mut charts = self.charts.write().map_err(|_| StoreError::Poisoned)?;
        charts.insert(chart.owner.clone(), chart);
        Ok(())
    }

    fn load(&self, owner: &str) -> Result<Option<StoredChart>, StoreError> {
        let charts = self.charts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(charts.get(owner).cloned())
    }

    fn remove(&self, owner: &str) -> Result<Option<StoredChart>, StoreError> {
        let mut charts = self.charts.write().map_err(|_| StoreError::Poisoned)?;
        Ok(charts.remove(owner))
    }
}
