//! Facade error type.

use ganzhi_base::{CalendarError, LuckError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Every error the facade can return.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Luck(#[from] LuckError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<ValidationError> for GanzhiError {
    fn from(e: ValidationError) -> Self {
        Self::Calendar(CalendarError::Validation(e))
    }
}

impl GanzhiError {
    /// True when the caller supplied a bad birth moment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Calendar(CalendarError::Validation(_))
                | Self::Luck(LuckError::Calendar(CalendarError::Validation(_)))
        )
    }
}
