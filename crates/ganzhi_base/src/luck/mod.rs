//! Decade luck pillars.
//!
//! The month pillar is walked forward or backward through the 60-cycle,
//! one step per ten-year window. The first window runs from birth until
//! the start age and keeps the month pillar itself.

pub mod start;
pub mod timeline;
pub mod types;

pub use start::{boundary_days, start_age};
pub use timeline::project_luck_timeline;
pub use types::{
    DEFAULT_MAX_AGE, LuckConfig, LuckDirection, LuckPillar, LuckTheme, LuckTimeline,
    LuckTransition,
};
