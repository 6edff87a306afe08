//! Core application logic for NutriTrack
//!
//! This crate contains the screen-side logic that sits in front of the UI:
//! branding constants, the aggregations screens run over API records before
//! building page sections, and the fetch-then-set screen state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod error;
pub mod screen;
pub mod summary;

pub use error::{CoreError, Result};
pub use screen::{DataSource, ScreenState};
pub use summary::{
    level_for_xp, DayProgress, DayRecord, Greeting, MealHistorySummary, MealRecord,
    MenuRecord, MenuSummary, MonthSummary,
};
