//! Screen-side aggregations
//!
//! Screens reduce raw API records into the small numeric records that
//! section builders consume. Everything here is a pure function of its input.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// XP needed per level
pub const XP_PER_LEVEL: u64 = 200;

/// Calorie goal assumed for calendar days the API has no entry for
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;

/// Protein goal assumed for calendar days the API has no entry for
pub const DEFAULT_PROTEIN_GOAL: u32 = 150;

fn rounded_average(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (total + count / 2) / count
}

// =============================================================================
// Meal History
// =============================================================================

/// A logged meal as returned by the meal history endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Meal name
    #[serde(default)]
    pub name: String,
    /// Calories, when the analysis produced them
    #[serde(default)]
    pub calories: Option<u32>,
    /// Whether the user starred the meal
    #[serde(default)]
    pub is_favorite: bool,
}

/// Totals shown at the top of the meal history screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealHistorySummary {
    /// Number of meals
    pub total_meals: u64,
    /// Mean calories per meal, rounded
    pub avg_calories: u64,
    /// Number of favorite meals
    pub favorite_meals: u64,
    /// Sum of calories
    pub total_calories: u64,
}

impl MealHistorySummary {
    /// Summarize a meal list; `None` when there are no meals
    pub fn from_meals(meals: &[MealRecord]) -> Option<Self> {
        if meals.is_empty() {
            return None;
        }

        let total_meals = meals.len() as u64;
        let total_calories: u64 = meals
            .iter()
            .map(|meal| u64::from(meal.calories.unwrap_or(0)))
            .sum();
        let favorite_meals = meals.iter().filter(|meal| meal.is_favorite).count() as u64;

        Some(Self {
            total_meals,
            avg_calories: rounded_average(total_calories, total_meals),
            favorite_meals,
            total_calories,
        })
    }
}

// =============================================================================
// Recommended Menus
// =============================================================================

/// A recommended menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    /// Menu title
    #[serde(default)]
    pub title: String,
    /// Calories across all meals of the menu
    #[serde(default)]
    pub total_calories: Option<u32>,
    /// Meal names in the menu
    #[serde(default)]
    pub meals: Vec<String>,
}

/// Totals shown on the recommended menus screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSummary {
    /// Number of menus
    pub total_menus: u64,
    /// Mean calories per menu, rounded
    pub avg_calories: u64,
    /// Meals across all menus
    pub total_meals: u64,
}

impl MenuSummary {
    /// Summarize menus; `None` when there are no menus
    pub fn from_menus(menus: &[MenuRecord]) -> Option<Self> {
        if menus.is_empty() {
            return None;
        }

        let total_menus = menus.len() as u64;
        let total_calories: u64 = menus
            .iter()
            .map(|menu| u64::from(menu.total_calories.unwrap_or(0)))
            .sum();
        let total_meals = menus.iter().map(|menu| menu.meals.len() as u64).sum();

        Some(Self {
            total_menus,
            avg_calories: rounded_average(total_calories, total_menus),
            total_meals,
        })
    }
}

// =============================================================================
// Calendar
// =============================================================================

/// One calendar day as returned by the calendar endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Calorie goal
    pub calories_goal: u32,
    /// Calories eaten
    pub calories_actual: u32,
    /// Protein goal in grams
    pub protein_goal: u32,
    /// Protein eaten in grams
    pub protein_actual: u32,
    /// Meals logged
    pub meal_count: u32,
    /// Water in milliliters
    pub water_intake_ml: u32,
}

impl DayRecord {
    /// Placeholder for a day the API returned nothing for
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            calories_goal: DEFAULT_CALORIE_GOAL,
            calories_actual: 0,
            protein_goal: DEFAULT_PROTEIN_GOAL,
            protein_actual: 0,
            meal_count: 0,
            water_intake_ml: 0,
        }
    }

    /// Calorie progress for the day
    pub fn progress(&self) -> DayProgress {
        DayProgress::of(self.calories_actual, self.calories_goal)
    }
}

/// How close a day came to its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayProgress {
    /// At or above the goal
    Complete,
    /// At least 70% of the goal
    Close,
    /// Below 70%, or no goal set
    Behind,
}

impl DayProgress {
    /// Classify `actual` against `goal`
    pub fn of(actual: u32, goal: u32) -> Self {
        if goal == 0 {
            return DayProgress::Behind;
        }
        let actual = u64::from(actual) * 100;
        let goal = u64::from(goal);
        if actual >= goal * 100 {
            DayProgress::Complete
        } else if actual >= goal * 70 {
            DayProgress::Close
        } else {
            DayProgress::Behind
        }
    }
}

/// Monthly totals shown above the calendar grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Days with at least one meal
    pub days_tracked: u64,
    /// Days that reached the calorie goal
    pub completed_days: u64,
    /// Mean calories over tracked days, rounded
    pub avg_calories: u64,
    /// Meals across the month
    pub total_meals: u64,
}

impl MonthSummary {
    /// Summarize a month of day records
    pub fn from_days(days: &[DayRecord]) -> Self {
        let tracked: Vec<&DayRecord> = days.iter().filter(|day| day.meal_count > 0).collect();
        let days_tracked = tracked.len() as u64;
        let tracked_calories: u64 = tracked
            .iter()
            .map(|day| u64::from(day.calories_actual))
            .sum();

        Self {
            days_tracked,
            completed_days: days
                .iter()
                .filter(|day| day.progress() == DayProgress::Complete)
                .count() as u64,
            avg_calories: rounded_average(tracked_calories, days_tracked),
            total_meals: days.iter().map(|day| u64::from(day.meal_count)).sum(),
        }
    }
}

// =============================================================================
// Gamification
// =============================================================================

/// Level reached with `xp` experience points (starts at 1)
pub fn level_for_xp(xp: u64) -> u64 {
    xp / XP_PER_LEVEL + 1
}

/// Time-of-day greeting on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    /// Before noon
    Morning,
    /// Noon to 6pm
    Afternoon,
    /// 6pm onwards
    Evening,
}

impl Greeting {
    /// Greeting for a 24h clock hour
    pub fn for_hour(hour: u8) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    /// Greeting for the current local time
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour() as u8)
    }

    /// Display text
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning",
            Greeting::Afternoon => "Good Afternoon",
            Greeting::Evening => "Good Evening",
        }
    }
}
