//! Section builders
//!
//! Pure functions that turn a small input record into one [`PageSection`],
//! applying the labels, icons, accent colors and unit suffixes every screen
//! shares.
//!
//! Data builders and action builders treat missing input differently:
//! - a missing number renders as a zero tile, the tile is always present
//! - a missing handler drops its action tile from the grid entirely

use crate::components::{Handler, Node};
use crate::section::{
    ActionColumns, ActionItem, ActionSection, Content, MetricItem, MetricsSection, PageSection,
    StatColumns, StatItem, StatSection,
};
use crate::theme::colors;
use app_core::summary::{level_for_xp, MealHistorySummary, MonthSummary};

/// Format an integer with en-US thousands separators (`675000` -> `675,000`)
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Missing, non-finite and zero amounts all display as `0`
fn amount(value: Option<f32>) -> f32 {
    value
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(0.0)
}

/// Build an action tile only when its handler is wired
fn action(
    handler: &Option<Handler>,
    icon: &str,
    label: &str,
    color: &str,
) -> Option<ActionItem> {
    handler
        .as_ref()
        .map(|on_press| ActionItem::new(icon, label, on_press.clone()).with_color(color))
}

fn compact(items: impl IntoIterator<Item = Option<ActionItem>>) -> Vec<ActionItem> {
    items.into_iter().flatten().collect()
}

// =============================================================================
// Nutrition
// =============================================================================

/// Daily macro totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionStatsInput {
    /// Calories (kcal)
    pub calories: Option<u32>,
    /// Protein (g)
    pub protein: Option<f32>,
    /// Carbohydrates (g)
    pub carbs: Option<f32>,
    /// Fats (g)
    pub fats: Option<f32>,
    /// Water (ml); accepted but not shown
    pub water: Option<u32>,
}

/// Calories and macro tiles, two per row
pub fn nutrition_stats(input: NutritionStatsInput) -> PageSection {
    PageSection::Stats(StatSection {
        items: vec![
            StatItem::new("flame", "Calories", input.calories.unwrap_or(0).to_string())
                .with_color(colors::ERROR_500),
            StatItem::new("barbell", "Protein", format!("{}g", amount(input.protein)))
                .with_color(colors::CHART_PROTEIN),
            StatItem::new("nutrition", "Carbs", format!("{}g", amount(input.carbs)))
                .with_color(colors::WARNING_500),
            StatItem::new("water", "Fats", format!("{}g", amount(input.fats)))
                .with_color(colors::SUCCESS_500),
        ],
        columns: StatColumns::Two,
    })
}

// =============================================================================
// Weekly Progress
// =============================================================================

/// Last seven days at a glance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyProgressInput {
    /// Average daily calories
    pub avg_calories: Option<u64>,
    /// Meals logged
    pub meals_tracked: Option<u64>,
    /// Current streak
    pub streak_days: Option<u64>,
    /// Experience points
    pub total_xp: Option<u64>,
}

/// Weekly metric cards
pub fn weekly_progress(input: WeeklyProgressInput) -> PageSection {
    PageSection::Metrics(MetricsSection {
        items: vec![
            MetricItem::new("Average Calories", input.avg_calories.unwrap_or(0).to_string())
                .with_subtitle("This week")
                .with_icon("flame")
                .with_color(colors::ERROR_500),
            MetricItem::new("Meals Tracked", input.meals_tracked.unwrap_or(0).to_string())
                .with_subtitle("Last 7 days")
                .with_icon("restaurant")
                .with_color(colors::SUCCESS_500),
            MetricItem::new("Streak Days", input.streak_days.unwrap_or(0).to_string())
                .with_subtitle("Current streak")
                .with_icon("flame-outline")
                .with_color(colors::WARNING_500),
            MetricItem::new("Total XP", input.total_xp.unwrap_or(0).to_string())
                .with_subtitle("Experience points")
                .with_icon("star")
                .with_color(colors::CHART_PROTEIN),
        ],
    })
}

// =============================================================================
// Main Actions
// =============================================================================

/// Home screen shortcuts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainActionHandlers {
    /// Open the food scanner
    pub on_scan_food: Option<Handler>,
    /// Open recommended menus
    pub on_view_menus: Option<Handler>,
    /// Open the calendar
    pub on_open_calendar: Option<Handler>,
    /// Open the AI chat
    pub on_open_ai_chat: Option<Handler>,
}

/// Home shortcut tiles, two per row
pub fn main_actions(handlers: &MainActionHandlers) -> PageSection {
    PageSection::Actions(ActionSection {
        items: compact([
            action(&handlers.on_scan_food, "camera", "Scan Food", colors::PRIMARY_500),
            action(&handlers.on_view_menus, "restaurant", "View Menus", colors::SUCCESS_500),
            action(&handlers.on_open_calendar, "calendar", "Calendar", colors::WARNING_500),
            action(
                &handlers.on_open_ai_chat,
                "chatbubble-ellipses",
                "AI Chat",
                colors::CHART_PROTEIN,
            ),
        ]),
        columns: ActionColumns::Two,
    })
}

// =============================================================================
// Calendar Stats
// =============================================================================

/// Month (or menu) totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarStatsInput {
    /// Days with at least one meal
    pub days_tracked: Option<u64>,
    /// Days that met the calorie goal
    pub completed_days: Option<u64>,
    /// Average calories
    pub avg_calories: Option<u64>,
    /// Meals logged
    pub total_meals: Option<u64>,
}

impl From<&MonthSummary> for CalendarStatsInput {
    fn from(summary: &MonthSummary) -> Self {
        Self {
            days_tracked: Some(summary.days_tracked),
            completed_days: Some(summary.completed_days),
            avg_calories: Some(summary.avg_calories),
            total_meals: Some(summary.total_meals),
        }
    }
}

/// Calendar summary tiles, two per row
pub fn calendar_stats(input: CalendarStatsInput) -> PageSection {
    PageSection::Stats(StatSection {
        items: vec![
            StatItem::new("calendar", "Days Tracked", input.days_tracked.unwrap_or(0).to_string())
                .with_color(colors::PRIMARY_500),
            StatItem::new(
                "checkmark-circle",
                "Completed",
                input.completed_days.unwrap_or(0).to_string(),
            )
            .with_color(colors::SUCCESS_500),
            StatItem::new("flame", "Avg Calories", input.avg_calories.unwrap_or(0).to_string())
                .with_color(colors::ERROR_500),
            StatItem::new("restaurant", "Total Meals", input.total_meals.unwrap_or(0).to_string())
                .with_color(colors::WARNING_500),
        ],
        columns: StatColumns::Two,
    })
}

// =============================================================================
// Achievements
// =============================================================================

/// Gamification progress
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementsInput {
    /// Achievements available
    pub total_achievements: Option<u64>,
    /// Achievements unlocked
    pub unlocked_achievements: Option<u64>,
    /// Experience points
    pub total_xp: Option<u64>,
    /// Level; 1 when missing
    pub level: Option<u64>,
}

impl AchievementsInput {
    /// Input with the level derived from experience points
    pub fn from_xp(unlocked: u64, total: u64, xp: u64) -> Self {
        Self {
            total_achievements: Some(total),
            unlocked_achievements: Some(unlocked),
            total_xp: Some(xp),
            level: Some(level_for_xp(xp)),
        }
    }
}

/// Achievement tiles, three per row
pub fn achievements(input: AchievementsInput) -> PageSection {
    let unlocked = input.unlocked_achievements.unwrap_or(0);
    let total = input.total_achievements.unwrap_or(0);

    PageSection::Stats(StatSection {
        items: vec![
            StatItem::new("trophy", "Achievements", format!("{}/{}", unlocked, total))
                .with_color(colors::WARNING_500),
            StatItem::new("star", "Total XP", input.total_xp.unwrap_or(0).to_string())
                .with_color(colors::CHART_PROTEIN),
            StatItem::new("trending-up", "Level", input.level.unwrap_or(1).to_string())
                .with_color(colors::PRIMARY_500),
        ],
        columns: StatColumns::Three,
    })
}

// =============================================================================
// Profile Actions
// =============================================================================

/// Profile screen actions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileActionHandlers {
    /// Edit the profile
    pub on_edit_profile: Option<Handler>,
    /// Open settings
    pub on_settings: Option<Handler>,
    /// Open notification preferences
    pub on_notifications: Option<Handler>,
    /// Open privacy settings
    pub on_privacy: Option<Handler>,
    /// Open help
    pub on_help: Option<Handler>,
    /// Sign out
    pub on_logout: Option<Handler>,
}

/// Profile action tiles, three per row
pub fn profile_actions(handlers: &ProfileActionHandlers) -> PageSection {
    PageSection::Actions(ActionSection {
        items: compact([
            action(&handlers.on_edit_profile, "person-circle", "Edit Profile", colors::PRIMARY_500),
            action(&handlers.on_settings, "settings", "Settings", colors::NEUTRAL_600),
            action(&handlers.on_notifications, "notifications", "Notifications", colors::WARNING_500),
            action(&handlers.on_privacy, "lock-closed", "Privacy", colors::ERROR_500),
            action(&handlers.on_help, "help-circle", "Help", colors::CHART_WATER),
            action(&handlers.on_logout, "log-out", "Logout", colors::ERROR_600),
        ]),
        columns: ActionColumns::Three,
    })
}

// =============================================================================
// User Stats
// =============================================================================

/// Lifetime account totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStatsInput {
    /// Meals logged
    pub total_meals: Option<u64>,
    /// Days since joining
    pub days_active: Option<u64>,
    /// Saved recipes
    pub favorite_meals: Option<u64>,
    /// Calories logged
    pub calories_total: Option<u64>,
}

impl From<&MealHistorySummary> for UserStatsInput {
    fn from(summary: &MealHistorySummary) -> Self {
        Self {
            total_meals: Some(summary.total_meals),
            days_active: None,
            favorite_meals: Some(summary.favorite_meals),
            calories_total: Some(summary.total_calories),
        }
    }
}

/// Lifetime metric cards
pub fn user_stats(input: UserStatsInput) -> PageSection {
    PageSection::Metrics(MetricsSection {
        items: vec![
            MetricItem::new("Total Meals", input.total_meals.unwrap_or(0).to_string())
                .with_subtitle("All time")
                .with_icon("restaurant")
                .with_color(colors::SUCCESS_500),
            MetricItem::new("Days Active", input.days_active.unwrap_or(0).to_string())
                .with_subtitle("Since joining")
                .with_icon("calendar")
                .with_color(colors::PRIMARY_500),
            MetricItem::new("Favorite Meals", input.favorite_meals.unwrap_or(0).to_string())
                .with_subtitle("Saved recipes")
                .with_icon("heart")
                .with_color(colors::ERROR_500),
            MetricItem::new("Total Calories", format_grouped(input.calories_total.unwrap_or(0)))
                .with_subtitle("Lifetime tracking")
                .with_icon("flame")
                .with_color(colors::WARNING_500),
        ],
    })
}

// =============================================================================
// Menu Actions
// =============================================================================

/// Menu screen actions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuActionHandlers {
    /// Create a menu
    pub on_create_menu: Option<Handler>,
    /// Open the active menu
    pub on_view_active: Option<Handler>,
    /// Open past menus
    pub on_view_history: Option<Handler>,
    /// Generate a menu with AI
    pub on_generate_ai: Option<Handler>,
}

/// Menu action tiles, two per row
pub fn menu_actions(handlers: &MenuActionHandlers) -> PageSection {
    PageSection::Actions(ActionSection {
        items: compact([
            action(&handlers.on_create_menu, "add-circle", "Create Menu", colors::PRIMARY_500),
            action(&handlers.on_view_active, "list", "Active Menu", colors::SUCCESS_500),
            action(&handlers.on_view_history, "time", "Menu History", colors::WARNING_500),
            action(&handlers.on_generate_ai, "sparkles", "AI Generate", colors::CHART_PROTEIN),
        ]),
        columns: ActionColumns::Two,
    })
}

// =============================================================================
// Device Stats
// =============================================================================

/// Wearable readings for today
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceStatsInput {
    /// Paired devices
    pub connected_devices: Option<u64>,
    /// Steps today
    pub todays_steps: Option<u64>,
    /// Latest heart rate (bpm)
    pub heart_rate: Option<u32>,
    /// Sleep last night (hours)
    pub sleep_hours: Option<f32>,
}

/// Device reading tiles, two per row
pub fn device_stats(input: DeviceStatsInput) -> PageSection {
    PageSection::Stats(StatSection {
        items: vec![
            StatItem::new(
                "phone-portrait",
                "Devices",
                input.connected_devices.unwrap_or(0).to_string(),
            )
            .with_color(colors::PRIMARY_500),
            StatItem::new("walk", "Steps", format_grouped(input.todays_steps.unwrap_or(0)))
                .with_color(colors::SUCCESS_500),
            StatItem::new("heart", "Heart Rate", format!("{} bpm", input.heart_rate.unwrap_or(0)))
                .with_color(colors::ERROR_500),
            StatItem::new("bed", "Sleep", format!("{}h", amount(input.sleep_hours)))
                .with_color(colors::CHART_PROTEIN),
        ],
        columns: StatColumns::Two,
    })
}

// =============================================================================
// Opaque Sections
// =============================================================================

/// Wrap arbitrary content
pub fn custom_section(content: impl Into<Content>) -> PageSection {
    PageSection::Custom(content.into())
}

/// Wrap a calendar widget
pub fn calendar_section(content: impl Into<Content>) -> PageSection {
    PageSection::Calendar(content.into())
}

/// Wrap a pre-rendered tree as a custom section
pub fn node_section(node: impl Into<Node>) -> PageSection {
    custom_section(Content::node(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    fn stat_values(section: &PageSection) -> Vec<&str> {
        match section {
            PageSection::Stats(stats) => stats.items.iter().map(|i| i.value.as_str()).collect(),
            other => panic!("expected stats, got {:?}", other.kind()),
        }
    }

    fn metric_values(section: &PageSection) -> Vec<&str> {
        match section {
            PageSection::Metrics(m) => m.items.iter().map(|i| i.value.as_str()).collect(),
            other => panic!("expected metrics, got {:?}", other.kind()),
        }
    }

    fn action_labels(section: &PageSection) -> Vec<&str> {
        match section {
            PageSection::Actions(a) => a.items.iter().map(|i| i.label.as_str()).collect(),
            other => panic!("expected actions, got {:?}", other.kind()),
        }
    }

    // ==========================================================================
    // Formatting Tests
    // ==========================================================================

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(675000), "675,000");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    // ==========================================================================
    // Data Builder Tests
    // ==========================================================================

    #[test]
    fn test_nutrition_stats_units() {
        let section = nutrition_stats(NutritionStatsInput {
            calories: Some(1500),
            protein: Some(80.0),
            carbs: Some(150.0),
            fats: Some(45.5),
            water: Some(2000),
        });

        match &section {
            PageSection::Stats(stats) => {
                assert_eq!(stats.items.len(), 4);
                assert_eq!(stats.columns, StatColumns::Two);
            }
            other => panic!("expected stats, got {:?}", other.kind()),
        }
        assert_eq!(stat_values(&section), vec!["1500", "80g", "150g", "45.5g"]);
    }

    #[test]
    fn test_nutrition_stats_defaults_to_zero() {
        let section = nutrition_stats(NutritionStatsInput::default());
        let values = stat_values(&section);

        assert_eq!(values, vec!["0", "0g", "0g", "0g"]);
        assert!(values[1..].iter().all(|v| v.ends_with('g')));
    }

    #[test]
    fn test_unusable_amounts_display_as_zero() {
        let section = nutrition_stats(NutritionStatsInput {
            protein: Some(f32::NAN),
            carbs: Some(-0.0),
            fats: Some(f32::INFINITY),
            ..Default::default()
        });
        assert_eq!(stat_values(&section), vec!["0", "0g", "0g", "0g"]);

        let devices = device_stats(DeviceStatsInput {
            sleep_hours: Some(f32::NAN),
            ..Default::default()
        });
        assert_eq!(stat_values(&devices)[3], "0h");
    }

    #[test]
    fn test_weekly_progress_scenario() {
        let section = weekly_progress(WeeklyProgressInput {
            avg_calories: Some(1800),
            meals_tracked: Some(21),
            streak_days: Some(7),
            total_xp: Some(1200),
        });

        assert_eq!(section.kind(), SectionKind::Metrics);
        assert_eq!(metric_values(&section), vec!["1800", "21", "7", "1200"]);

        let PageSection::Metrics(metrics) = &section else {
            panic!("expected metrics");
        };
        let subtitles: Vec<_> = metrics
            .items
            .iter()
            .map(|i| i.subtitle.as_deref().unwrap())
            .collect();
        assert_eq!(
            subtitles,
            vec!["This week", "Last 7 days", "Current streak", "Experience points"]
        );
    }

    #[test]
    fn test_calendar_stats_from_month() {
        let summary = MonthSummary {
            days_tracked: 12,
            completed_days: 5,
            avg_calories: 1850,
            total_meals: 36,
        };
        let section = calendar_stats(CalendarStatsInput::from(&summary));
        assert_eq!(stat_values(&section), vec!["12", "5", "1850", "36"]);
    }

    #[test]
    fn test_achievements_level_defaults_to_one() {
        let section = achievements(AchievementsInput {
            total_achievements: Some(20),
            unlocked_achievements: Some(4),
            ..Default::default()
        });

        assert_eq!(stat_values(&section), vec!["4/20", "0", "1"]);
        let PageSection::Stats(stats) = &section else {
            panic!("expected stats");
        };
        assert_eq!(stats.columns, StatColumns::Three);
    }

    #[test]
    fn test_achievements_from_xp() {
        let section = achievements(AchievementsInput::from_xp(3, 10, 450));
        assert_eq!(stat_values(&section), vec!["3/10", "450", "3"]);
    }

    #[test]
    fn test_user_stats_groups_calories() {
        let section = user_stats(UserStatsInput {
            total_meals: Some(450),
            days_active: Some(120),
            favorite_meals: Some(12),
            calories_total: Some(675000),
        });
        assert_eq!(metric_values(&section), vec!["450", "120", "12", "675,000"]);
    }

    #[test]
    fn test_user_stats_from_meal_history() {
        let summary = MealHistorySummary {
            total_meals: 3,
            avg_calories: 500,
            favorite_meals: 1,
            total_calories: 1500,
        };
        let section = user_stats(UserStatsInput::from(&summary));
        assert_eq!(metric_values(&section), vec!["3", "0", "1", "1,500"]);
    }

    #[test]
    fn test_device_stats_units() {
        let section = device_stats(DeviceStatsInput {
            connected_devices: Some(2),
            todays_steps: Some(8432),
            heart_rate: Some(72),
            sleep_hours: Some(7.5),
        });
        assert_eq!(stat_values(&section), vec!["2", "8,432", "72 bpm", "7.5h"]);

        let empty = device_stats(DeviceStatsInput::default());
        assert_eq!(stat_values(&empty), vec!["0", "0", "0 bpm", "0h"]);
    }

    // ==========================================================================
    // Action Builder Tests
    // ==========================================================================

    #[test]
    fn test_main_actions_count_matches_handlers() {
        let scan = Handler::new(|| {});
        let chat = Handler::new(|| {});
        let section = main_actions(&MainActionHandlers {
            on_scan_food: Some(scan.clone()),
            on_open_ai_chat: Some(chat.clone()),
            ..Default::default()
        });

        let PageSection::Actions(actions) = &section else {
            panic!("expected actions");
        };
        assert_eq!(actions.items.len(), 2);
        assert_eq!(actions.columns, ActionColumns::Two);
        assert!(actions.items[0].on_press.ptr_eq(&scan));
        assert!(actions.items[1].on_press.ptr_eq(&chat));
        assert_eq!(action_labels(&section), vec!["Scan Food", "AI Chat"]);
    }

    #[test]
    fn test_main_actions_without_handlers_is_empty() {
        let section = main_actions(&MainActionHandlers::default());
        assert_eq!(section.kind(), SectionKind::Actions);
        assert_eq!(section.item_count(), 0);
    }

    #[test]
    fn test_profile_actions_declaration_order() {
        let section = profile_actions(&ProfileActionHandlers {
            on_logout: Some(Handler::new(|| {})),
            on_settings: Some(Handler::new(|| {})),
            ..Default::default()
        });

        assert_eq!(action_labels(&section), vec!["Settings", "Logout"]);
        let PageSection::Actions(actions) = &section else {
            panic!("expected actions");
        };
        assert_eq!(actions.columns, ActionColumns::Three);
        assert_eq!(actions.items[1].color.as_deref(), Some(colors::ERROR_600));
    }

    #[test]
    fn test_menu_actions_all_handlers() {
        let h = Handler::new(|| {});
        let section = menu_actions(&MenuActionHandlers {
            on_create_menu: Some(h.clone()),
            on_view_active: Some(h.clone()),
            on_view_history: Some(h.clone()),
            on_generate_ai: Some(h),
        });
        assert_eq!(
            action_labels(&section),
            vec!["Create Menu", "Active Menu", "Menu History", "AI Generate"]
        );
    }

    // ==========================================================================
    // Idempotence Tests
    // ==========================================================================

    #[test]
    fn test_builders_are_idempotent() {
        let input = WeeklyProgressInput {
            avg_calories: Some(1800),
            ..Default::default()
        };
        assert_eq!(weekly_progress(input.clone()), weekly_progress(input));

        let handlers = ProfileActionHandlers {
            on_help: Some(Handler::new(|| {})),
            ..Default::default()
        };
        assert_eq!(profile_actions(&handlers), profile_actions(&handlers));
    }

    #[test]
    fn test_opaque_sections_keep_content() {
        let content = Content::deferred(|_| Node::Empty);
        assert_eq!(custom_section(content.clone()), PageSection::Custom(content.clone()));
        assert_eq!(calendar_section(content.clone()), PageSection::Calendar(content));
        assert_eq!(node_section(Node::Empty).kind(), SectionKind::Custom);
    }
}
