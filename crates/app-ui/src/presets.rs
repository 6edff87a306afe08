//! Preset pages
//!
//! Fixed section sequences for the app's screen archetypes. Each preset takes
//! a typed config bundling the inputs of the builders it calls, and returns
//! the sections in display order. [`PresetPage`] adds the default chrome.

use crate::builders::{
    achievements, calendar_section, calendar_stats, custom_section, device_stats, main_actions,
    menu_actions, nutrition_stats, profile_actions, user_stats, weekly_progress,
    AchievementsInput, CalendarStatsInput, DeviceStatsInput, MainActionHandlers,
    MenuActionHandlers, NutritionStatsInput, ProfileActionHandlers, UserStatsInput,
    WeeklyProgressInput,
};
use crate::error::UiError;
use crate::section::{Content, PageSection};
use crate::template::PageTemplate;
use app_core::branding::{APP_NAME, APP_TAGLINE};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Preset Configs
// =============================================================================

/// Inputs of the home page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePageConfig {
    /// Today's totals
    pub nutrition: NutritionStatsInput,
    /// Shortcut handlers
    pub handlers: MainActionHandlers,
}

/// Inputs of the statistics page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsPageConfig {
    /// Weekly metrics
    pub weekly: WeeklyProgressInput,
    /// Gamification progress
    pub achievements: AchievementsInput,
}

/// Inputs of the calendar page
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarPageConfig {
    /// Month totals
    pub monthly: CalendarStatsInput,
    /// Calendar widget
    pub calendar: Content,
}

/// Inputs of the profile page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePageConfig {
    /// Lifetime totals
    pub stats: UserStatsInput,
    /// Profile action handlers
    pub handlers: ProfileActionHandlers,
}

/// Inputs of the menus page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenusPageConfig {
    /// Menu totals
    pub menu_stats: CalendarStatsInput,
    /// Menu action handlers
    pub handlers: MenuActionHandlers,
}

/// Inputs of the devices page
#[derive(Debug, Clone, PartialEq)]
pub struct DevicesPageConfig {
    /// Wearable readings
    pub devices: DeviceStatsInput,
    /// Device list widget
    pub device_list: Content,
}

// =============================================================================
// Presets
// =============================================================================

/// Nutrition tiles, then shortcuts
pub fn home(config: HomePageConfig) -> Vec<PageSection> {
    vec![
        nutrition_stats(config.nutrition),
        main_actions(&config.handlers),
    ]
}

/// Weekly metrics, then achievements
pub fn statistics(config: StatisticsPageConfig) -> Vec<PageSection> {
    vec![
        weekly_progress(config.weekly),
        achievements(config.achievements),
    ]
}

/// Month totals, then the calendar widget
pub fn calendar(config: CalendarPageConfig) -> Vec<PageSection> {
    vec![
        calendar_stats(config.monthly),
        calendar_section(config.calendar),
    ]
}

/// Lifetime totals, then profile actions
pub fn profile(config: ProfilePageConfig) -> Vec<PageSection> {
    vec![
        user_stats(config.stats),
        profile_actions(&config.handlers),
    ]
}

/// Menu totals, then menu actions
pub fn menus(config: MenusPageConfig) -> Vec<PageSection> {
    vec![
        calendar_stats(config.menu_stats),
        menu_actions(&config.handlers),
    ]
}

/// Wearable readings, then the device list
pub fn devices(config: DevicesPageConfig) -> Vec<PageSection> {
    vec![
        device_stats(config.devices),
        custom_section(config.device_list),
    ]
}

// =============================================================================
// Preset Page Chrome
// =============================================================================

/// Screen archetypes with a preset section sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetPage {
    /// Dashboard
    Home,
    /// Progress and achievements
    Statistics,
    /// Monthly calendar
    Calendar,
    /// Account
    Profile,
    /// Meal plans
    Menus,
    /// Wearables
    Devices,
}

impl PresetPage {
    /// Every archetype
    pub const ALL: [PresetPage; 6] = [
        Self::Home,
        Self::Statistics,
        Self::Calendar,
        Self::Profile,
        Self::Menus,
        Self::Devices,
    ];

    /// Page identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Statistics => "statistics",
            Self::Calendar => "calendar",
            Self::Profile => "profile",
            Self::Menus => "menus",
            Self::Devices => "devices",
        }
    }

    /// Default header title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => APP_NAME,
            Self::Statistics => "Statistics",
            Self::Calendar => "Calendar",
            Self::Profile => "Profile",
            Self::Menus => "Menus",
            Self::Devices => "Devices",
        }
    }

    /// Default header subtitle
    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Home => APP_TAGLINE,
            Self::Statistics => "Track your progress",
            Self::Calendar => "Monthly overview",
            Self::Profile => "Manage your account",
            Self::Menus => "Recommended meal plans",
            Self::Devices => "Connected health devices",
        }
    }

    /// Default header icon
    pub fn header_icon(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Statistics => "stats-chart",
            Self::Calendar => "calendar-outline",
            Self::Profile => "person",
            Self::Menus => "restaurant",
            Self::Devices => "watch",
        }
    }

    /// Template with this archetype's chrome around the given sections
    pub fn template(&self, sections: Vec<PageSection>) -> PageTemplate {
        PageTemplate::new(self.as_str(), self.title())
            .with_subtitle(self.subtitle())
            .with_header_icon(self.header_icon())
            .with_sections(sections)
    }
}

impl fmt::Display for PresetPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetPage {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UiError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Handler, Node};
    use crate::section::SectionKind;
    use crate::theme::light_theme;

    fn kinds(sections: &[PageSection]) -> Vec<SectionKind> {
        sections.iter().map(PageSection::kind).collect()
    }

    #[test]
    fn test_home_sequence() {
        let sections = home(HomePageConfig {
            handlers: MainActionHandlers {
                on_scan_food: Some(Handler::new(|| {})),
                ..Default::default()
            },
            ..Default::default()
        });

        assert_eq!(kinds(&sections), vec![SectionKind::Stats, SectionKind::Actions]);
        assert_eq!(sections[1].item_count(), 1);
    }

    #[test]
    fn test_statistics_sequence() {
        let sections = statistics(StatisticsPageConfig::default());
        assert_eq!(kinds(&sections), vec![SectionKind::Metrics, SectionKind::Stats]);
    }

    #[test]
    fn test_calendar_sequence() {
        let sections = calendar(CalendarPageConfig {
            monthly: CalendarStatsInput::default(),
            calendar: Content::node(Node::Empty),
        });
        assert_eq!(kinds(&sections), vec![SectionKind::Stats, SectionKind::Calendar]);
    }

    #[test]
    fn test_profile_and_menus_sequences() {
        assert_eq!(
            kinds(&profile(ProfilePageConfig::default())),
            vec![SectionKind::Metrics, SectionKind::Actions]
        );
        assert_eq!(
            kinds(&menus(MenusPageConfig::default())),
            vec![SectionKind::Stats, SectionKind::Actions]
        );
    }

    #[test]
    fn test_devices_sequence() {
        let sections = devices(DevicesPageConfig {
            devices: DeviceStatsInput::default(),
            device_list: Content::node(Node::Empty),
        });
        assert_eq!(kinds(&sections), vec![SectionKind::Stats, SectionKind::Custom]);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("home".parse::<PresetPage>().unwrap(), PresetPage::Home);
        assert_eq!("Devices".parse::<PresetPage>().unwrap(), PresetPage::Devices);
        assert!(matches!(
            "settings".parse::<PresetPage>(),
            Err(UiError::UnknownPreset(name)) if name == "settings"
        ));
    }

    #[test]
    fn test_preset_chrome() {
        let page = PresetPage::Home
            .template(home(HomePageConfig::default()))
            .render(&light_theme());

        assert_eq!(page.page_name, "home");
        assert_eq!(page.header_texts(), vec!["NutriTrack", "Your Health Dashboard"]);
        assert_eq!(page.sections().len(), 2);
    }

    #[test]
    fn test_every_preset_has_chrome() {
        for preset in PresetPage::ALL {
            let template = preset.template(Vec::new());
            assert_eq!(template.page_name, preset.to_string());
            assert!(!template.title.is_empty());
            assert!(template.subtitle.is_some());
            assert!(template.header_icon.is_some());
        }
    }
}
