//! Color coding for the status and overall-health placeholders.

use super::record::StatusCategory;
use crate::common::RGBColor;

/// Overall health: on track.
pub const HEALTH_GREEN: RGBColor = RGBColor::new(0, 135, 90);
/// Overall health: at risk.
pub const HEALTH_YELLOW: RGBColor = RGBColor::new(255, 192, 0);
/// Overall health: off track.
pub const HEALTH_RED: RGBColor = RGBColor::new(255, 0, 0);

const STATUS_TO_DO: RGBColor = RGBColor::new(66, 82, 110);
const STATUS_IN_PROGRESS: RGBColor = RGBColor::new(0, 82, 204);
const STATUS_COMPLETE: RGBColor = RGBColor::new(0, 135, 90);
const STATUS_UNDEFINED: RGBColor = RGBColor::new(128, 128, 128);

/// Color for an overall-health flag value, if the value is recognized.
/// Matching is case-insensitive; anything else keeps the template color.
pub fn overall_health_color(value: &str) -> Option<RGBColor> {
    match value.to_ascii_lowercase().as_str() {
        "green" => Some(HEALTH_GREEN),
        "yellow" => Some(HEALTH_YELLOW),
        "red" => Some(HEALTH_RED),
        _ => None,
    }
}

/// Color for a status category.
pub fn status_color(category: StatusCategory) -> RGBColor {
    match category {
        StatusCategory::ToDo => STATUS_TO_DO,
        StatusCategory::InProgress => STATUS_IN_PROGRESS,
        StatusCategory::Complete => STATUS_COMPLETE,
        StatusCategory::Undefined => STATUS_UNDEFINED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_values_are_case_insensitive() {
        assert_eq!(overall_health_color("Green"), Some(HEALTH_GREEN));
        assert_eq!(overall_health_color("YELLOW"), Some(HEALTH_YELLOW));
        assert_eq!(overall_health_color("red"), Some(HEALTH_RED));
        assert_eq!(overall_health_color("blue"), None);
    }

    #[test]
    fn test_status_categories_have_distinct_colors() {
        assert_ne!(
            status_color(StatusCategory::ToDo),
            status_color(StatusCategory::InProgress)
        );
        assert_eq!(
            status_color(StatusCategory::Complete),
            RGBColor::new(0, 135, 90)
        );
    }
}
