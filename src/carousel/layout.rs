//! Centering math for the slider
//!
//! Assumes every card shares the width and margin of the first one; mixed
//! card sizes drift out of center and are not supported.

use serde::{Deserialize, Serialize};

use crate::models::CardStyle;

/// Rendered size of a card, sampled from the first card in the slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardMetrics {
    pub width: f64,
    pub margin_right: f64,
}

impl CardMetrics {
    pub fn new(width: f64, margin_right: f64) -> Self {
        Self { width, margin_right }
    }

    /// Horizontal distance between the left edges of two neighbouring cards
    pub fn stride(&self) -> f64 {
        self.width + self.margin_right * 2.0
    }
}

/// Horizontal translation that centers the card at `index` in the container
pub fn centered_offset(container_width: f64, metrics: CardMetrics, index: usize) -> f64 {
    let stride = metrics.stride();
    let offset_to_center = container_width / 2.0 - stride / 2.0;
    offset_to_center - index as f64 * stride
}

/// Parse a computed CSS length such as `"16px"`; anything unparseable is 0
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .map(f64::trunc)
        .unwrap_or(0.0)
}

/// How the slider moves to its new offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Jump with no animation
    Instant,
    /// Animate over `duration_ms` with ease-in-out
    Eased { duration_ms: u32 },
}

impl Transition {
    pub fn duration_css(&self) -> String {
        match self {
            Transition::Instant => "0ms".to_string(),
            Transition::Eased { duration_ms } => format!("{}ms", duration_ms),
        }
    }

    pub fn timing_function_css(&self) -> &'static str {
        match self {
            Transition::Instant => "",
            Transition::Eased { .. } => "ease-in-out",
        }
    }
}

/// Everything the DOM layer needs to draw one carousel update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub translate_x: f64,
    pub transition: Transition,
    /// One entry per rendered card, clones included
    pub card_styles: Vec<CardStyle>,
}

impl CarouselFrame {
    pub fn transform_css(&self) -> String {
        format!("translateX({}px)", self.translate_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_real_card_is_centered() {
        // 300px cards with 16px margins in a 1000px stage
        let metrics = CardMetrics::new(300.0, 16.0);
        assert_eq!(metrics.stride(), 332.0);
        let x = centered_offset(1000.0, metrics, 3);
        assert_eq!(x, 500.0 - 166.0 - 3.0 * 332.0);
        // The card's center lands on the container's center
        let card_center = x + 3.0 * 332.0 + 166.0;
        assert_eq!(card_center, 500.0);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("16px"), 16.0);
        assert_eq!(parse_px(" 12.7px "), 12.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(Transition::Instant.duration_css(), "0ms");
        assert_eq!(Transition::Instant.timing_function_css(), "");
        let eased = Transition::Eased { duration_ms: 600 };
        assert_eq!(eased.duration_css(), "600ms");
        assert_eq!(eased.timing_function_css(), "ease-in-out");
    }
}
