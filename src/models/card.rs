//! Carousel card handles and their visual states

use serde::{Deserialize, Serialize};

/// A slot in the rendered slider: either a real card or a clone of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardItem {
    /// Position of the backing card among the real cards, in `[0, N)`
    pub real_index: usize,
    /// True for duplicates placed at either end to mask the wrap-around
    pub is_clone: bool,
}

impl CardItem {
    pub fn real(real_index: usize) -> Self {
        Self { real_index, is_clone: false }
    }

    pub fn clone_of(real_index: usize) -> Self {
        Self { real_index, is_clone: true }
    }
}

/// How a card is drawn relative to the centered one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStyle {
    /// The centered card: full color, enlarged, name label shown
    Active,
    /// Every other card: dimmed, desaturated, shrunk, label hidden
    Inactive,
}

/// Utility classes that show the name label
const LABEL_SHOWN: [&str; 2] = ["opacity-100", "translate-x-0"];
/// Utility classes that hide the name label
const LABEL_HIDDEN: [&str; 2] = ["opacity-0", "-translate-x-8"];

impl CardStyle {
    pub fn transform(&self) -> &'static str {
        match self {
            CardStyle::Active => "scale(1.15)",
            CardStyle::Inactive => "scale(0.9)",
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            CardStyle::Active => "1",
            CardStyle::Inactive => "0.5",
        }
    }

    pub fn is_grayscale(&self) -> bool {
        matches!(self, CardStyle::Inactive)
    }

    /// Label classes to add for this style
    pub fn label_classes_on(&self) -> [&'static str; 2] {
        match self {
            CardStyle::Active => LABEL_SHOWN,
            CardStyle::Inactive => LABEL_HIDDEN,
        }
    }

    /// Label classes to remove for this style
    pub fn label_classes_off(&self) -> [&'static str; 2] {
        match self {
            CardStyle::Active => LABEL_HIDDEN,
            CardStyle::Inactive => LABEL_SHOWN,
        }
    }
}
