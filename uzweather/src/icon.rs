//! Condition icons for the report card

use ratatui::style::Color;

use crate::report::Condition;

/// Icon handle consumed by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    CloudRain,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sun => "\u{2600}\u{fe0f}",
            Icon::Cloud => "\u{2601}\u{fe0f}",
            Icon::CloudRain => "\u{1f327}\u{fe0f}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Icon::Sun => Color::Rgb(250, 204, 21),
            Icon::Cloud => Color::Rgb(156, 163, 175),
            Icon::CloudRain => Color::Rgb(96, 165, 250),
        }
    }
}

pub fn icon_for(condition: Condition) -> Icon {
    match condition {
        Condition::Sunny => Icon::Sun,
        Condition::Cloudy => Icon::Cloud,
        Condition::Rainy => Icon::CloudRain,
    }
}

/// Map a free-form condition label to an icon.
///
/// Labels that name no known condition get the cloudy icon.
pub fn icon_for_label(label: &str) -> Icon {
    icon_for(Condition::from_label(label).unwrap_or(Condition::Cloudy))
}
