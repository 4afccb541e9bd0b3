//! Colour palette for the canvas and the built-in element kinds.
//!
//! The host owns theming; it passes a `Theme` in through the diagram config
//! and may replace it at any time with `Diagram::set_theme`.

use super::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub grid: Color,
    pub element_fill: Color,
    pub element_stroke: Color,
    /// Border of selected elements
    pub selection: Color,
    pub drag_rect_fill: Color,
    pub drag_rect_stroke: Color,
    pub status_background: Color,
    pub status_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::rgb(0x3b, 0x82, 0xf6);
        Self {
            background: Color::rgb(0xfa, 0xfa, 0xfa),
            grid: Color::rgb(0xe0, 0xe0, 0xe0),
            element_fill: Color::WHITE,
            element_stroke: Color::rgb(0xd0, 0xd0, 0xd0),
            selection: accent,
            drag_rect_fill: accent.with_alpha(0.1),
            drag_rect_stroke: accent.with_alpha(0.8),
            status_background: Color::BLACK.with_alpha(0.7),
            status_text: Color::WHITE,
        }
    }
}
