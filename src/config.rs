//! Diagram theme and dimensions.
//!
//! One immutable value passed explicitly to the composer. Deserializes from a
//! partial JS/JSON options object; missing fields fall back to the defaults
//! below.

use serde::{Deserialize, Serialize};

use crate::types::Side;

/// A CSS color string, handed to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn css(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn black() -> Self {
        Self::css("rgb(0, 0, 0)")
    }

    pub fn white() -> Self {
        Self::css("rgb(255, 255, 255)")
    }

    fn brown() -> Self {
        Self::css("rgb(153,102,51)")
    }

    fn red() -> Self {
        Self::css("rgb(255, 0, 0)")
    }

    fn green() -> Self {
        Self::css("rgb(0,127,0)")
    }
}

/// Checker and label colors for one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStyle {
    pub checker_color: Color,
    /// Used for overflow counts drawn on top of this side's checkers.
    pub text_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub canvas_margin: f64,
    pub frame_thickness: f64,
    pub bar_thickness: f64,
    pub frame_color: Color,
    pub board_background: Color,
    /// Fill for points 1, 3, 5, ... (even indices).
    pub odd_points: Color,
    /// Fill for points 2, 4, 6, ...
    pub even_points: Color,
    /// Uppercase side.
    pub player1: PlayerStyle,
    /// Lowercase side.
    pub player2: PlayerStyle,
    pub outline_color: Color,
    pub cube_color: Color,
    pub cube_text_color: Color,
    pub max_checkers_per_point: u8,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640.0,
            canvas_height: 560.0,
            canvas_margin: 40.0,
            frame_thickness: 25.0,
            bar_thickness: 40.0,
            frame_color: Color::brown(),
            board_background: Color::green(),
            odd_points: Color::red(),
            even_points: Color::white(),
            player1: PlayerStyle {
                checker_color: Color::black(),
                text_color: Color::white(),
            },
            player2: PlayerStyle {
                checker_color: Color::white(),
                text_color: Color::black(),
            },
            outline_color: Color::black(),
            cube_color: Color::white(),
            cube_text_color: Color::black(),
            max_checkers_per_point: 5,
        }
    }
}

impl DiagramConfig {
    pub fn style(&self, side: Side) -> &PlayerStyle {
        match side {
            Side::Player => &self.player1,
            Side::Opponent => &self.player2,
        }
    }
}
