//! Drawing primitives and the renderer boundary.
//!
//! The composer produces a flat list of [`DrawPrimitive`]s; a [`Renderer`]
//! turns each one into calls on a real drawing surface. Later primitives paint
//! over earlier ones, so the list must be replayed in order.

use serde::Serialize;

use crate::config::Color;
use crate::types::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawPrimitive {
    #[serde(rename_all = "camelCase")]
    FilledPolygon { points: Vec<Point>, color: Color },
    #[serde(rename_all = "camelCase")]
    StrokedPolygon {
        points: Vec<Point>,
        color: Color,
        line_width: f64,
    },
    #[serde(rename_all = "camelCase")]
    FilledCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    #[serde(rename_all = "camelCase")]
    StrokedCircle {
        center: Point,
        radius: f64,
        color: Color,
        line_width: f64,
    },
    #[serde(rename_all = "camelCase")]
    FilledRect { rect: Rect, color: Color },
    #[serde(rename_all = "camelCase")]
    StrokedRect {
        rect: Rect,
        color: Color,
        line_width: f64,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        position: Point,
        color: Color,
        font_px: f64,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// A drawing surface. Implementations own fonts, anti-aliasing and every
/// other presentation detail; they only receive resolved geometry and colors.
pub trait Renderer {
    type Error;

    fn fill_rect(&mut self, rect: &Rect, color: &Color) -> Result<(), Self::Error>;

    fn stroke_rect(&mut self, rect: &Rect, color: &Color, line_width: f64)
    -> Result<(), Self::Error>;

    fn fill_polygon(&mut self, points: &[Point], color: &Color) -> Result<(), Self::Error>;

    fn stroke_polygon(
        &mut self,
        points: &[Point],
        color: &Color,
        line_width: f64,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color)
    -> Result<(), Self::Error>;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: &Color,
        line_width: f64,
    ) -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        position: Point,
        color: &Color,
        font_px: f64,
        align: TextAlign,
        baseline: TextBaseline,
    ) -> Result<(), Self::Error>;
}

/// Feeds `primitives` to `renderer` in order, stopping at the first error.
///
/// # Errors
///
/// Propagates the renderer's error.
pub fn replay<R: Renderer>(primitives: &[DrawPrimitive], renderer: &mut R) -> Result<(), R::Error> {
    for primitive in primitives {
        match primitive {
            DrawPrimitive::FilledPolygon { points, color } => renderer.fill_polygon(points, color)?,
            DrawPrimitive::StrokedPolygon {
                points,
                color,
                line_width,
            } => renderer.stroke_polygon(points, color, *line_width)?,
            DrawPrimitive::FilledCircle {
                center,
                radius,
                color,
            } => renderer.fill_circle(*center, *radius, color)?,
            DrawPrimitive::StrokedCircle {
                center,
                radius,
                color,
                line_width,
            } => renderer.stroke_circle(*center, *radius, color, *line_width)?,
            DrawPrimitive::FilledRect { rect, color } => renderer.fill_rect(rect, color)?,
            DrawPrimitive::StrokedRect {
                rect,
                color,
                line_width,
            } => renderer.stroke_rect(rect, color, *line_width)?,
            DrawPrimitive::Text {
                text,
                position,
                color,
                font_px,
                align,
                baseline,
            } => renderer.fill_text(text, *position, color, *font_px, *align, *baseline)?,
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records one line per call, failing on the `fail_at`-th call if set.
    #[derive(Default)]
    pub(crate) struct RecordingRenderer {
        pub calls: Vec<String>,
        pub fail_at: Option<usize>,
    }

    impl RecordingRenderer {
        fn record(&mut self, call: String) -> Result<(), String> {
            if self.fail_at == Some(self.calls.len()) {
                return Err(format!("failed at {call}"));
            }
            self.calls.push(call);
            Ok(())
        }
    }

    impl Renderer for RecordingRenderer {
        type Error = String;

        fn fill_rect(&mut self, rect: &Rect, color: &Color) -> Result<(), String> {
            self.record(format!("fill_rect {} {} {}", rect.x, rect.y, color.as_str()))
        }

        fn stroke_rect(&mut self, rect: &Rect, color: &Color, line_width: f64) -> Result<(), String> {
            self.record(format!("stroke_rect {} {} {} {line_width}", rect.x, rect.y, color.as_str()))
        }

        fn fill_polygon(&mut self, points: &[Point], color: &Color) -> Result<(), String> {
            self.record(format!("fill_polygon {} {}", points.len(), color.as_str()))
        }

        fn stroke_polygon(&mut self, points: &[Point], color: &Color, line_width: f64) -> Result<(), String> {
            self.record(format!("stroke_polygon {} {} {line_width}", points.len(), color.as_str()))
        }

        fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) -> Result<(), String> {
            self.record(format!("fill_circle {} {} {radius} {}", center.x, center.y, color.as_str()))
        }

        fn stroke_circle(&mut self, center: Point, radius: f64, color: &Color, line_width: f64) -> Result<(), String> {
            self.record(format!("stroke_circle {} {} {radius} {} {line_width}", center.x, center.y, color.as_str()))
        }

        fn fill_text(
            &mut self,
            text: &str,
            _position: Point,
            color: &Color,
            font_px: f64,
            align: TextAlign,
            baseline: TextBaseline,
        ) -> Result<(), String> {
            self.record(format!("fill_text {text} {} {font_px} {align:?} {baseline:?}", color.as_str()))
        }
    }

    fn sample() -> Vec<DrawPrimitive> {
        vec![
            DrawPrimitive::FilledRect {
                rect: Rect::new(1.0, 2.0, 3.0, 4.0),
                color: Color::css("green"),
            },
            DrawPrimitive::FilledCircle {
                center: Point::new(5.0, 6.0),
                radius: 7.0,
                color: Color::css("black"),
            },
            DrawPrimitive::Text {
                text: "9".to_string(),
                position: Point::new(5.0, 6.0),
                color: Color::css("white"),
                font_px: 18.0,
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
            },
        ]
    }

    #[test]
    fn replay_preserves_primitive_order() {
        let mut renderer = RecordingRenderer::default();

        replay(&sample(), &mut renderer).expect("must replay");

        assert_eq!(
            renderer.calls,
            vec![
                "fill_rect 1 2 green".to_string(),
                "fill_circle 5 6 7 black".to_string(),
                "fill_text 9 white 18 Center Middle".to_string(),
            ]
        );
    }

    #[test]
    fn replay_stops_at_first_error() {
        let mut renderer = RecordingRenderer {
            fail_at: Some(1),
            ..RecordingRenderer::default()
        };

        let err = replay(&sample(), &mut renderer).unwrap_err();

        assert!(err.contains("fill_circle"));
        assert_eq!(renderer.calls.len(), 1);
    }

    #[test]
    fn primitives_serialize_with_kind_tag() {
        let value = serde_json::to_value(&sample()[2]).expect("must serialize");

        assert_eq!(value["kind"], "text");
        assert_eq!(value["fontPx"], 18.0);
        assert_eq!(value["align"], "center");
        assert_eq!(value["color"], "white");
    }
}
