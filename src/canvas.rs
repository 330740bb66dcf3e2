//! [`Renderer`] over an HTML canvas 2D context.
//!
//! The only module that touches `web_sys`. Fallible canvas calls propagate
//! as `JsValue` errors.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::Color;
use crate::render::{Renderer, TextAlign, TextBaseline};
use crate::types::{Point, Rect};

const FONT_FAMILY: &str = "arial";

pub struct CanvasRenderer<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace_polygon(&self, points: &[Point]) {
        self.ctx.begin_path();
        let mut points = points.iter();
        if let Some(first) = points.next() {
            self.ctx.move_to(first.x, first.y);
        }
        for p in points {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
    }

    fn trace_circle(&self, center: Point, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)
    }

    fn apply_stroke(&self, color: &Color, line_width: f64) {
        self.ctx.set_stroke_style_str(color.as_str());
        self.ctx.set_line_width(line_width);
    }
}

impl Renderer for CanvasRenderer<'_> {
    type Error = JsValue;

    fn fill_rect(&mut self, rect: &Rect, color: &Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: &Rect, color: &Color, line_width: f64) -> Result<(), JsValue> {
        self.apply_stroke(color, line_width);
        self.ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: &Color) -> Result<(), JsValue> {
        self.trace_polygon(points);
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
        Ok(())
    }

    fn stroke_polygon(&mut self, points: &[Point], color: &Color, line_width: f64) -> Result<(), JsValue> {
        self.trace_polygon(points);
        self.apply_stroke(color, line_width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) -> Result<(), JsValue> {
        self.trace_circle(center, radius)?;
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: &Color,
        line_width: f64,
    ) -> Result<(), JsValue> {
        self.trace_circle(center, radius)?;
        self.apply_stroke(color, line_width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        position: Point,
        color: &Color,
        font_px: f64,
        align: TextAlign,
        baseline: TextBaseline,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.set_font(&format!("{font_px:.0}px {FONT_FAMILY}"));
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline(match baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
        });
        self.ctx.fill_text(text, position.x, position.y)
    }
}
