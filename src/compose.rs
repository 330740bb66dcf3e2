//! Board composer: game state + layout -> ordered primitive list.
//!
//! Layers, bottom first:
//! 1. canvas border, frame, board background
//! 2. 24 point wedges with their numbers
//! 3. bar and board-half outlines
//! 4. checkers on points
//! 5. checkers on the bar
//! 6. doubling cube
//! 7. off-board trays

use crate::checkers::{CheckerStack, place_bar_checkers, place_checkers, place_off_checkers};
use crate::config::{Color, DiagramConfig};
use crate::layout::{BoardLayout, BoardSizing, LABEL_FONT_PX};
use crate::render::{DrawPrimitive, TextAlign, TextBaseline};
use crate::types::{CubeOwner, GameState, Point, Rect, Side};

/// Width of the border drawn around the whole canvas.
pub const CANVAS_BORDER_WIDTH: f64 = 5.0;
pub const LINE_WIDTH: f64 = 1.0;
/// Cube side length relative to the checker radius.
pub const CUBE_SIZE_RATIO: f64 = 1.6;
/// An undoubled cube is shown at its maximum face, 64.
pub const CENTERED_CUBE_FACE: u32 = 64;

/// Builds the full primitive list for `state`.
pub fn compose(state: &GameState, sizing: &BoardSizing, config: &DiagramConfig) -> Vec<DrawPrimitive> {
    compose_with_layout(state, &BoardLayout::new(*sizing), config)
}

/// Same as [`compose`] with point geometry already computed.
pub fn compose_with_layout(
    state: &GameState,
    layout: &BoardLayout,
    config: &DiagramConfig,
) -> Vec<DrawPrimitive> {
    let sizing = layout.sizing();
    let mut out = Vec::new();

    draw_background(&mut out, sizing, config);
    draw_points(&mut out, layout, config);
    draw_bar(&mut out, sizing, config);
    draw_point_checkers(&mut out, state, layout, config);
    draw_bar_checkers(&mut out, state, sizing, config);
    draw_cube(&mut out, state, sizing, config);
    draw_off_trays(&mut out, state, sizing, config);

    log::debug!("composed {} primitives", out.len());
    out
}

/// Face value printed on the cube.
pub fn cube_face(cube_value: u32) -> u32 {
    if cube_value == 1 {
        CENTERED_CUBE_FACE
    } else {
        cube_value
    }
}

/// Cube rectangle: in the left margin, at the owner's end of the canvas.
pub fn cube_rect(owner: CubeOwner, sizing: &BoardSizing) -> Rect {
    let size = sizing.checker_radius * CUBE_SIZE_RATIO;
    let margin = sizing.frame.x;
    let center_y = match owner {
        CubeOwner::Centered => sizing.canvas.height / 2.0,
        CubeOwner::Opponent => margin / 2.0,
        CubeOwner::Player => sizing.canvas.height - margin / 2.0,
    };
    Rect::new(margin / 2.0 - size / 2.0, center_y - size / 2.0, size, size)
}

fn draw_background(out: &mut Vec<DrawPrimitive>, sizing: &BoardSizing, config: &DiagramConfig) {
    out.push(DrawPrimitive::StrokedRect {
        rect: sizing.canvas,
        color: config.outline_color.clone(),
        line_width: CANVAS_BORDER_WIDTH,
    });
    out.push(DrawPrimitive::FilledRect {
        rect: sizing.frame,
        color: config.frame_color.clone(),
    });
    out.push(DrawPrimitive::StrokedRect {
        rect: sizing.frame,
        color: config.outline_color.clone(),
        line_width: LINE_WIDTH,
    });
    out.push(DrawPrimitive::FilledRect {
        rect: sizing.playing_area(),
        color: config.board_background.clone(),
    });
}

fn draw_points(out: &mut Vec<DrawPrimitive>, layout: &BoardLayout, config: &DiagramConfig) {
    for geometry in layout.points() {
        // Index 0 is point 1, so even indices take the "odd points" color.
        let fill = if geometry.index % 2 == 0 {
            &config.odd_points
        } else {
            &config.even_points
        };
        let wedge = geometry.wedge().to_vec();

        out.push(DrawPrimitive::FilledPolygon {
            points: wedge.clone(),
            color: fill.clone(),
        });
        out.push(DrawPrimitive::StrokedPolygon {
            points: wedge,
            color: config.outline_color.clone(),
            line_width: LINE_WIDTH,
        });
        out.push(DrawPrimitive::Text {
            text: (geometry.index + 1).to_string(),
            position: geometry.label_position(),
            color: config.outline_color.clone(),
            font_px: LABEL_FONT_PX,
            align: TextAlign::Center,
            baseline: TextBaseline::Alphabetic,
        });
    }
}

fn draw_bar(out: &mut Vec<DrawPrimitive>, sizing: &BoardSizing, config: &DiagramConfig) {
    out.push(DrawPrimitive::FilledRect {
        rect: sizing.bar(),
        color: config.frame_color.clone(),
    });
    // Re-outline both halves to tidy the wedge strokes along the edges.
    for half in sizing.halves() {
        out.push(DrawPrimitive::StrokedRect {
            rect: half,
            color: config.outline_color.clone(),
            line_width: LINE_WIDTH,
        });
    }
}

fn draw_point_checkers(
    out: &mut Vec<DrawPrimitive>,
    state: &GameState,
    layout: &BoardLayout,
    config: &DiagramConfig,
) {
    let sizing = layout.sizing();
    for (geometry, stack) in layout.points().iter().zip(state.points.iter()) {
        let Some(stack) = stack else {
            continue;
        };
        let placed = place_checkers(geometry, stack.count, sizing.checker_radius, sizing.max_visible);
        push_stack(out, &placed, stack.side, sizing.checker_radius, config);
    }
}

fn draw_bar_checkers(
    out: &mut Vec<DrawPrimitive>,
    state: &GameState,
    sizing: &BoardSizing,
    config: &DiagramConfig,
) {
    let bar = sizing.bar();
    for side in [Side::Player, Side::Opponent] {
        let count = state.bar.get(side);
        if count == 0 {
            continue;
        }
        let placed = place_bar_checkers(&bar, side, count, sizing.checker_radius, sizing.max_visible);
        push_stack(out, &placed, side, sizing.checker_radius, config);
    }
}

fn push_stack(
    out: &mut Vec<DrawPrimitive>,
    placed: &CheckerStack,
    side: Side,
    radius: f64,
    config: &DiagramConfig,
) {
    let style = config.style(side);
    for &center in &placed.positions {
        out.push(DrawPrimitive::FilledCircle {
            center,
            radius,
            color: style.checker_color.clone(),
        });
        out.push(DrawPrimitive::StrokedCircle {
            center,
            radius,
            color: config.outline_color.clone(),
            line_width: LINE_WIDTH,
        });
    }

    if let (Some(count), Some(position)) = (placed.overflow_label, placed.label_position()) {
        out.push(text_at(count.to_string(), position, &style.text_color, LABEL_FONT_PX));
    }
}

fn draw_cube(out: &mut Vec<DrawPrimitive>, state: &GameState, sizing: &BoardSizing, config: &DiagramConfig) {
    let rect = cube_rect(state.cube_owner, sizing);
    out.push(DrawPrimitive::FilledRect {
        rect,
        color: config.cube_color.clone(),
    });
    out.push(DrawPrimitive::StrokedRect {
        rect,
        color: config.outline_color.clone(),
        line_width: LINE_WIDTH,
    });
    out.push(text_at(
        cube_face(state.cube_value).to_string(),
        rect.center(),
        &config.cube_text_color,
        rect.height / 2.0,
    ));
}

fn draw_off_trays(
    out: &mut Vec<DrawPrimitive>,
    state: &GameState,
    sizing: &BoardSizing,
    config: &DiagramConfig,
) {
    for side in [Side::Opponent, Side::Player] {
        let tray = sizing.off_tray(side);
        out.push(DrawPrimitive::StrokedRect {
            rect: tray,
            color: config.outline_color.clone(),
            line_width: LINE_WIDTH,
        });
        for rect in place_off_checkers(&tray, side, state.off.get(side)) {
            out.push(DrawPrimitive::FilledRect {
                rect,
                color: config.style(side).checker_color.clone(),
            });
            out.push(DrawPrimitive::StrokedRect {
                rect,
                color: config.outline_color.clone(),
                line_width: LINE_WIDTH,
            });
        }
    }
}

fn text_at(text: String, position: Point, color: &Color, font_px: f64) -> DrawPrimitive {
    DrawPrimitive::Text {
        text,
        position,
        color: color.clone(),
        font_px,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
    }
}
