//! Board geometry: canvas/frame/board rectangles and per-point coordinates.
//!
//! Points 0-11 sit on the near (bottom) edge and are numbered right to left;
//! points 12-23 sit on the far (top) edge, left to right. The bar splits each
//! edge in two, so points 0-5 and 18-23 are shifted right by one bar width.

use crate::config::DiagramConfig;
use crate::error::DiagramError;
use crate::types::{POINT_COUNT, Point, Rect, Side};

/// Checker radius is `board.width / CHECKER_RADIUS_DIVISOR`.
pub const CHECKER_RADIUS_DIVISOR: f64 = 25.0;
/// Wedge height as a fraction of board height.
pub const POINT_HEIGHT_RATIO: f64 = 0.45;
/// Horizontal gap between neighbouring wedges.
pub const POINT_GAP: f64 = 1.0;
/// Distance between the far edge and its point labels.
pub const LABEL_GAP: f64 = 6.0;
/// Label font size; near-edge labels hang one font height below the board.
pub const LABEL_FONT_PX: f64 = 18.0;

const POINTS_PER_EDGE: usize = 12;

/// Screen coordinates for one point. Derived, never stored in the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    pub index: usize,
    pub anchor_x: f64,
    /// `+1.0` scanning left to right (far edge), `-1.0` right to left (near edge).
    pub horizontal_direction: f64,
    /// `+1.0` growing downward (far edge), `-1.0` growing upward (near edge).
    pub vertical_direction: f64,
    pub baseline_y: f64,
    pub label_y: f64,
    pub wedge_start_x: f64,
    pub midpoint_x: f64,
    pub wedge_width: f64,
    pub tip_y: f64,
}

impl PointGeometry {
    /// Triangle corners: base start, tip, base end.
    pub fn wedge(&self) -> [Point; 3] {
        let h = self.horizontal_direction;
        [
            Point::new(self.wedge_start_x + h * POINT_GAP / 2.0, self.baseline_y),
            Point::new(self.midpoint_x, self.tip_y),
            Point::new(
                self.wedge_start_x + h * (self.wedge_width - POINT_GAP / 2.0),
                self.baseline_y,
            ),
        ]
    }

    /// Where the point number is written.
    pub fn label_position(&self) -> Point {
        Point::new(self.midpoint_x, self.label_y)
    }
}

/// Geometry of point `index` (0..=23) on `board`, with `bar_width` between the halves.
///
/// Pure function of its inputs.
pub fn point_geometry(index: usize, board: &Rect, bar_width: f64) -> PointGeometry {
    debug_assert!(index < POINT_COUNT, "point index out of range: {index}");

    let (mut anchor_x, horizontal_direction, vertical_direction, baseline_y, label_y) =
        if index >= POINTS_PER_EDGE {
            (board.x, 1.0, 1.0, board.y, board.y - LABEL_GAP)
        } else {
            (
                board.right(),
                -1.0,
                -1.0,
                board.bottom(),
                board.bottom() + LABEL_FONT_PX,
            )
        };

    // Right of the bar on both edges.
    if index < 6 || index > 17 {
        anchor_x += bar_width;
    }

    let wedge_width = board.width / POINTS_PER_EDGE as f64;
    let wedge_start_x =
        anchor_x + horizontal_direction * (index % POINTS_PER_EDGE) as f64 * wedge_width;
    let midpoint_x = wedge_start_x + horizontal_direction * board.width / 24.0;
    let tip_y = baseline_y + vertical_direction * board.height * POINT_HEIGHT_RATIO;

    PointGeometry {
        index,
        anchor_x,
        horizontal_direction,
        vertical_direction,
        baseline_y,
        label_y,
        wedge_start_x,
        midpoint_x,
        wedge_width,
        tip_y,
    }
}

/// Validated rectangles and sizes derived from a [`DiagramConfig`].
///
/// `board` covers the playing area of both halves *excluding* the bar strip;
/// the bar sits at `board.x + board.width / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSizing {
    pub canvas: Rect,
    pub frame: Rect,
    pub board: Rect,
    pub bar_width: f64,
    pub frame_thickness: f64,
    pub checker_radius: f64,
    pub max_visible: u8,
}

impl BoardSizing {
    /// # Errors
    ///
    /// Returns [`DiagramError::Configuration`] when any dimension is not finite,
    /// is negative, or leaves no positive board area.
    pub fn new(config: &DiagramConfig) -> Result<Self, DiagramError> {
        let dimensions = [
            ("canvasWidth", config.canvas_width),
            ("canvasHeight", config.canvas_height),
            ("canvasMargin", config.canvas_margin),
            ("frameThickness", config.frame_thickness),
            ("barThickness", config.bar_thickness),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::Configuration(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if config.canvas_width == 0.0 || config.canvas_height == 0.0 {
            return Err(DiagramError::Configuration(format!(
                "canvas must have a positive size, got {}x{}",
                config.canvas_width, config.canvas_height
            )));
        }
        if config.max_checkers_per_point == 0 {
            return Err(DiagramError::Configuration(
                "maxCheckersPerPoint must be at least 1".to_string(),
            ));
        }

        let canvas = Rect::new(0.0, 0.0, config.canvas_width, config.canvas_height);
        let margin = config.canvas_margin;
        let frame = Rect::new(
            margin,
            margin,
            canvas.width - 2.0 * margin,
            canvas.height - 2.0 * margin,
        );
        let board = Rect::new(
            frame.x + config.frame_thickness,
            frame.y + config.frame_thickness,
            frame.width - 2.0 * config.frame_thickness - config.bar_thickness,
            frame.height - 2.0 * config.frame_thickness,
        );
        if board.width <= 0.0 || board.height <= 0.0 {
            return Err(DiagramError::Configuration(format!(
                "margins, frame and bar leave no board area ({}x{})",
                board.width, board.height
            )));
        }

        Ok(Self {
            canvas,
            frame,
            board,
            bar_width: config.bar_thickness,
            frame_thickness: config.frame_thickness,
            checker_radius: board.width / CHECKER_RADIUS_DIVISOR,
            max_visible: config.max_checkers_per_point,
        })
    }

    /// The central bar strip.
    pub fn bar(&self) -> Rect {
        Rect::new(
            self.board.x + self.board.width / 2.0,
            self.board.y,
            self.bar_width,
            self.board.height,
        )
    }

    /// Board background including the bar.
    pub fn playing_area(&self) -> Rect {
        Rect::new(
            self.board.x,
            self.board.y,
            self.board.width + self.bar_width,
            self.board.height,
        )
    }

    /// Left and right halves of the board, either side of the bar.
    pub fn halves(&self) -> [Rect; 2] {
        let half = self.board.width / 2.0;
        [
            Rect::new(self.board.x, self.board.y, half, self.board.height),
            Rect::new(
                self.board.x + half + self.bar_width,
                self.board.y,
                half,
                self.board.height,
            ),
        ]
    }

    /// Side tray in the right-hand frame: opponent on top, player below.
    pub fn off_tray(&self, side: Side) -> Rect {
        let half = self.board.height / 2.0;
        let y = match side {
            Side::Opponent => self.board.y,
            Side::Player => self.board.y + half,
        };
        Rect::new(
            self.board.right() + self.bar_width,
            y,
            self.frame_thickness,
            half,
        )
    }
}

/// All 24 point geometries for one sizing, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    sizing: BoardSizing,
    points: [PointGeometry; POINT_COUNT],
}

impl BoardLayout {
    pub fn new(sizing: BoardSizing) -> Self {
        let points =
            std::array::from_fn(|index| point_geometry(index, &sizing.board, sizing.bar_width));
        Self { sizing, points }
    }

    pub fn sizing(&self) -> &BoardSizing {
        &self.sizing
    }

    pub fn point(&self, index: usize) -> &PointGeometry {
        &self.points[index]
    }

    pub fn points(&self) -> &[PointGeometry; POINT_COUNT] {
        &self.points
    }
}
