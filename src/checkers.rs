//! Checker stacking on points, on the bar, and in the off-board trays.

use crate::layout::PointGeometry;
use crate::types::{Point, Rect, Side};

/// Space between the baseline and the first checker.
pub const POINT_PADDING: f64 = 2.0;
/// Space between consecutive checkers on one point.
pub const CHECKER_SPACING: f64 = 2.0;

/// Borne-off checkers are drawn edge-on as thin bars.
pub const OFF_CHECKER_HEIGHT: f64 = 6.0;
/// Advance per borne-off checker.
pub const OFF_CHECKER_STEP: f64 = 8.0;
/// Extra space after every [`OFF_GROUP_SIZE`] borne-off checkers.
pub const OFF_GROUP_GAP: f64 = 4.0;
pub const OFF_GROUP_SIZE: usize = 5;
/// Inset from the tray edges.
pub const OFF_TRAY_INSET: f64 = 3.0;

/// Checker centers for one stack, plus the count to print when not all fit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckerStack {
    pub positions: Vec<Point>,
    /// `Some(count)` when `count > max_visible`; drawn instead of further checkers.
    pub overflow_label: Option<u8>,
}

impl CheckerStack {
    /// Where the overflow count is written: on the last visible checker.
    pub fn label_position(&self) -> Option<Point> {
        self.overflow_label.and(self.positions.last().copied())
    }
}

/// Stacks `count` checkers on a point, outward from its baseline.
pub fn place_checkers(
    geometry: &PointGeometry,
    count: u8,
    radius: f64,
    max_visible: u8,
) -> CheckerStack {
    stack_along(
        geometry.midpoint_x,
        geometry.baseline_y,
        geometry.vertical_direction,
        count,
        radius,
        max_visible,
    )
}

/// Stacks bar checkers outward from the board's vertical midline: the
/// player's half is below it, the opponent's above.
pub fn place_bar_checkers(
    bar: &Rect,
    side: Side,
    count: u8,
    radius: f64,
    max_visible: u8,
) -> CheckerStack {
    let center = bar.center();
    let direction = match side {
        Side::Player => 1.0,
        Side::Opponent => -1.0,
    };
    stack_along(center.x, center.y, direction, count, radius, max_visible)
}

/// One thin rectangle per borne-off checker. The player's tray fills from the
/// bottom up, the opponent's from the top down.
pub fn place_off_checkers(tray: &Rect, side: Side, count: u8) -> Vec<Rect> {
    let width = tray.width - 2.0 * OFF_TRAY_INSET;
    (0..usize::from(count))
        .map(|i| {
            let offset = OFF_TRAY_INSET
                + i as f64 * OFF_CHECKER_STEP
                + (i / OFF_GROUP_SIZE) as f64 * OFF_GROUP_GAP;
            let y = match side {
                Side::Opponent => tray.y + offset,
                Side::Player => tray.bottom() - offset - OFF_CHECKER_HEIGHT,
            };
            Rect::new(tray.x + OFF_TRAY_INSET, y, width, OFF_CHECKER_HEIGHT)
        })
        .collect()
}

fn stack_along(
    x: f64,
    baseline_y: f64,
    direction: f64,
    count: u8,
    radius: f64,
    max_visible: u8,
) -> CheckerStack {
    let visible = count.min(max_visible);
    let positions = (0..visible)
        .map(|i| {
            let i = f64::from(i);
            let offset = POINT_PADDING + CHECKER_SPACING * i + 2.0 * radius * i + radius;
            Point::new(x, baseline_y + direction * offset)
        })
        .collect();

    CheckerStack {
        positions,
        overflow_label: (count > max_visible).then_some(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::point_geometry;

    const RADIUS: f64 = 10.0;

    fn board() -> Rect {
        Rect::new(65.0, 65.0, 470.0, 430.0)
    }

    #[test]
    fn three_checkers_fit_without_label() {
        let g = point_geometry(12, &board(), 40.0);
        let stack = place_checkers(&g, 3, RADIUS, 5);

        assert_eq!(stack.positions.len(), 3);
        assert_eq!(stack.overflow_label, None);
        assert_eq!(stack.label_position(), None);
        // Far edge grows downward: 2 + r, then one diameter plus spacing each.
        assert_eq!(stack.positions[0], Point::new(g.midpoint_x, 65.0 + 12.0));
        assert_eq!(stack.positions[1].y, 65.0 + 34.0);
        assert_eq!(stack.positions[2].y, 65.0 + 56.0);
    }

    #[test]
    fn nine_checkers_show_five_and_a_label() {
        let g = point_geometry(5, &board(), 40.0);
        let stack = place_checkers(&g, 9, RADIUS, 5);

        assert_eq!(stack.positions.len(), 5);
        assert_eq!(stack.overflow_label, Some(9));
        assert_eq!(stack.label_position(), stack.positions.last().copied());
        // Near edge grows upward from the bottom baseline.
        assert_eq!(stack.positions[0].y, 495.0 - 12.0);
        assert!(stack.positions.windows(2).all(|w| w[1].y < w[0].y));
    }

    #[test]
    fn exactly_max_visible_has_no_label() {
        let g = point_geometry(0, &board(), 40.0);
        let stack = place_checkers(&g, 5, RADIUS, 5);

        assert_eq!(stack.positions.len(), 5);
        assert_eq!(stack.overflow_label, None);
    }

    #[test]
    fn empty_point_yields_nothing() {
        let g = point_geometry(7, &board(), 40.0);
        let stack = place_checkers(&g, 0, RADIUS, 5);

        assert!(stack.positions.is_empty());
        assert_eq!(stack.overflow_label, None);
    }

    #[test]
    fn bar_checkers_stack_away_from_the_midline() {
        let bar = Rect::new(300.0, 65.0, 40.0, 430.0);
        let player = place_bar_checkers(&bar, Side::Player, 2, RADIUS, 5);
        let opponent = place_bar_checkers(&bar, Side::Opponent, 1, RADIUS, 5);

        assert_eq!(player.positions, vec![Point::new(320.0, 292.0), Point::new(320.0, 314.0)]);
        assert_eq!(opponent.positions, vec![Point::new(320.0, 268.0)]);
    }

    #[test]
    fn crowded_bar_shows_max_visible_and_a_label() {
        let bar = Rect::new(300.0, 65.0, 40.0, 430.0);
        let stack = place_bar_checkers(&bar, Side::Opponent, 7, RADIUS, 5);

        assert_eq!(stack.positions.len(), 5);
        assert_eq!(stack.overflow_label, Some(7));
        assert_eq!(stack.label_position(), stack.positions.last().copied());
        assert!(stack.positions.windows(2).all(|w| w[1].y < w[0].y));
    }

    #[test]
    fn off_checkers_leave_a_gap_after_every_five() {
        let tray = Rect::new(575.0, 65.0, 25.0, 215.0);
        let off = place_off_checkers(&tray, Side::Opponent, 7);

        assert_eq!(off.len(), 7);
        assert_eq!(off[0], Rect::new(578.0, 68.0, 19.0, OFF_CHECKER_HEIGHT));
        assert_eq!(off[4].y - off[3].y, OFF_CHECKER_STEP);
        assert_eq!(off[5].y - off[4].y, OFF_CHECKER_STEP + OFF_GROUP_GAP);
        assert_eq!(off[6].y - off[5].y, OFF_CHECKER_STEP);
    }

    #[test]
    fn player_off_checkers_fill_from_the_bottom() {
        let tray = Rect::new(575.0, 280.0, 25.0, 215.0);
        let off = place_off_checkers(&tray, Side::Player, 15);

        assert_eq!(off[0].bottom(), tray.bottom() - OFF_TRAY_INSET);
        assert!(off.iter().all(|r| r.y >= tray.y));
        assert!(place_off_checkers(&tray, Side::Player, 0).is_empty());
    }
}
