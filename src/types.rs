use serde::Serialize;

/// Number of points on a backgammon board.
pub const POINT_COUNT: usize = 24;
/// Checkers each side owns in total.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// One of the two players.
///
/// `Player` is the side written in uppercase in an XGID and drawn with
/// the `player1` style; `Opponent` is lowercase and `player2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Checkers resting on a single point. A stack always holds at least one checker;
/// an empty point is `None` in [`GameState::points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stack {
    pub side: Side,
    pub count: u8,
}

/// Who may offer the next double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeOwner {
    #[default]
    Centered,
    Player,
    Opponent,
}

/// A pair of per-side counters (bar checkers, borne-off checkers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SideCounts {
    pub player: u8,
    pub opponent: u8,
}

impl SideCounts {
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.player) + u32::from(self.opponent)
    }
}

/// Match score, informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchScore {
    pub player: u32,
    pub opponent: u32,
}

/// Fully decoded position.
///
/// Contract:
/// - `points[i]` is point `i + 1` from the player's side (index 0 = player's 1-point).
/// - `cube_value == 1` implies `cube_owner == CubeOwner::Centered`.
/// - For well-formed input, all checkers on points, bar and off add up to 30.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub points: [Option<Stack>; POINT_COUNT],
    pub bar: SideCounts,
    pub off: SideCounts,
    pub cube_value: u32,
    pub cube_owner: CubeOwner,
    pub turn: Side,
    /// Literal dice field, e.g. `"21"`, `"00"` or a cube-action marker.
    pub dice: String,
    pub score: MatchScore,
    /// 0 for money games.
    pub match_length: u32,
    pub game_options: u8,
    /// Trailing XGID field, kept as-is.
    pub trailing: String,
}

impl GameState {
    /// Number of checkers on point index `index` (0..=23).
    pub fn checker_count(&self, index: usize) -> u8 {
        self.points
            .get(index)
            .copied()
            .flatten()
            .map_or(0, |stack| stack.count)
    }

    /// Owner of point index `index`, `None` when the point is empty.
    pub fn owner(&self, index: usize) -> Option<Side> {
        self.points.get(index).copied().flatten().map(|stack| stack.side)
    }

    /// Checkers of `side` on the 24 points.
    pub fn checkers_on_points(&self, side: Side) -> u32 {
        self.points
            .iter()
            .flatten()
            .filter(|stack| stack.side == side)
            .map(|stack| u32::from(stack.count))
            .sum()
    }

    /// Every checker accounted for: points, bar and off for both sides.
    pub fn checker_total(&self) -> u32 {
        let on_points: u32 = self.points.iter().flatten().map(|s| u32::from(s.count)).sum();
        on_points + self.bar.total() + self.off.total()
    }
}

/// A point in canvas space (CSS pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
