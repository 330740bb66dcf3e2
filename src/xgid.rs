//! XGID position decoder.
//!
//! ```text
//! [XGID=]<layout>:<cubeExp>:<cubeOwner>:<turn>:<dice>:<score>:<oppScore>:<options>:<matchLength>:<trailing>
//! ```
//!
//! The 26-character layout holds one bar field at each end (indices 0 and 25)
//! and the 24 points in between. Uppercase letters are the player's checkers,
//! lowercase the opponent's, `A`/`a` = 1 through `O`/`o` = 15.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DiagramError, InvariantViolation};
use crate::types::{
    CHECKERS_PER_SIDE, CubeOwner, GameState, MatchScore, POINT_COUNT, Side, SideCounts, Stack,
};

/// The standard opening position, player to roll 2-1.
pub const STARTING_POSITION: &str = "XGID=-b----E-C---eE---c-e----B-:0:0:1:21:0:0:3:0:10";

const PREFIX: &str = "XGID=";
const LAYOUT_LEN: usize = 26;
const FIELD_COUNT: usize = 10;
const TOTAL_CHECKERS: u32 = 2 * CHECKERS_PER_SIDE as u32;

// Letters outside A-O pass the structural check and are flagged later.
static XGID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:XGID=)?([-A-Za-z]{26}):([0-9]+):(-?[01]):(-?1):([0-6]{2}|[DBR]):([0-9]+):([0-9]+):([0-3]):([0-9]+):(.+)$",
    )
    .expect("XGID pattern must compile")
});

/// Decoder output: the state plus every non-fatal inconsistency found on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub state: GameState,
    pub warnings: Vec<InvariantViolation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Checkers(Stack),
    Unknown(char),
}

/// Parses an XGID string into a [`GameState`].
///
/// # Errors
///
/// Returns [`DiagramError::Format`] when the string does not have the XGID
/// structure. Inconsistent but well-formed data is reported in
/// [`Decoded::warnings`] instead.
pub fn decode(xgid: &str) -> Result<Decoded, DiagramError> {
    let input = xgid.trim();
    let caps = XGID_PATTERN
        .captures(input)
        .ok_or_else(|| DiagramError::Format(describe_mismatch(input)))?;

    let mut warnings = Vec::new();

    let layout: Vec<char> = caps[1].chars().collect();
    let mut points = [None; POINT_COUNT];
    let mut bar = SideCounts::default();

    for (index, &character) in layout.iter().enumerate() {
        let stack = match decode_cell(character) {
            Cell::Empty => None,
            Cell::Checkers(stack) => Some(stack),
            Cell::Unknown(character) => {
                warnings.push(InvariantViolation::UnrecognizedCharacter { index, character });
                None
            }
        };

        match index {
            0 | 25 => {
                if let Some(stack) = stack {
                    match stack.side {
                        Side::Player => bar.player = bar.player.saturating_add(stack.count),
                        Side::Opponent => bar.opponent = bar.opponent.saturating_add(stack.count),
                    }
                }
            }
            _ => points[index - 1] = stack,
        }
    }

    let cube_exponent = parse_number::<u32>(&caps[2], "cube exponent")?;
    let cube_value = 1u32
        .checked_shl(cube_exponent)
        .ok_or_else(|| DiagramError::Format(format!("cube exponent {cube_exponent} is too large")))?;

    let owner_field = parse_number::<i8>(&caps[3], "cube owner")?;
    let mut cube_owner = match owner_field {
        1 => CubeOwner::Player,
        -1 => CubeOwner::Opponent,
        _ => CubeOwner::Centered,
    };
    if cube_value == 1 && cube_owner != CubeOwner::Centered {
        warnings.push(InvariantViolation::CubeOwnerMismatch { owner: owner_field });
        cube_owner = CubeOwner::Centered;
    }

    let turn = if &caps[4] == "1" { Side::Player } else { Side::Opponent };

    let score = MatchScore {
        player: parse_number(&caps[6], "player score")?,
        opponent: parse_number(&caps[7], "opponent score")?,
    };
    let game_options = parse_number(&caps[8], "game options")?;
    let match_length = parse_number(&caps[9], "match length")?;

    let mut state = GameState {
        points,
        bar,
        off: SideCounts::default(),
        cube_value,
        cube_owner,
        turn,
        dice: caps[5].to_string(),
        score,
        match_length,
        game_options,
        trailing: caps[10].to_string(),
    };

    state.off = SideCounts {
        player: off_count(&state, Side::Player, &mut warnings),
        opponent: off_count(&state, Side::Opponent, &mut warnings),
    };

    let total = state.checker_total();
    if total != TOTAL_CHECKERS {
        warnings.push(InvariantViolation::CheckerTotal { total });
    }

    for warning in &warnings {
        log::warn!("XGID {input}: {warning}");
    }
    log::debug!(
        "decoded XGID: cube {} ({:?}), bar {}/{}, off {}/{}",
        state.cube_value,
        state.cube_owner,
        state.bar.player,
        state.bar.opponent,
        state.off.player,
        state.off.opponent,
    );

    Ok(Decoded { state, warnings })
}

fn decode_cell(character: char) -> Cell {
    match character {
        '-' => Cell::Empty,
        'A'..='O' => Cell::Checkers(Stack {
            side: Side::Player,
            count: character as u8 - b'A' + 1,
        }),
        'a'..='o' => Cell::Checkers(Stack {
            side: Side::Opponent,
            count: character as u8 - b'a' + 1,
        }),
        other => Cell::Unknown(other),
    }
}

/// Borne-off checkers are whatever is left of the side's 15 after counting
/// the points and the bar.
fn off_count(state: &GameState, side: Side, warnings: &mut Vec<InvariantViolation>) -> u8 {
    let in_play = state.checkers_on_points(side) + u32::from(state.bar.get(side));
    match u32::from(CHECKERS_PER_SIDE).checked_sub(in_play) {
        Some(off) => off as u8,
        None => {
            warnings.push(InvariantViolation::NegativeOffCount { side, found: in_play });
            0
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, name: &str) -> Result<T, DiagramError> {
    field
        .parse()
        .map_err(|_| DiagramError::Format(format!("{name} {field:?} is out of range")))
}

fn describe_mismatch(input: &str) -> String {
    let body = input.strip_prefix(PREFIX).unwrap_or(input);
    let layout = body.split(':').next().unwrap_or_default();

    let layout_len = layout.chars().count();
    if layout_len != LAYOUT_LEN {
        return format!("checker layout must be {LAYOUT_LEN} characters, got {layout_len}");
    }
    if let Some(bad) = layout.chars().find(|c| *c != '-' && !c.is_ascii_alphabetic()) {
        return format!("checker layout contains invalid character {bad:?}");
    }

    let field_count = body.split(':').count();
    if field_count < FIELD_COUNT {
        return format!("expected {FIELD_COUNT} colon-separated fields, got {field_count}");
    }
    format!("field values do not match the XGID format in {input:?}")
}
