use crate::types::Side;

/// Fatal errors: nothing is drawn when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The XGID does not have the expected structure.
    #[error("malformed XGID: {0}")]
    Format(String),
    /// Diagram dimensions leave no room for a board.
    #[error("invalid diagram configuration: {0}")]
    Configuration(String),
}

/// Data inconsistencies found while decoding. Decoding continues with a
/// best-effort substitution so a diagnostic board can still be drawn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// An undoubled cube (value 1) that claims an owner. Owner forced to centered.
    #[error("cube value is 1 but owner field is {owner}; treating cube as centered")]
    CubeOwnerMismatch { owner: i8 },
    /// A layout letter outside `A-O` / `a-o`. Recorded as an empty point.
    #[error("unrecognized layout character {character:?} at field index {index}")]
    UnrecognizedCharacter { index: usize, character: char },
    /// More than 15 checkers found for one side. Off count clamped to 0.
    #[error("{side:?} has {found} checkers in play, more than 15; off count clamped to 0")]
    NegativeOffCount { side: Side, found: u32 },
    /// Points, bar and off do not add up to 30.
    #[error("checker total is {total}, expected 30")]
    CheckerTotal { total: u32 },
}

impl From<DiagramError> for wasm_bindgen::JsValue {
    fn from(err: DiagramError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}
