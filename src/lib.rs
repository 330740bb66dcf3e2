#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod checkers;
pub mod compose;
pub mod config;
pub mod diagram;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod xgid;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use checkers::place_checkers;
pub use compose::compose;
pub use config::DiagramConfig;
pub use diagram::Diagram;
pub use error::{DiagramError, InvariantViolation};
pub use layout::{BoardSizing, PointGeometry, point_geometry};
pub use types::GameState;
pub use xgid::decode;

/// Routes `log` records to the browser console and reports panics there.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiation) keeps the existing logger.
    let _ = console_log::init_with_level(log::Level::Warn);
}
