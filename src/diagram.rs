use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::compose::compose_with_layout;
use crate::config::DiagramConfig;
use crate::error::{DiagramError, InvariantViolation};
use crate::layout::{BoardLayout, BoardSizing};
use crate::render::{DrawPrimitive, Renderer, replay};
use crate::types::GameState;
use crate::xgid::{Decoded, STARTING_POSITION, decode};

/// A position plus the theme it is drawn with.
///
/// Point geometry is computed on first use and kept until the canvas size
/// changes; each draw is otherwise an independent pass over the state.
#[wasm_bindgen]
pub struct Diagram {
    config: DiagramConfig,
    sizing: BoardSizing,
    layout: OnceCell<BoardLayout>,
    state: GameState,
    warnings: Vec<InvariantViolation>,
}

impl Diagram {
    /// Decodes `xgid` (the starting position when `None`) for drawing with `config`.
    ///
    /// # Errors
    ///
    /// [`DiagramError::Configuration`] for unusable dimensions, checked first;
    /// [`DiagramError::Format`] for a malformed XGID.
    pub fn with_config(xgid: Option<&str>, config: DiagramConfig) -> Result<Self, DiagramError> {
        let sizing = BoardSizing::new(&config)?;
        let Decoded { state, warnings } = decode(xgid.unwrap_or(STARTING_POSITION))?;
        Ok(Self {
            config,
            sizing,
            layout: OnceCell::new(),
            state,
            warnings,
        })
    }

    /// Replaces the position. On error the previous position is kept.
    pub fn load(&mut self, xgid: &str) -> Result<(), DiagramError> {
        let Decoded { state, warnings } = decode(xgid)?;
        self.state = state;
        self.warnings = warnings;
        Ok(())
    }

    /// Changes the canvas size, dropping cached geometry if the board moved.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), DiagramError> {
        let config = DiagramConfig {
            canvas_width: width,
            canvas_height: height,
            ..self.config.clone()
        };
        let sizing = BoardSizing::new(&config)?;
        if sizing != self.sizing {
            self.layout = OnceCell::new();
        }
        self.config = config;
        self.sizing = sizing;
        Ok(())
    }

    pub fn layout(&self) -> &BoardLayout {
        self.layout.get_or_init(|| BoardLayout::new(self.sizing))
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn invariant_warnings(&self) -> &[InvariantViolation] {
        &self.warnings
    }

    pub fn draw_primitives(&self) -> Vec<DrawPrimitive> {
        compose_with_layout(&self.state, self.layout(), &self.config)
    }

    pub fn render_to<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        replay(&self.draw_primitives(), renderer)
    }
}

#[wasm_bindgen]
impl Diagram {
    /// `options` may be `undefined` or any subset of the diagram options.
    #[wasm_bindgen(constructor)]
    pub fn new(xgid: Option<String>, options: JsValue) -> Result<Diagram, JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            DiagramConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self::with_config(xgid.as_deref(), config)?)
    }

    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(&mut self, xgid: &str) -> Result<(), JsValue> {
        Ok(self.load(xgid)?)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        Ok(self.set_canvas_size(width, height)?)
    }

    /// The ordered primitive list as plain JS objects.
    pub fn primitives(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.draw_primitives())?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state)?)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Diagram {
    pub fn draw(&self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.render_to(&mut crate::canvas::CanvasRenderer::new(ctx))
    }
}

/// Decodes an XGID into a plain JS object describing the position.
#[wasm_bindgen(js_name = decodeXgid)]
pub fn decode_xgid(xgid: &str) -> Result<JsValue, JsValue> {
    let Decoded { state, .. } = decode(xgid)?;
    Ok(serde_wasm_bindgen::to_value(&state)?)
}
