//! Session wrapper and simulation-parameter entry points.

use incline_core::scenario::SimulationUpdate;
use incline_core::session::Session;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSession {
    pub(crate) session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        console_error_panic_hook::set_once();
        WasmSession {
            session: Session::new(),
        }
    }

    /// Current simulation parameters as a plain object with camelCase
    /// keys.
    pub fn simulation(&self) -> Result<JsValue, JsValue> {
        to_value(self.session.params())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Whether the manual tension controls are live for the current
    /// scenario. The stored magnitude survives either way.
    pub fn manual_tension_enabled(&self) -> bool {
        self.session.params().scenario.manual_tension_enabled()
    }

    /// Whether the manual push controls are live for the current
    /// scenario.
    pub fn manual_push_enabled(&self) -> bool {
        self.session.params().scenario.manual_push_enabled()
    }

    /// Merge-patch entry point: `patch` carries any subset of the
    /// parameter fields.
    pub fn update_simulation(&mut self, patch: JsValue) -> Result<(), JsValue> {
        let update: SimulationUpdate = from_value(patch)
            .map_err(|e| JsValue::from_str(&format!("Invalid simulation update: {}", e)))?;
        self.session.update_simulation(&update);
        Ok(())
    }

    /// Restores default parameters. Guided progress is untouched.
    pub fn reset_simulation(&mut self) {
        self.session.reset_simulation();
    }

    /// The "reset everything" button: resets the simulation only, so the
    /// learner's step position survives.
    pub fn reset_all(&mut self) {
        self.session.reset_all();
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}
