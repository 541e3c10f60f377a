//! Force-resolution and equation-formatting entry points.

use crate::session::WasmSession;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl WasmSession {
    /// Resolved force balance for the current parameters.
    pub fn resolve(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.resolve())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Equation panel payload: symbolic strings, the ordered term list,
    /// and the numeric solution they were formatted from.
    pub fn equations(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.equations())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
