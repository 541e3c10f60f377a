//! Guided-learning entry points.

use crate::session::WasmSession;
use incline_core::questions::{self, AnswerOption};
use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Progress payload for the guided panel.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuidedProgress {
    current_step: u8,
    title: &'static str,
    instruction: &'static str,
    progress: f64,
    step_complete: bool,
    required_questions: &'static [&'static str],
}

/// Question payload for the checkpoint widgets. Deliberately leaves the
/// answer key out; answers go through `check_answer`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionView {
    id: &'static str,
    prompt: &'static str,
    options: [AnswerOption; 2],
}

#[wasm_bindgen]
impl WasmSession {
    /// Index of the current guided step, 0 through 6.
    pub fn current_step(&self) -> u8 {
        self.session.guided().current_step().index()
    }

    /// Whether every checkpoint of the current step has been answered.
    pub fn step_complete(&self) -> bool {
        self.session.step_complete()
    }

    /// Everything the guided panel renders for the current step.
    pub fn guided_progress(&self) -> Result<JsValue, JsValue> {
        let step = self.session.guided().current_step();
        let payload = GuidedProgress {
            current_step: step.index(),
            title: step.title(),
            instruction: step.instruction(),
            progress: step.progress(),
            step_complete: self.session.step_complete(),
            required_questions: step.required_questions(),
        };
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Answered checkpoint ids, sorted for stable iteration on the JS
    /// side.
    pub fn answered_questions(&self) -> Array {
        let mut ids: Vec<&str> = self
            .session
            .guided()
            .answered()
            .iter()
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(JsValue::from_str).collect()
    }

    /// Moves to the step at `index`, applying its entry
    /// auto-configuration in the same call.
    pub fn advance_guided_step(&mut self, index: u8) -> Result<(), JsValue> {
        self.session
            .advance_guided_step_index(index)
            .map_err(|e| JsValue::from_str(&format!("Guided step change failed: {}", e)))
    }

    /// Records a checkpoint as answered without checking anything.
    pub fn mark_answered(&mut self, id: &str) {
        self.session.mark_answered(id);
    }

    /// Checks a submitted answer. The correct choice marks the question
    /// answered and applies its parameter patch; the payload carries the
    /// feedback line either way.
    pub fn check_answer(&mut self, id: &str, choice: &str) -> Result<JsValue, JsValue> {
        let feedback = self
            .session
            .check_answer(id, choice)
            .map_err(|e| JsValue::from_str(&format!("Answer check failed: {}", e)))?;
        to_value(&feedback).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The question content for a checkpoint id.
    pub fn question(&self, id: &str) -> Result<JsValue, JsValue> {
        let question = questions::lookup(id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown question id: {}", id)))?;
        let payload = QuestionView {
            id: question.id,
            prompt: question.prompt,
            options: question.options,
        };
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Restores step 0 with no answered questions. Parameters are left
    /// as they are.
    pub fn reset_guided_learning(&mut self) {
        self.session.reset_guided_learning();
    }
}
