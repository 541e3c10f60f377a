//! Checkpoint question bank for the guided steps.
//!
//! The panel renders these verbatim; ids are the same strings the
//! gating tables in [`crate::guided`] require.

use crate::scenario::{MotionDirection, SimulationUpdate};
use serde::Serialize;

/// One answer choice: the value the panel submits and its button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A two-choice checkpoint question with its feedback lines and an
/// optional parameter patch applied when the correct answer is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [AnswerOption; 2],
    pub correct: &'static str,
    pub correct_feedback: &'static str,
    pub incorrect_feedback: &'static str,
    pub effect: Option<SimulationUpdate>,
}

/// Every checkpoint id, in step order.
pub const QUESTION_IDS: [&str; 6] = [
    "step1-q1", "step2", "step3-q1", "step3-q2", "step4-q2", "step5",
];

/// Looks up a checkpoint question by id.
pub fn lookup(id: &str) -> Option<Question> {
    match id {
        "step1-q1" => Some(Question {
            id: "step1-q1",
            prompt: "Direction of Normal Force (R_N) on flat surface?",
            options: [
                AnswerOption {
                    value: "vertical",
                    label: "Vertically Up",
                },
                AnswerOption {
                    value: "horizontal",
                    label: "Horizontal",
                },
            ],
            correct: "vertical",
            correct_feedback: "Correct! R_N is vertical (perpendicular to surface).",
            incorrect_feedback: "Incorrect. Normal means perpendicular.",
            effect: None,
        }),
        "step2" => Some(Question {
            id: "step2",
            prompt: "Block moves right. Which way does Friction point?",
            options: [
                AnswerOption {
                    value: "left",
                    label: "Left (Opposite to motion)",
                },
                AnswerOption {
                    value: "right",
                    label: "Right (Same as motion)",
                },
            ],
            correct: "left",
            correct_feedback: "Correct! Friction opposes motion.",
            incorrect_feedback: "Incorrect. Friction opposes motion.",
            effect: None,
        }),
        "step3-q1" => Some(Question {
            id: "step3-q1",
            prompt: "Direction of Weight (Mg)?",
            options: [
                AnswerOption {
                    value: "down",
                    label: "Vertically Down",
                },
                AnswerOption {
                    value: "perp",
                    label: "Perpendicular",
                },
            ],
            correct: "down",
            correct_feedback: "Correct! Gravity is always clear down.",
            incorrect_feedback: "No. Weight is always vertical.",
            effect: None,
        }),
        "step3-q2" => Some(Question {
            id: "step3-q2",
            prompt: "Direction of Normal Force (R_N)?",
            options: [
                AnswerOption {
                    value: "perp",
                    label: "Perpendicular to Surface",
                },
                AnswerOption {
                    value: "up",
                    label: "Vertically Up",
                },
            ],
            correct: "perp",
            correct_feedback: "Correct!",
            incorrect_feedback: "Incorrect. Normal means perpendicular.",
            effect: None,
        }),
        "step4-q2" => Some(Question {
            id: "step4-q2",
            prompt: "Which component balances Normal Force (R_N)?",
            options: [
                AnswerOption {
                    value: "cos",
                    label: "Mg cos(θ) (Perp)",
                },
                AnswerOption {
                    value: "sin",
                    label: "Mg sin(θ) (Parallel)",
                },
            ],
            correct: "cos",
            correct_feedback: "Correct! R_N = Mg cos(θ).",
            incorrect_feedback: "Incorrect. Sin is parallel.",
            effect: None,
        }),
        "step5" => Some(Question {
            id: "step5",
            prompt: "To stop sliding DOWN, where does Friction point?",
            options: [
                AnswerOption {
                    value: "up",
                    label: "Up the Incline",
                },
                AnswerOption {
                    value: "down",
                    label: "Down the Incline",
                },
            ],
            correct: "up",
            correct_feedback: "Correct! Friction points UP to stop DOWN motion.",
            incorrect_feedback: "Incorrect. The block is sliding down, so friction opposes (up).",
            // Answering correctly starts the impending-down demonstration.
            effect: Some(SimulationUpdate {
                motion_direction: Some(MotionDirection::Down),
                ..SimulationUpdate::default()
            }),
        }),
        _ => None,
    }
}
