//! Session facade: owns the two process-local records and exposes the
//! operations the UI collaborators drive.
//!
//! Every method runs to completion before the next event is processed,
//! so a reader never observes a step index without its entry effect or a
//! half-merged parameter patch.

use crate::equations::{self, EquationPresentation};
use crate::forces::{self, ForceSolution};
use crate::guided::{GuidedLearning, GuidedStep};
use crate::questions;
use crate::scenario::{SimulationParameters, SimulationUpdate};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a checkpoint answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub correct: bool,
    pub feedback: String,
}

/// One UI session: the simulation parameters and the guided-learning
/// progression, with the asymmetric reset semantics between them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    params: SimulationParameters,
    guided: GuidedLearning,
}

impl Session {
    pub fn new() -> Self {
        Self {
            params: SimulationParameters::default(),
            guided: GuidedLearning::new(),
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn guided(&self) -> &GuidedLearning {
        &self.guided
    }

    /// Resolves the force balance for the current parameters.
    pub fn resolve(&self) -> ForceSolution {
        forces::resolve(&self.params)
    }

    /// Formats the equation panel for the current parameters.
    pub fn equations(&self) -> EquationPresentation {
        let solution = forces::resolve(&self.params);
        equations::format(&self.params, &solution)
    }

    /// Merge-patch entry point used by every control widget.
    pub fn update_simulation(&mut self, update: &SimulationUpdate) {
        update.apply(&mut self.params);
    }

    /// Restores default parameters. Guided progress is untouched.
    pub fn reset_simulation(&mut self) {
        self.params = SimulationParameters::default();
    }

    /// The "reset everything" button. Deliberately resets the simulation
    /// only, so the learner's step position survives.
    pub fn reset_all(&mut self) {
        self.reset_simulation();
    }

    /// Moves the progression to `target`, applying its entry effect to
    /// the parameters in the same call. The machine accepts any target;
    /// prerequisite gating is the panel's policy via
    /// [`Session::step_complete`].
    pub fn advance_guided_step(&mut self, target: GuidedStep) {
        self.guided.advance(target, &mut self.params);
    }

    /// Index-addressed variant of [`Session::advance_guided_step`] for
    /// callers that speak step numbers.
    pub fn advance_guided_step_index(&mut self, index: u8) -> Result<()> {
        let target = GuidedStep::from_index(index)
            .ok_or_else(|| anyhow!("Guided step index out of range: {}.", index))?;
        self.advance_guided_step(target);
        Ok(())
    }

    /// Whether every checkpoint of the current step has been answered.
    pub fn step_complete(&self) -> bool {
        self.guided.step_complete()
    }

    /// Records a checkpoint as answered. Idempotent; accepts ids the
    /// bank does not know, since the set is just a membership record.
    pub fn mark_answered(&mut self, id: &str) {
        self.guided.mark_answered(id);
    }

    /// Checks `choice` against the bank. The correct answer marks the
    /// question answered and applies its parameter patch; a wrong answer
    /// changes nothing.
    pub fn check_answer(&mut self, id: &str, choice: &str) -> Result<AnswerFeedback> {
        let question = questions::lookup(id)
            .ok_or_else(|| anyhow!("Unknown question id: {}.", id))?;
        if choice == question.correct {
            self.guided.mark_answered(id);
            if let Some(effect) = question.effect {
                effect.apply(&mut self.params);
            }
            Ok(AnswerFeedback {
                correct: true,
                feedback: question.correct_feedback.to_string(),
            })
        } else {
            Ok(AnswerFeedback {
                correct: false,
                feedback: question.incorrect_feedback.to_string(),
            })
        }
    }

    /// Restores step 0 with an empty answered set. Parameters are left
    /// as they are.
    pub fn reset_guided_learning(&mut self) {
        self.guided.reset();
    }
}
