//! Guided-learning progression: the ordered step machine, checkpoint
//! gating, and the parameter auto-configuration applied on step entry.
//!
//! The machine never blocks a transition itself. Prerequisite gating is
//! the caller's policy, built on [`GuidedLearning::step_complete`]; the
//! machine's own job is to keep the step index and the answered set
//! consistent and to apply each step's entry effect atomically with the
//! index change.

use crate::scenario::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One state of the guided progression. The variants map onto indices
/// 0 through 6 in declaration order; no other states exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidedStep {
    /// 0: free exploration, guided mode not started.
    FreePlay,
    /// 1: normal force on a flat surface.
    FlatSurface,
    /// 2: friction opposes motion.
    Friction,
    /// 3: tilting the surface.
    Incline,
    /// 4: resolving weight into components.
    Components,
    /// 5: equilibrium on the incline.
    Equilibrium,
    /// 6: module complete.
    Complete,
}

impl Default for GuidedStep {
    fn default() -> Self {
        GuidedStep::FreePlay
    }
}

/// Parameter auto-configuration applied when a step is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEffect {
    /// Leave the parameters as they are.
    None,
    /// Restore defaults, then flatten the incline with the weight pair
    /// shown.
    ResetFlat,
    /// Restore defaults.
    Reset,
    /// Reveal the equations panel; everything else is untouched.
    RevealEquations,
}

impl EntryEffect {
    /// Applies this effect to `params`.
    pub fn apply(self, params: &mut SimulationParameters) {
        match self {
            EntryEffect::None => {}
            EntryEffect::ResetFlat => {
                *params = SimulationParameters::default();
                params.angle = 0;
                params.show_mass = true;
            }
            EntryEffect::Reset => *params = SimulationParameters::default(),
            EntryEffect::RevealEquations => params.show_equations = true,
        }
    }
}

impl GuidedStep {
    /// Numeric position of this step, 0 through 6.
    pub fn index(self) -> u8 {
        match self {
            GuidedStep::FreePlay => 0,
            GuidedStep::FlatSurface => 1,
            GuidedStep::Friction => 2,
            GuidedStep::Incline => 3,
            GuidedStep::Components => 4,
            GuidedStep::Equilibrium => 5,
            GuidedStep::Complete => 6,
        }
    }

    /// The step at `index`, or `None` outside 0 through 6.
    pub fn from_index(index: u8) -> Option<GuidedStep> {
        match index {
            0 => Some(GuidedStep::FreePlay),
            1 => Some(GuidedStep::FlatSurface),
            2 => Some(GuidedStep::Friction),
            3 => Some(GuidedStep::Incline),
            4 => Some(GuidedStep::Components),
            5 => Some(GuidedStep::Equilibrium),
            6 => Some(GuidedStep::Complete),
            _ => None,
        }
    }

    /// Checkpoint question ids that must all be answered before the
    /// panel offers the next step.
    pub fn required_questions(self) -> &'static [&'static str] {
        match self {
            GuidedStep::FreePlay | GuidedStep::Complete => &[],
            GuidedStep::FlatSurface => &["step1-q1"],
            GuidedStep::Friction => &["step2"],
            GuidedStep::Incline => &["step3-q1", "step3-q2"],
            GuidedStep::Components => &["step4-q2"],
            GuidedStep::Equilibrium => &["step5"],
        }
    }

    /// Parameter auto-configuration applied on entry to this step.
    pub fn entry_effect(self) -> EntryEffect {
        match self {
            GuidedStep::Friction => EntryEffect::ResetFlat,
            GuidedStep::Incline => EntryEffect::Reset,
            GuidedStep::Components => EntryEffect::RevealEquations,
            GuidedStep::FreePlay
            | GuidedStep::FlatSurface
            | GuidedStep::Equilibrium
            | GuidedStep::Complete => EntryEffect::None,
        }
    }

    /// Banner title for the step panel.
    pub fn title(self) -> &'static str {
        match self {
            GuidedStep::FreePlay => "Free Play Mode",
            GuidedStep::FlatSurface => "STEP 1: FLAT SURFACE",
            GuidedStep::Friction => "STEP 2: FRICTION",
            GuidedStep::Incline => "STEP 3: INCLINE",
            GuidedStep::Components => "STEP 4: COMPONENTS",
            GuidedStep::Equilibrium => "STEP 5: EQUILIBRIUM",
            GuidedStep::Complete => "Module Complete!",
        }
    }

    /// One-line instruction shown below the title.
    pub fn instruction(self) -> &'static str {
        match self {
            GuidedStep::FreePlay => "Use the full control panel on the right to experiment freely.",
            GuidedStep::FlatSurface => "Start with a flat surface (Angle 0°).",
            GuidedStep::Friction => "Add tension and move the block right.",
            GuidedStep::Incline => "Let's tilt the surface.",
            GuidedStep::Components => "Weight (Mg) is split into two components.",
            GuidedStep::Equilibrium => "Friction stops the block from sliding down.",
            GuidedStep::Complete => "You've mastered the basics of Free Body Diagrams.",
        }
    }

    /// Progress-bar fraction, 0.0 at free play and 1.0 at completion.
    pub fn progress(self) -> f64 {
        f64::from(self.index()) / 6.0
    }
}

/// Progression state: the current step plus the set of answered
/// checkpoints. The set grows monotonically; only [`GuidedLearning::reset`]
/// empties it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedLearning {
    current_step: GuidedStep,
    answered: HashSet<String>,
}

impl GuidedLearning {
    pub fn new() -> Self {
        Self {
            current_step: GuidedStep::FreePlay,
            answered: HashSet::new(),
        }
    }

    pub fn current_step(&self) -> GuidedStep {
        self.current_step
    }

    pub fn answered(&self) -> &HashSet<String> {
        &self.answered
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answered.contains(id)
    }

    /// Records a checkpoint as answered. Idempotent.
    pub fn mark_answered(&mut self, id: &str) {
        self.answered.insert(id.to_string());
    }

    /// Whether every checkpoint of the current step has been answered.
    /// Recomputed on each call, never cached.
    pub fn step_complete(&self) -> bool {
        self.current_step
            .required_questions()
            .iter()
            .all(|id| self.answered.contains(*id))
    }

    /// Moves to `target` and applies its entry effect to `params` in the
    /// same call, so no reader can observe the step changed but the
    /// parameters not yet reconfigured.
    pub fn advance(&mut self, target: GuidedStep, params: &mut SimulationParameters) {
        self.current_step = target;
        target.entry_effect().apply(params);
    }

    /// Restores step 0 with an empty answered set. Simulation parameters
    /// are not this type's to touch.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GuidedLearning {
    fn default() -> Self {
        Self::new()
    }
}
