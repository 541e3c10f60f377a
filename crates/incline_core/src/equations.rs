//! Equation formatter: renders the equilibrium equations shown alongside
//! the diagram.
//!
//! The parallel-axis equation is assembled as an ordered term list and
//! only then rendered to a string. The order is fixed (weight, push,
//! tension, friction) because it is the canonical form learners compare
//! against worked solutions.

use crate::forces::{ForceSolution, GRAVITY};
use crate::scenario::{MotionDirection, Scenario, SimulationParameters};
use serde::{Deserialize, Serialize};

/// One term of the parallel-axis equation, on the down-slope-positive
/// axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "term", rename_all = "snake_case")]
pub enum ParallelTerm {
    /// `M sin{angle}° · 9.81`, always the leading term.
    Weight { angle: u32 },
    /// `- F_2`: the push slot, acting up-slope.
    Push,
    /// `- F_1`: the tension slot, acting up-slope.
    Tension,
    /// Friction with its sign fixed by the impending direction.
    Friction { sign: FrictionSign },
}

/// Direction friction acts on the slope, as shown in the equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionSign {
    /// `- F_f`: acts up-slope, opposing impending motion down.
    UpSlope,
    /// `+ F_f`: acts down-slope, opposing impending motion up.
    DownSlope,
    /// `± F_f`: static case, direction undetermined.
    Unresolved,
}

impl ParallelTerm {
    /// The exact on-screen text of this term.
    pub fn render(&self) -> String {
        match self {
            ParallelTerm::Weight { angle } => format!("M sin{}° · {}", angle, GRAVITY),
            ParallelTerm::Push => "- F_2".to_string(),
            ParallelTerm::Tension => "- F_1".to_string(),
            ParallelTerm::Friction { sign } => match sign {
                FrictionSign::UpSlope => "- F_f".to_string(),
                FrictionSign::DownSlope => "+ F_f".to_string(),
                FrictionSign::Unresolved => "± F_f".to_string(),
            },
        }
    }
}

/// Hanging-mass equations, pulley scenario only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PulleyEquations {
    /// `T - m_a·g = 0`
    pub balance: String,
    /// `T = {pulley_mass} × 9.81 = {:.2} N`
    pub solved: String,
}

/// Numeric weight decomposition lines, shown only on a tilted surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightComponents {
    pub parallel: String,
    pub perpendicular: String,
}

/// Everything the equations panel renders: symbolic strings plus the
/// numeric solution they were formatted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationPresentation {
    /// `R_N - M cos{angle}° · 9.81 = 0`
    pub perpendicular_substitution: String,
    /// `R_N = {:.2} N`, solved from the perpendicular weight component.
    pub perpendicular_solved: String,
    /// Parallel-axis terms in canonical order.
    pub parallel_terms: Vec<ParallelTerm>,
    /// The rendered parallel equation, terms joined with single spaces
    /// and ` = 0` appended.
    pub parallel: String,
    pub pulley: Option<PulleyEquations>,
    pub weight_components: Option<WeightComponents>,
    pub solution: ForceSolution,
}

/// Selects the parallel-axis terms for the current configuration, in
/// canonical order.
pub fn parallel_terms(
    params: &SimulationParameters,
    solution: &ForceSolution,
) -> Vec<ParallelTerm> {
    let mut terms = vec![ParallelTerm::Weight {
        angle: params.angle,
    }];
    if params.push_active() {
        terms.push(ParallelTerm::Push);
    }
    if params.tension_active() {
        terms.push(ParallelTerm::Tension);
    }
    match params.motion_direction {
        MotionDirection::Down if solution.friction != 0.0 => terms.push(ParallelTerm::Friction {
            sign: FrictionSign::UpSlope,
        }),
        MotionDirection::Up if solution.friction != 0.0 => terms.push(ParallelTerm::Friction {
            sign: FrictionSign::DownSlope,
        }),
        MotionDirection::None if params.mu > 0.0 => terms.push(ParallelTerm::Friction {
            sign: FrictionSign::Unresolved,
        }),
        _ => {}
    }
    terms
}

/// Formats the full equation panel for `params` and its resolved forces.
/// Pure and total, like the resolver feeding it.
pub fn format(params: &SimulationParameters, solution: &ForceSolution) -> EquationPresentation {
    let terms = parallel_terms(params, solution);
    let rendered: Vec<String> = terms.iter().map(ParallelTerm::render).collect();
    let parallel = format!("{} = 0", rendered.join(" "));

    let perpendicular_substitution = format!("R_N - M cos{}° · {} = 0", params.angle, GRAVITY);
    let perpendicular_solved = format!("R_N = {:.2} N", solution.weight_perpendicular);

    let pulley = match params.scenario {
        Scenario::Pulley => Some(PulleyEquations {
            balance: "T - m_a·g = 0".to_string(),
            solved: format!(
                "T = {} × {} = {:.2} N",
                params.pulley_mass, GRAVITY, solution.tension
            ),
        }),
        Scenario::Basic | Scenario::ExternalForce => None,
    };

    let weight_components = if params.angle > 0 {
        Some(WeightComponents {
            parallel: format!(
                "Mg·sin({}°) = {:.2} N",
                params.angle, solution.weight_parallel
            ),
            perpendicular: format!(
                "Mg·cos({}°) = {:.2} N",
                params.angle, solution.weight_perpendicular
            ),
        })
    } else {
        None
    };

    EquationPresentation {
        perpendicular_substitution,
        perpendicular_solved,
        parallel_terms: terms,
        parallel,
        pulley,
        weight_components,
        solution: *solution,
    }
}

#[cfg(test)]
mod tests {
    use super::{format, parallel_terms, FrictionSign, ParallelTerm};
    use crate::forces::resolve;
    use crate::scenario::{MotionDirection, Scenario, SimulationParameters};

    fn present(params: &SimulationParameters) -> super::EquationPresentation {
        format(params, &resolve(params))
    }

    #[test]
    fn default_configuration_renders_weight_only() {
        let params = SimulationParameters::default();
        let equations = present(&params);

        assert_eq!(equations.parallel, "M sin30° · 9.81 = 0");
        assert_eq!(
            equations.perpendicular_substitution,
            "R_N - M cos30° · 9.81 = 0"
        );
        assert_eq!(equations.perpendicular_solved, "R_N = 169.91 N");
        assert_eq!(equations.pulley, None);
    }

    #[test]
    fn flat_surface_omits_the_component_block() {
        let mut params = SimulationParameters::default();
        params.angle = 0;
        let equations = present(&params);

        assert_eq!(equations.parallel, "M sin0° · 9.81 = 0");
        assert_eq!(equations.weight_components, None);
    }

    #[test]
    fn tilted_surface_shows_numeric_components() {
        let params = SimulationParameters::default();
        let components = present(&params).weight_components.expect("components");

        assert_eq!(components.parallel, "Mg·sin(30°) = 98.10 N");
        assert_eq!(components.perpendicular, "Mg·cos(30°) = 169.91 N");
    }

    #[test]
    fn term_order_is_weight_push_tension_friction() {
        let mut params = SimulationParameters::default();
        params.show_push = true;
        params.show_tension = true;
        params.mu = 0.2;
        let solution = resolve(&params);

        let terms = parallel_terms(&params, &solution);
        assert_eq!(
            terms,
            vec![
                ParallelTerm::Weight { angle: 30 },
                ParallelTerm::Push,
                ParallelTerm::Tension,
                ParallelTerm::Friction {
                    sign: FrictionSign::Unresolved
                },
            ]
        );
        assert_eq!(
            present(&params).parallel,
            "M sin30° · 9.81 - F_2 - F_1 ± F_f = 0"
        );
    }

    #[test]
    fn shown_tension_adds_the_f1_term() {
        let mut params = SimulationParameters::default();
        params.show_tension = true;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 - F_1 = 0");
    }

    #[test]
    fn hidden_tension_value_does_not_add_a_term() {
        let mut params = SimulationParameters::default();
        params.tension = 150;
        params.show_tension = false;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 = 0");
    }

    #[test]
    fn external_force_always_fills_the_push_slot() {
        let mut params = SimulationParameters::default();
        params.scenario = Scenario::ExternalForce;
        params.show_push = false;
        params.show_tension = true;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 - F_2 = 0");
    }

    #[test]
    fn pulley_scenario_adds_tension_term_and_block() {
        let mut params = SimulationParameters::default();
        params.scenario = Scenario::Pulley;
        params.pulley_mass = 10;
        let equations = present(&params);

        assert_eq!(equations.parallel, "M sin30° · 9.81 - F_1 = 0");
        let pulley = equations.pulley.expect("pulley block");
        assert_eq!(pulley.balance, "T - m_a·g = 0");
        assert_eq!(pulley.solved, "T = 10 × 9.81 = 98.10 N");
    }

    #[test]
    fn pulley_solved_line_tracks_the_hanging_mass() {
        let mut params = SimulationParameters::default();
        params.scenario = Scenario::Pulley;
        params.pulley_mass = 23;
        let pulley = present(&params).pulley.expect("pulley block");
        assert_eq!(pulley.solved, "T = 23 × 9.81 = 225.63 N");
    }

    #[test]
    fn impending_down_motion_subtracts_friction() {
        let mut params = SimulationParameters::default();
        params.mu = 0.4;
        params.motion_direction = MotionDirection::Down;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 - F_f = 0");
    }

    #[test]
    fn impending_up_motion_adds_friction() {
        let mut params = SimulationParameters::default();
        params.mu = 0.4;
        params.motion_direction = MotionDirection::Up;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 + F_f = 0");
    }

    #[test]
    fn zero_mu_kinetic_case_shows_no_friction_term() {
        let mut params = SimulationParameters::default();
        params.mu = 0.0;
        params.motion_direction = MotionDirection::Down;
        assert_eq!(present(&params).parallel, "M sin30° · 9.81 = 0");
    }

    #[test]
    fn zero_mu_static_case_shows_no_marker() {
        let params = SimulationParameters::default();
        let terms = parallel_terms(&params, &resolve(&params));
        assert_eq!(terms, vec![ParallelTerm::Weight { angle: 30 }]);
    }

    #[test]
    fn negative_normal_reaction_still_renders_a_friction_term() {
        let mut params = SimulationParameters::default();
        params.scenario = Scenario::ExternalForce;
        params.angle = 80;
        params.mass = 5;
        params.external_force_magnitude = 100;
        params.external_force_angle = -10;
        params.mu = 0.5;
        params.motion_direction = MotionDirection::Down;

        let equations = present(&params);
        assert!(equations.solution.friction < 0.0);
        assert!(equations.parallel.contains("- F_f"));
    }

    #[test]
    fn solved_normal_reaction_uses_the_weight_component() {
        // The on-screen substitution line omits the applied-force lift, so
        // its solved value stays M g cos(theta) even under an external force.
        let mut params = SimulationParameters::default();
        params.scenario = Scenario::ExternalForce;
        params.external_force_magnitude = 50;
        let equations = present(&params);
        assert_eq!(equations.perpendicular_solved, "R_N = 169.91 N");
        // The resolved reaction itself is lower and stays numeric-only:
        // rendering it here would print 144.91, not 169.91.
        assert!((equations.solution.normal_reaction - 144.9141842225069).abs() < 1e-9);
        assert_eq!(
            format!("{:.2}", equations.solution.normal_reaction),
            "144.91"
        );
    }

    #[test]
    fn presentation_carries_the_numeric_solution() {
        let params = SimulationParameters::default();
        let solution = resolve(&params);
        let equations = format(&params, &solution);
        assert_eq!(equations.solution, solution);
    }

    #[test]
    fn terms_serialize_with_tagged_shape() {
        let weight = serde_json::to_string(&ParallelTerm::Weight { angle: 45 }).expect("weight");
        assert_eq!(weight, r#"{"term":"weight","angle":45}"#);

        let friction = serde_json::to_string(&ParallelTerm::Friction {
            sign: FrictionSign::Unresolved,
        })
        .expect("friction");
        assert_eq!(friction, r#"{"term":"friction","sign":"unresolved"}"#);
    }
}
