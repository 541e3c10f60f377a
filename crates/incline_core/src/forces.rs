//! Force-resolution engine: closed-form statics on incline axes.
//!
//! All quantities live on the rotated frame of the incline surface. The
//! parallel axis is positive down-slope, the perpendicular axis positive
//! away from the surface. There is no time stepping; every call derives
//! the complete balance from the current parameters alone.

use crate::scenario::{MotionDirection, Scenario, SimulationParameters};
use serde::{Deserialize, Serialize};

/// Gravitational acceleration, m/s^2.
pub const GRAVITY: f64 = 9.81;

/// Resolved force balance for one parameter configuration. All values in
/// newtons, on incline axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceSolution {
    /// Down-slope weight component, M g sin(theta).
    pub weight_parallel: f64,
    /// Weight component pressing into the surface, M g cos(theta).
    pub weight_perpendicular: f64,
    /// Up-slope component of the applied force P. Zero outside the
    /// external-force scenario.
    pub external_parallel: f64,
    /// Component of P directed away from the surface. Zero outside the
    /// external-force scenario.
    pub external_perpendicular: f64,
    /// Normal reaction R_N. Reported raw: a negative value means the
    /// applied force is lifting the block off the surface.
    pub normal_reaction: f64,
    /// Effective tension F1: hanging-mass weight in the pulley scenario,
    /// the manual value when shown in basic, otherwise zero.
    pub tension: f64,
    /// Effective manual push F2. Non-zero only in the basic scenario.
    pub push: f64,
    /// Friction force. In the static case this is the signed value that
    /// balances the other parallel terms (positive up-slope), regardless
    /// of mu. In the kinetic cases it is mu times R_N, unclamped.
    pub friction: f64,
    /// Residual of the signed parallel sum once friction is included.
    /// Exactly zero in the static case.
    pub net_parallel: f64,
    /// Kinetic cases only: whether mu R_N is at least the magnitude of
    /// the other parallel terms, i.e. whether friction holds the block.
    pub holding: Option<bool>,
}

/// Derives the full force balance for `params`. Pure and total over the
/// declared parameter domains.
pub fn resolve(params: &SimulationParameters) -> ForceSolution {
    let incline = f64::from(params.angle).to_radians();
    let weight = f64::from(params.mass) * GRAVITY;
    let weight_parallel = weight * incline.sin();
    let weight_perpendicular = weight * incline.cos();

    let (external_parallel, external_perpendicular) = match params.scenario {
        Scenario::ExternalForce => {
            let magnitude = f64::from(params.external_force_magnitude);
            // P is given relative to the horizontal; theta - phi is its
            // angle relative to the slope surface.
            let offset = incline - f64::from(params.external_force_angle).to_radians();
            (magnitude * offset.cos(), magnitude * offset.sin())
        }
        Scenario::Basic | Scenario::Pulley => (0.0, 0.0),
    };

    let normal_reaction = weight_perpendicular - external_perpendicular;
    let tension = effective_tension(params);
    let push = effective_push(params);

    // Signed sum of everything except friction, down-slope positive.
    let driving = weight_parallel - tension - push - external_parallel;

    let (friction, net_parallel, holding) = match params.motion_direction {
        MotionDirection::None => (driving, 0.0, None),
        MotionDirection::Down => {
            let friction = params.mu * normal_reaction;
            (friction, driving - friction, Some(friction >= driving.abs()))
        }
        MotionDirection::Up => {
            let friction = params.mu * normal_reaction;
            (friction, driving + friction, Some(friction >= driving.abs()))
        }
    };

    ForceSolution {
        weight_parallel,
        weight_perpendicular,
        external_parallel,
        external_perpendicular,
        normal_reaction,
        tension,
        push,
        friction,
        net_parallel,
        holding,
    }
}

fn effective_tension(params: &SimulationParameters) -> f64 {
    match params.scenario {
        Scenario::Pulley => f64::from(params.pulley_mass) * GRAVITY,
        Scenario::Basic if params.show_tension => f64::from(params.tension),
        Scenario::Basic | Scenario::ExternalForce => 0.0,
    }
}

fn effective_push(params: &SimulationParameters) -> f64 {
    match params.scenario {
        Scenario::Basic if params.show_push => f64::from(params.push),
        Scenario::Basic | Scenario::ExternalForce | Scenario::Pulley => 0.0,
    }
}
