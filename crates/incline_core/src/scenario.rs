//! Scenario model: the three supported setups and the mutable parameter
//! record every engine reads.

use serde::{Deserialize, Serialize};

/// Which physical setup is active. The scenario selects the forces that
/// participate in the balance and which manual force channels are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Block on an adjustable incline with optional manual tension (F1)
    /// and push (F2).
    Basic,
    /// Block on an incline with an applied force P at an angle measured
    /// from the horizontal.
    ExternalForce,
    /// Block tied over a pulley at the top of the incline to a hanging
    /// mass; tension is derived from that mass, never set directly.
    Pulley,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Basic
    }
}

impl Scenario {
    /// Whether the manual tension channel (checkbox and slider) is live.
    /// The stored magnitude is kept even while the channel is disabled.
    pub fn manual_tension_enabled(self) -> bool {
        match self {
            Scenario::Basic | Scenario::Pulley => true,
            Scenario::ExternalForce => false,
        }
    }

    /// Whether the manual push channel is live.
    pub fn manual_push_enabled(self) -> bool {
        match self {
            Scenario::Basic | Scenario::ExternalForce => true,
            Scenario::Pulley => false,
        }
    }
}

/// Impending-slip direction. Selects which friction model applies; the
/// block itself never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionDirection {
    /// Static case: friction takes whatever value balances the block.
    None,
    /// Impending motion up-slope: kinetic friction acts down-slope.
    Up,
    /// Impending motion down-slope: kinetic friction acts up-slope.
    Down,
}

impl Default for MotionDirection {
    fn default() -> Self {
        MotionDirection::None
    }
}

/// The single parameter record behind the whole simulator. Every control
/// interaction is a partial update merged into this struct; the force
/// engine and the equation formatter both read it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub scenario: Scenario,
    /// Incline angle in degrees, 0 to 90.
    pub angle: u32,
    /// Block mass in kg, 5 to 50.
    pub mass: u32,
    /// Display toggle for the block's mass label.
    pub show_mass: bool,
    /// Manual tension magnitude F1 in newtons, 0 to 200. Ignored in the
    /// pulley scenario, where tension is derived from the hanging mass.
    pub tension: u32,
    pub show_tension: bool,
    /// Manual push magnitude F2 in newtons, 0 to 200.
    pub push: u32,
    pub show_push: bool,
    /// Applied force magnitude P in newtons, 0 to 100 (external-force
    /// scenario only).
    pub external_force_magnitude: u32,
    /// Direction of P in degrees from the horizontal, -60 to 60.
    /// Positive angles tilt P away from the surface.
    pub external_force_angle: i32,
    /// Hanging mass in kg, 1 to 30 (pulley scenario only).
    pub pulley_mass: u32,
    pub motion_direction: MotionDirection,
    /// Coefficient of friction, 0.00 to 1.00.
    pub mu: f64,
    /// Display toggle for the equations panel. No computational effect.
    pub show_equations: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            scenario: Scenario::Basic,
            angle: 30,
            mass: 20,
            show_mass: true,
            tension: 0,
            show_tension: false,
            push: 0,
            show_push: false,
            external_force_magnitude: 50,
            external_force_angle: 0,
            pulley_mass: 10,
            motion_direction: MotionDirection::None,
            mu: 0.0,
            show_equations: false,
        }
    }
}

impl SimulationParameters {
    /// Whether the tension term F1 participates in the parallel balance:
    /// always in the pulley scenario, gated by `show_tension` in basic,
    /// never under an external force.
    pub fn tension_active(&self) -> bool {
        match self.scenario {
            Scenario::Pulley => true,
            Scenario::Basic => self.show_tension,
            Scenario::ExternalForce => false,
        }
    }

    /// Whether the push slot F2 participates: gated by `show_push` in
    /// basic; under an external force the applied force P fills the slot.
    pub fn push_active(&self) -> bool {
        match self.scenario {
            Scenario::Basic => self.show_push,
            Scenario::ExternalForce => true,
            Scenario::Pulley => false,
        }
    }
}

/// Partial update merged into [`SimulationParameters`]. Fields left
/// `None` keep their current value, so a slider can patch one field
/// without knowing the rest of the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationUpdate {
    pub scenario: Option<Scenario>,
    pub angle: Option<u32>,
    pub mass: Option<u32>,
    pub show_mass: Option<bool>,
    pub tension: Option<u32>,
    pub show_tension: Option<bool>,
    pub push: Option<u32>,
    pub show_push: Option<bool>,
    pub external_force_magnitude: Option<u32>,
    pub external_force_angle: Option<i32>,
    pub pulley_mass: Option<u32>,
    pub motion_direction: Option<MotionDirection>,
    pub mu: Option<f64>,
    pub show_equations: Option<bool>,
}

impl SimulationUpdate {
    /// Merge the set fields into `params`, leaving the rest untouched.
    pub fn apply(&self, params: &mut SimulationParameters) {
        if let Some(scenario) = self.scenario {
            params.scenario = scenario;
        }
        if let Some(angle) = self.angle {
            params.angle = angle;
        }
        if let Some(mass) = self.mass {
            params.mass = mass;
        }
        if let Some(show_mass) = self.show_mass {
            params.show_mass = show_mass;
        }
        if let Some(tension) = self.tension {
            params.tension = tension;
        }
        if let Some(show_tension) = self.show_tension {
            params.show_tension = show_tension;
        }
        if let Some(push) = self.push {
            params.push = push;
        }
        if let Some(show_push) = self.show_push {
            params.show_push = show_push;
        }
        if let Some(external_force_magnitude) = self.external_force_magnitude {
            params.external_force_magnitude = external_force_magnitude;
        }
        if let Some(external_force_angle) = self.external_force_angle {
            params.external_force_angle = external_force_angle;
        }
        if let Some(pulley_mass) = self.pulley_mass {
            params.pulley_mass = pulley_mass;
        }
        if let Some(motion_direction) = self.motion_direction {
            params.motion_direction = motion_direction;
        }
        if let Some(mu) = self.mu {
            params.mu = mu;
        }
        if let Some(show_equations) = self.show_equations {
            params.show_equations = show_equations;
        }
    }
}
