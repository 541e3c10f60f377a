//! The `incline_core` crate is the engine behind the Incline statics
//! teaching simulator. Everything here is closed-form and synchronous:
//! no integrator, no time stepping, every quantity recomputed from the
//! current parameters on each call.
//!
//! Key components:
//! - **Scenario model**: [`scenario::SimulationParameters`] and the
//!   merge-patch record every control interaction produces.
//! - **Force resolution**: [`forces::resolve`], a pure function from
//!   parameters to the full balance on incline axes.
//! - **Equation formatter**: [`equations::format`], the canonical
//!   term-ordered equation strings the panel renders.
//! - **Guided progression**: [`guided::GuidedStep`] and its checkpoint
//!   gating, plus the [`questions`] bank.
//! - **Session**: [`session::Session`], the facade owning both records.

pub mod equations;
pub mod forces;
pub mod guided;
pub mod questions;
pub mod scenario;
pub mod session;
