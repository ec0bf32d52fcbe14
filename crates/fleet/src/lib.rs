//! Delivery fleet: vehicles as capability implementors.
//!
//! There is no vehicle base type. Each variant implements the [`Vehicle`]
//! capability; motorized variants additionally implement [`Powered`] and
//! embed a composed [`Engine`] that owns the shared start/stop state
//! machine. A pedal vehicle simply never claims the [`Powered`] capability,
//! so nothing has to stub an engine it does not have.

pub mod engine;
pub mod vehicle;

pub use engine::{Engine, EngineState};
pub use vehicle::{CargoBike, FlatbedTruck, Powered, Van, Vehicle, fleet_capacity_kg, start_all};
