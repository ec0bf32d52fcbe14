use atelier_core::{DomainError, DomainResult};

use crate::engine::Engine;

/// Capability every fleet vehicle provides.
///
/// Calling code holds `dyn Vehicle` (or `dyn Powered`) and never branches on
/// which concrete variant it has; a new variant participates without any
/// change here.
pub trait Vehicle {
    fn model(&self) -> &str;

    /// Rated cargo capacity in kilograms.
    fn cargo_capacity_kg(&self) -> u32;
}

/// Capability of motorized vehicles only.
///
/// Pedal vehicles never implement this, so the fleet has no "engine" stubs
/// and no unsupported-operation errors.
pub trait Powered: Vehicle {
    fn start(&mut self) -> DomainResult<()>;
    fn stop(&mut self) -> DomainResult<()>;
    fn is_running(&self) -> bool;
}

fn ensure_model(model: &str) -> DomainResult<String> {
    let model = model.trim();
    if model.is_empty() {
        return Err(DomainError::invalid_argument("model cannot be blank"));
    }
    Ok(model.to_string())
}

/// Panel van.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Van {
    model: String,
    engine: Engine,
}

impl Van {
    pub fn new(model: &str) -> DomainResult<Self> {
        Ok(Self {
            model: ensure_model(model)?,
            engine: Engine::new(),
        })
    }
}

impl Vehicle for Van {
    fn model(&self) -> &str {
        &self.model
    }

    fn cargo_capacity_kg(&self) -> u32 {
        800
    }
}

impl Powered for Van {
    fn start(&mut self) -> DomainResult<()> {
        self.engine.start()
    }

    fn stop(&mut self) -> DomainResult<()> {
        self.engine.stop()
    }

    fn is_running(&self) -> bool {
        self.engine.is_running()
    }
}

/// Flatbed truck for sheet stock and castings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatbedTruck {
    model: String,
    engine: Engine,
}

impl FlatbedTruck {
    pub fn new(model: &str) -> DomainResult<Self> {
        Ok(Self {
            model: ensure_model(model)?,
            engine: Engine::new(),
        })
    }
}

impl Vehicle for FlatbedTruck {
    fn model(&self) -> &str {
        &self.model
    }

    fn cargo_capacity_kg(&self) -> u32 {
        3500
    }
}

impl Powered for FlatbedTruck {
    fn start(&mut self) -> DomainResult<()> {
        self.engine.start()
    }

    fn stop(&mut self) -> DomainResult<()> {
        self.engine.stop()
    }

    fn is_running(&self) -> bool {
        self.engine.is_running()
    }
}

/// Pedal cargo bike for small local deliveries. No engine, so no [`Powered`]
/// capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoBike {
    model: String,
}

impl CargoBike {
    pub fn new(model: &str) -> DomainResult<Self> {
        Ok(Self {
            model: ensure_model(model)?,
        })
    }
}

impl Vehicle for CargoBike {
    fn model(&self) -> &str {
        &self.model
    }

    fn cargo_capacity_kg(&self) -> u32 {
        80
    }
}

/// Start every motorized vehicle in the fleet.
///
/// The first failure propagates to the caller; vehicles after it are left
/// untouched.
pub fn start_all(fleet: &mut [Box<dyn Powered>]) -> DomainResult<()> {
    for vehicle in fleet.iter_mut() {
        vehicle.start()?;
    }
    Ok(())
}

/// Total rated capacity of a fleet, in kilograms.
pub fn fleet_capacity_kg(fleet: &[Box<dyn Vehicle>]) -> u32 {
    fleet.iter().map(|v| v.cargo_capacity_kg()).sum()
}
