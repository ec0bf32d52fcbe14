use atelier_core::{DomainError, DomainResult};

/// Engine run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Running,
}

/// Composed engine: the start/stop state machine shared by every motorized
/// vehicle.
///
/// Vehicles embed an `Engine` and delegate to it instead of inheriting the
/// behavior from a common ancestor. Invariant: `start` is only valid from
/// `Stopped`, `stop` only from `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Stopped,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn start(&mut self) -> DomainResult<()> {
        if self.is_running() {
            return Err(DomainError::invalid_state("engine is already running"));
        }
        self.state = EngineState::Running;
        Ok(())
    }

    pub fn stop(&mut self) -> DomainResult<()> {
        if !self.is_running() {
            return Err(DomainError::invalid_state("engine is already stopped"));
        }
        self.state = EngineState::Stopped;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
