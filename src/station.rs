//! Estaciones de la cocina (preparacion, coccion y entrega)
use serde::Serialize;

use crate::{events::EventCode, order::Ingredient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Lane {
    Prep,
    Cook,
    Serve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CookState {
    Idle,
    Cooking { elapsed_ticks: u32 },
    Done,
}

/// Fase visible de una estacion. Preparacion y entrega solo pasan por `Empty` y `Filling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationPhase {
    Empty,
    Filling,
    Loaded,
    Cooking,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationKind {
    Prep,
    Cook { state: CookState, duration_ticks: u32 },
    Serve,
}

/// Una estacion guarda un unico lote de ingredientes, con capacidad acotada
#[derive(Debug, Clone)]
pub struct Station {
    kind: StationKind,
    contents: Vec<Ingredient>,
    capacity: usize,
}

impl Station {
    pub fn prep(capacity: usize) -> Station {
        Station::new(StationKind::Prep, capacity)
    }

    pub fn cook(capacity: usize, duration_ticks: u32) -> Station {
        Station::new(
            StationKind::Cook {
                state: CookState::Idle,
                duration_ticks,
            },
            capacity,
        )
    }

    pub fn serve(capacity: usize) -> Station {
        Station::new(StationKind::Serve, capacity)
    }

    fn new(kind: StationKind, capacity: usize) -> Station {
        Station {
            kind,
            contents: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn lane(&self) -> Lane {
        match self.kind {
            StationKind::Prep => Lane::Prep,
            StationKind::Cook { .. } => Lane::Cook,
            StationKind::Serve => Lane::Serve,
        }
    }

    pub fn contents(&self) -> &[Ingredient] {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cook_state(&self) -> Option<CookState> {
        match self.kind {
            StationKind::Cook { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn phase(&self) -> StationPhase {
        match (&self.kind, self.contents.is_empty()) {
            (_, true) => StationPhase::Empty,
            (StationKind::Cook { state, .. }, false) => match state {
                CookState::Idle => StationPhase::Loaded,
                CookState::Cooking { .. } => StationPhase::Cooking,
                CookState::Done => StationPhase::Done,
            },
            (_, false) => StationPhase::Filling,
        }
    }

    /// Progreso de coccion entre 0 y 1, solo para la estacion de coccion
    pub fn cook_progress(&self) -> Option<f64> {
        match self.kind {
            StationKind::Cook {
                state,
                duration_ticks,
            } => Some(match state {
                CookState::Idle => 0.0,
                CookState::Cooking { elapsed_ticks } => {
                    (elapsed_ticks as f64 / duration_ticks.max(1) as f64).min(1.0)
                }
                CookState::Done => 1.0,
            }),
            _ => None,
        }
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<(), EventCode> {
        if let StationKind::Cook { state, .. } = self.kind {
            if state != CookState::Idle {
                return Err(EventCode::StillCooking);
            }
        }
        if self.contents.len() >= self.capacity {
            return Err(EventCode::StationFull);
        }
        self.contents.push(ingredient);
        Ok(())
    }

    /// Solo arranca si la estacion tiene un lote crudo. Devuelve si arranco.
    pub fn start_cooking(&mut self) -> bool {
        match &mut self.kind {
            StationKind::Cook { state, .. }
                if *state == CookState::Idle && !self.contents.is_empty() =>
            {
                *state = CookState::Cooking { elapsed_ticks: 0 };
                true
            }
            _ => false,
        }
    }

    /// Avanza un tick de coccion. Devuelve true en el tick en que el lote queda listo.
    pub fn advance_cooking(&mut self) -> bool {
        if let StationKind::Cook {
            state,
            duration_ticks,
        } = &mut self.kind
        {
            if let CookState::Cooking { elapsed_ticks } = state {
                let elapsed_ticks = *elapsed_ticks + 1;
                if elapsed_ticks >= *duration_ticks {
                    *state = CookState::Done;
                    return true;
                }
                *state = CookState::Cooking { elapsed_ticks };
            }
        }
        false
    }

    /// Saca todo el lote y deja la estacion vacia
    pub(crate) fn take_contents(&mut self) -> Vec<Ingredient> {
        if let StationKind::Cook { state, .. } = &mut self.kind {
            *state = CookState::Idle;
        }
        std::mem::take(&mut self.contents)
    }

    /// Recibe un lote entero. La estacion debe estar vacia.
    pub(crate) fn load_contents(&mut self, contents: Vec<Ingredient>) {
        debug_assert!(self.contents.is_empty());
        if let StationKind::Cook { state, .. } = &mut self.kind {
            *state = CookState::Idle;
        }
        self.contents = contents;
    }
}
