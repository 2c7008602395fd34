//! Jugador automatico para correr partidas sin interfaz.
//! Atiende al cliente mas antiguo cuyo plato todavia no esta en la linea: junta sus ingredientes, los cocina y los entrega.
use std::collections::BTreeSet;

use rand::Rng;

use crate::{
    layout::{Direction, Rect, Zone},
    order::Ingredient,
    simulation::{SimulationState, TickInput},
    station::{Lane, StationPhase},
};

#[derive(Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn next_input<R: Rng>(&self, state: &SimulationState<R>) -> TickInput {
        match self.next_zone(state) {
            Some(zone) => self.go_and_interact(state, zone),
            None => TickInput::default(),
        }
    }

    fn next_zone<R: Rng>(&self, state: &SimulationState<R>) -> Option<Zone> {
        let pipeline = state.pipeline();
        if !pipeline.station(Lane::Serve).is_empty() {
            return Some(Zone::Station(Lane::Serve));
        }
        if pipeline.station(Lane::Cook).phase() == StationPhase::Loaded {
            return Some(Zone::Station(Lane::Cook));
        }
        if state.player().carrying.is_some() {
            return Some(Zone::Station(Lane::Prep));
        }

        let prepared: BTreeSet<Ingredient> = pipeline
            .station(Lane::Prep)
            .contents()
            .iter()
            .copied()
            .collect();
        let in_flight = [pipeline.station(Lane::Cook), pipeline.station(Lane::Serve)];
        let target = &state
            .customers()
            .iter()
            .filter(|customer| {
                !in_flight
                    .iter()
                    .any(|station| !station.is_empty() && customer.order.is_satisfied_by(station.contents()))
            })
            .find(|customer| prepared.is_subset(&customer.order.required))?
            .order
            .required;
        match target.difference(&prepared).next() {
            Some(missing) => Some(Zone::IngredientBin(*missing)),
            None if pipeline.station(Lane::Cook).is_empty() => Some(Zone::Station(Lane::Prep)),
            None => None,
        }
    }

    fn go_and_interact<R: Rng>(&self, state: &SimulationState<R>, zone: Zone) -> TickInput {
        let player = state.player().position;
        if state.layout().zone_near(&player) == Some(zone) {
            return TickInput::interact();
        }
        match state.layout().zone_rect(zone) {
            Some(target) => TickInput::moving(direction_towards(&player, &target)),
            None => TickInput::default(),
        }
    }
}

fn direction_towards(from: &Rect, to: &Rect) -> Direction {
    let dx = (to.x + to.width / 2.0) - (from.x + from.width / 2.0);
    let dy = (to.y + to.height / 2.0) - (from.y + from.height / 2.0);
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
