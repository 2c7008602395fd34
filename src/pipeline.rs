//! Linea de preparacion de platos: Prep -> Cook -> Serve.
//! Cada estacion guarda a lo sumo un lote, y los lotes solo cruzan de estacion enteros.
use log::debug;

use crate::{
    events::EventCode,
    order::Ingredient,
    station::{CookState, Lane, Station},
};

#[derive(Debug, Clone)]
pub struct Pipeline {
    prep: Station,
    cook: Station,
    serve: Station,
}

impl Pipeline {
    pub fn new(capacity: usize, cook_duration_ticks: u32) -> Pipeline {
        Pipeline {
            prep: Station::prep(capacity),
            cook: Station::cook(capacity, cook_duration_ticks),
            serve: Station::serve(capacity),
        }
    }

    pub fn station(&self, lane: Lane) -> &Station {
        match lane {
            Lane::Prep => &self.prep,
            Lane::Cook => &self.cook,
            Lane::Serve => &self.serve,
        }
    }

    fn station_mut(&mut self, lane: Lane) -> &mut Station {
        match lane {
            Lane::Prep => &mut self.prep,
            Lane::Cook => &mut self.cook,
            Lane::Serve => &mut self.serve,
        }
    }

    pub fn add_ingredient(&mut self, lane: Lane, ingredient: Ingredient) -> Result<(), EventCode> {
        self.station_mut(lane).add_ingredient(ingredient)
    }

    pub fn start_cooking(&mut self) -> bool {
        self.cook.start_cooking()
    }

    /// Mueve el lote completo a la estacion siguiente, que tiene que estar vacia.
    /// Solo se permite Prep -> Cook, y Cook -> Serve cuando la coccion termino.
    pub fn promote(&mut self, from: Lane, to: Lane) -> Result<(), EventCode> {
        match (from, to) {
            (Lane::Prep, Lane::Cook) | (Lane::Cook, Lane::Serve) => {}
            _ => return Err(EventCode::NothingToDo),
        }
        if !self.station(to).is_empty() {
            return Err(EventCode::DestinationOccupied);
        }
        let source = self.station(from);
        if source.is_empty() {
            return Err(EventCode::StationEmpty);
        }
        if from == Lane::Cook && source.cook_state() != Some(CookState::Done) {
            return Err(EventCode::StillCooking);
        }
        let batch = self.station_mut(from).take_contents();
        debug!("[PIPELINE] Moving {:?} from {:?} to {:?}", batch, from, to);
        self.station_mut(to).load_contents(batch);
        Ok(())
    }

    /// Avanza la coccion un tick. Un lote listo pasa a Serve solo si Serve esta vacia;
    /// si no, queda esperando en Cook y se vuelve a intentar en el proximo tick.
    pub fn advance_tick(&mut self) -> Vec<EventCode> {
        let mut events = Vec::new();
        if self.cook.advance_cooking() {
            debug!("[COOK] Batch finished: {:?}", self.cook.contents());
            events.push(EventCode::CookingFinished);
        }
        if self.cook.cook_state() == Some(CookState::Done) && self.serve.is_empty() {
            let batch = self.cook.take_contents();
            debug!("[COOK] Dish moved to serve: {:?}", batch);
            self.serve.load_contents(batch);
            events.push(EventCode::DishReady);
        }
        events
    }

    /// Vacia la estacion de entrega despues de servir un plato
    pub(crate) fn clear_serve(&mut self) -> Vec<Ingredient> {
        self.serve.take_contents()
    }
}
