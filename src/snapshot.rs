//! Vista de solo lectura del estado al final de cada tick. Es lo unico que recibe la interfaz.
use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    customer::{Customer, CustomerState, Slot},
    events::EventCode,
    layout::Rect,
    order::Ingredient,
    station::{Station, StationPhase},
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StationSnapshot {
    pub phase: StationPhase,
    pub contents: Vec<Ingredient>,
    pub cook_progress: Option<f64>,
    pub capacity: usize,
}

impl From<&Station> for StationSnapshot {
    fn from(station: &Station) -> Self {
        StationSnapshot {
            phase: station.phase(),
            contents: station.contents().to_vec(),
            cook_progress: station.cook_progress(),
            capacity: station.capacity(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StationsSnapshot {
    pub prep: StationSnapshot,
    pub cook: StationSnapshot,
    pub serve: StationSnapshot,
}

/// Recipiente de un ingrediente y el lugar que ocupa en la cocina
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct BinSnapshot {
    pub ingredient: Ingredient,
    pub area: Rect,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CustomerSnapshot {
    pub id: u64,
    pub name: String,
    pub slot: Slot,
    pub dish: String,
    pub order: BTreeSet<Ingredient>,
    pub patience_fraction: f64,
    pub state: CustomerState,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(customer: &Customer) -> Self {
        CustomerSnapshot {
            id: customer.id,
            name: customer.name.clone(),
            slot: customer.slot,
            dish: customer.order.dish_name.clone(),
            order: customer.order.required.clone(),
            patience_fraction: customer.patience_fraction(),
            state: customer.state,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub player_carry: Option<Ingredient>,
    pub player_position: Rect,
    pub stations: StationsSnapshot,
    pub bins: Vec<BinSnapshot>,
    pub customers: Vec<CustomerSnapshot>,
    pub score: u64,
    pub orders_completed: u64,
    pub customers_lost: u64,
    pub last_event: Option<EventCode>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
