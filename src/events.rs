//! Eventos que produce la simulacion en cada tick. La interfaz los usa para mostrar mensajes temporales.
use serde::Serialize;

use crate::{customer::Slot, order::Ingredient, station::Lane};

/// Categoria de un resultado fallido. Ninguno es fatal ni modifica el estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    Capacity,
    Occupancy,
    NotReady,
    NoMatch,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EventCode {
    PickedUp(Ingredient),
    Deposited(Ingredient),
    Promoted { from: Lane, to: Lane },
    CookingStarted,
    CookingFinished,
    DishReady,
    CustomerArrived { id: u64, slot: Slot },
    CustomerServed { id: u64, reward: u64 },
    CustomerLeft { id: u64, slot: Slot },
    StationFull,
    DestinationOccupied,
    AlreadyCarrying,
    StillCooking,
    StationEmpty,
    NothingToServe,
    NoMatchingOrder,
    NoFreeSlot,
    NothingToDo,
}

impl EventCode {
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            EventCode::StationFull => Some(FailureKind::Capacity),
            EventCode::DestinationOccupied | EventCode::AlreadyCarrying => {
                Some(FailureKind::Occupancy)
            }
            EventCode::StillCooking | EventCode::StationEmpty | EventCode::NothingToServe => {
                Some(FailureKind::NotReady)
            }
            EventCode::NoMatchingOrder => Some(FailureKind::NoMatch),
            EventCode::NoFreeSlot => Some(FailureKind::Unavailable),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure_kind().is_some()
    }

    /// Texto corto para mostrar en pantalla
    pub fn message(&self) -> String {
        match self {
            EventCode::PickedUp(ingredient) => format!("Picked up {}", ingredient.display_name()),
            EventCode::Deposited(ingredient) => {
                format!("Added {} to prep", ingredient.display_name())
            }
            EventCode::Promoted { from, to } => format!("Moved {:?} to {:?}", from, to),
            EventCode::CookingStarted => "Cooking...".to_string(),
            EventCode::CookingFinished => "Dish cooked!".to_string(),
            EventCode::DishReady => "Dish ready to serve!".to_string(),
            EventCode::CustomerArrived { .. } => "A new customer arrived".to_string(),
            EventCode::CustomerServed { reward, .. } => format!("Order served! +{}", reward),
            EventCode::CustomerLeft { .. } => "A customer left hungry".to_string(),
            EventCode::StationFull => "Station is full!".to_string(),
            EventCode::DestinationOccupied => "Next station is busy!".to_string(),
            EventCode::AlreadyCarrying => "Hands are full!".to_string(),
            EventCode::StillCooking => "Still cooking!".to_string(),
            EventCode::StationEmpty => "Station is empty!".to_string(),
            EventCode::NothingToServe => "Nothing to serve!".to_string(),
            EventCode::NoMatchingOrder => "Nobody ordered that!".to_string(),
            EventCode::NoFreeSlot => "No free table".to_string(),
            EventCode::NothingToDo => "Nothing to do here".to_string(),
        }
    }
}
