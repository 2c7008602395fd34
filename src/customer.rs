//! Clientes del restaurante y su paciencia
use serde::Serialize;

use crate::order::Order;

/// Lugares fijos donde esperan los clientes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Top,
    Middle,
    Bottom,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Top, Slot::Middle, Slot::Bottom];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CustomerState {
    Waiting,
    Served,
    Left,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub order: Order,
    pub slot: Slot,
    pub state: CustomerState,
    patience: f64,
    max_patience: f64,
    waited_ticks: u64,
}

impl Customer {
    pub fn new(id: u64, name: &str, order: Order, slot: Slot, max_patience: f64) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            order,
            slot,
            state: CustomerState::Waiting,
            patience: max_patience,
            max_patience,
            waited_ticks: 0,
        }
    }

    pub fn patience(&self) -> f64 {
        self.patience
    }

    pub fn patience_fraction(&self) -> f64 {
        if self.max_patience <= 0.0 {
            return 0.0;
        }
        self.patience / self.max_patience
    }

    pub fn waited_ticks(&self) -> u64 {
        self.waited_ticks
    }

    /// Descuenta la paciencia de un tick. Se calcula desde los ticks esperados para no acumular error.
    /// Devuelve true si el cliente se queda sin paciencia.
    pub fn decay(&mut self, decay_rate: f64) -> bool {
        if self.state != CustomerState::Waiting {
            return false;
        }
        self.waited_ticks += 1;
        self.patience = (self.max_patience - decay_rate * self.waited_ticks as f64).max(0.0);
        if self.patience <= 0.0 {
            self.state = CustomerState::Left;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Ingredient::*;

    fn customer() -> Customer {
        Customer::new(1, "Minh", Order::new("Phở", vec![Noodles, Broth, Beef]), Slot::Top, 100.0)
    }

    #[test]
    fn should_create_a_waiting_customer_with_full_patience() {
        let customer = customer();
        assert_eq!(CustomerState::Waiting, customer.state);
        assert_eq!(100.0, customer.patience());
        assert_eq!(1.0, customer.patience_fraction());
    }

    #[test]
    fn should_leave_exactly_when_the_patience_runs_out() {
        let mut customer = customer();
        for _ in 0..1999 {
            assert_eq!(false, customer.decay(0.05));
        }
        assert!(customer.patience() > 0.0);
        assert_eq!(CustomerState::Waiting, customer.state);
        assert_eq!(true, customer.decay(0.05));
        assert_eq!(CustomerState::Left, customer.state);
        assert_eq!(2000, customer.waited_ticks());
        assert_eq!(0.0, customer.patience());
    }

    #[test]
    fn should_not_decay_a_customer_that_is_not_waiting() {
        let mut customer = customer();
        customer.state = CustomerState::Served;
        assert_eq!(false, customer.decay(0.05));
        assert_eq!(100.0, customer.patience());
    }
}
