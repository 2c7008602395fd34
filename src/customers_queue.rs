//! Representacion de la fila de clientes que esperan su pedido
use std::collections::VecDeque;

use log::{debug, info};

use crate::{
    customer::{Customer, CustomerState, Slot},
    events::EventCode,
    order::Ingredient,
};

/// Clientes activos en orden de llegada. Cada uno ocupa un lugar distinto.
pub struct CustomersQueue {
    customers: VecDeque<Customer>,
    max_customers: usize,
}

/// Cliente atendido junto con los puntos que dio
#[derive(Debug)]
pub struct ServedCustomer {
    pub customer: Customer,
    pub reward: u64,
}

impl CustomersQueue {
    pub fn new(max_customers: usize) -> CustomersQueue {
        CustomersQueue {
            customers: VecDeque::new(),
            max_customers: max_customers.min(Slot::ALL.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.customers.len() >= self.max_customers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn free_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .iter()
            .copied()
            .filter(|slot| !self.customers.iter().any(|customer| customer.slot == *slot))
            .collect()
    }

    /// Admite al cliente si hay lugar y su posicion esta libre
    pub fn push(&mut self, customer: Customer) -> Result<(), EventCode> {
        if self.is_full() || !self.free_slots().contains(&customer.slot) {
            return Err(EventCode::NoFreeSlot);
        }
        self.customers.push_back(customer);
        Ok(())
    }

    /// Descuenta paciencia a todos los que esperan y saca a los que se quedaron sin paciencia
    pub fn decay(&mut self, decay_rate: f64) -> Vec<Customer> {
        for customer in self.customers.iter_mut() {
            customer.decay(decay_rate);
        }
        let (left, waiting): (VecDeque<Customer>, VecDeque<Customer>) = self
            .customers
            .drain(..)
            .partition(|customer| customer.state == CustomerState::Left);
        self.customers = waiting;
        for customer in left.iter() {
            info!(
                "[CUSTOMERS] {} (customer {}) left without their {}",
                customer.name, customer.id, customer.order.dish_name
            );
        }
        left.into_iter().collect()
    }

    /// Busca, del mas antiguo al mas nuevo, el primer cliente cuyo pedido coincide con el plato.
    /// Si nadie lo pidio no cambia nada.
    pub fn serve(&mut self, dish: &[Ingredient], base_reward: u64) -> Result<ServedCustomer, EventCode> {
        let position = self
            .customers
            .iter()
            .position(|customer| {
                customer.state == CustomerState::Waiting && customer.order.is_satisfied_by(dish)
            })
            .ok_or(EventCode::NoMatchingOrder)?;
        let mut customer = self
            .customers
            .remove(position)
            .ok_or(EventCode::NoMatchingOrder)?;
        customer.state = CustomerState::Served;
        let reward = base_reward + customer.patience().floor() as u64;
        debug!(
            "[CUSTOMERS] Served {} to {} (customer {}) for {} points",
            customer.order.dish_name, customer.name, customer.id, reward
        );
        Ok(ServedCustomer { customer, reward })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Ingredient::*, Order};

    fn customer(id: u64, slot: Slot, required: Vec<Ingredient>) -> Customer {
        Customer::new(id, "Linh", Order::new("Bánh Mì", required), slot, 100.0)
    }

    #[test]
    fn should_create_an_empty_queue() {
        let queue = CustomersQueue::new(3);
        assert_eq!(true, queue.is_empty());
        assert_eq!(false, queue.is_full());
        assert_eq!(vec![Slot::Top, Slot::Middle, Slot::Bottom], queue.free_slots());
    }

    #[test]
    fn should_reject_a_fourth_customer() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Top, vec![Bread])).unwrap();
        queue.push(customer(2, Slot::Middle, vec![Bread])).unwrap();
        queue.push(customer(3, Slot::Bottom, vec![Bread])).unwrap();

        assert_eq!(Err(EventCode::NoFreeSlot), queue.push(customer(4, Slot::Top, vec![Bread])));
        assert_eq!(3, queue.len());
        assert_eq!(true, queue.free_slots().is_empty());
        let ids: Vec<u64> = queue.iter().map(|customer| customer.id).collect();
        assert_eq!(vec![1, 2, 3], ids);
    }

    #[test]
    fn should_reject_a_customer_on_an_occupied_slot() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Middle, vec![Bread])).unwrap();
        assert_eq!(Err(EventCode::NoFreeSlot), queue.push(customer(2, Slot::Middle, vec![Bread])));
        assert_eq!(vec![Slot::Top, Slot::Bottom], queue.free_slots());
    }

    #[test]
    fn should_serve_the_oldest_matching_customer() {
        let dish = vec![Bread, Pork, Jalapeno, Cilantro];
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Bottom, dish.clone())).unwrap();
        queue.push(customer(2, Slot::Top, dish.clone())).unwrap();

        let served = queue.serve(&dish, 100).unwrap();
        assert_eq!(1, served.customer.id);
        assert_eq!(CustomerState::Served, served.customer.state);
        assert_eq!(200, served.reward);
        assert_eq!(1, queue.len());
        assert_eq!(Some(2), queue.iter().next().map(|customer| customer.id));
        assert_eq!(CustomerState::Waiting, queue.iter().next().unwrap().state);
        assert_eq!(true, queue.free_slots().contains(&Slot::Bottom));
    }

    #[test]
    fn should_skip_older_customers_with_other_orders() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Top, vec![Noodles, Broth, Beef])).unwrap();
        queue.push(customer(2, Slot::Middle, vec![Bread, Pork, Pickle])).unwrap();

        let served = queue.serve(&[Pickle, Bread, Pork], 100).unwrap();
        assert_eq!(2, served.customer.id);
        assert_eq!(1, queue.len());
    }

    #[test]
    fn should_leave_everything_unchanged_when_nobody_matches() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Top, vec![Noodles, Broth, Beef])).unwrap();

        let result = queue.serve(&[Noodles, Broth], 100);
        assert_eq!(Some(EventCode::NoMatchingOrder), result.err());
        assert_eq!(1, queue.len());
    }

    #[test]
    fn should_add_the_remaining_patience_to_the_reward() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Top, vec![Noodles, Broth, Beef])).unwrap();
        for _ in 0..10 {
            queue.decay(0.05);
        }
        let served = queue.serve(&[Noodles, Broth, Beef], 100).unwrap();
        assert_eq!(199, served.reward);
    }

    #[test]
    fn should_remove_the_customers_that_ran_out_of_patience() {
        let mut queue = CustomersQueue::new(3);
        queue.push(customer(1, Slot::Top, vec![Bread])).unwrap();
        for _ in 0..19 {
            assert_eq!(true, queue.decay(5.0).is_empty());
        }
        let left = queue.decay(5.0);
        assert_eq!(1, left.len());
        assert_eq!(CustomerState::Left, left[0].state);
        assert_eq!(true, queue.is_empty());
        assert_eq!(3, queue.free_slots().len());
    }
}
