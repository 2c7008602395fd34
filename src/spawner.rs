//! Generador de clientes. Cada cierta cantidad de ticks intenta sentar a un cliente nuevo
//! con un pedido al azar. La fuente de aleatoriedad se inyecta para poder fijar la semilla.
use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use crate::{
    catalog::{Recipe, RecipeBook},
    customer::Customer,
    customers_queue::CustomersQueue,
    events::EventCode,
    order::Order,
};

const CUSTOMER_NAMES: [&str; 6] = ["Minh", "Linh", "Hùng", "Mai", "Tuấn", "Hoa"];

pub struct Spawner<R: Rng> {
    rng: R,
    recipes: RecipeBook,
    cooldown_ticks: u32,
    ticks_until_spawn: u32,
    next_id: u64,
    max_order_ingredients: usize,
    max_patience: f64,
}

impl<R: Rng> Spawner<R> {
    pub fn new(
        rng: R,
        recipes: RecipeBook,
        cooldown_ticks: u32,
        max_order_ingredients: usize,
        max_patience: f64,
    ) -> Spawner<R> {
        Spawner {
            rng,
            recipes,
            cooldown_ticks,
            ticks_until_spawn: 0,
            next_id: 1,
            max_order_ingredients,
            max_patience,
        }
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Cuenta un tick. Cuando se cumple la espera intenta sentar a un cliente y reinicia la espera,
    /// de modo que dos intentos quedan separados por exactamente `cooldown_ticks` ticks.
    pub fn tick(&mut self, customers: &mut CustomersQueue) -> Option<EventCode> {
        if self.ticks_until_spawn > 0 {
            self.ticks_until_spawn -= 1;
            return None;
        }
        self.ticks_until_spawn = self.cooldown_ticks.saturating_sub(1);
        Some(self.try_spawn(customers))
    }

    /// Intenta sentar a un cliente en un lugar libre al azar
    pub fn try_spawn(&mut self, customers: &mut CustomersQueue) -> EventCode {
        if customers.is_full() {
            debug!("[SPAWNER] Every table is taken, nobody comes in");
            return EventCode::NoFreeSlot;
        }
        let slot = match customers.free_slots().choose(&mut self.rng) {
            Some(slot) => *slot,
            None => return EventCode::NoFreeSlot,
        };
        let recipe = match self.recipes.recipes().choose(&mut self.rng) {
            Some(recipe) => recipe,
            None => return EventCode::NoFreeSlot,
        };
        let order = build_order(recipe, self.max_order_ingredients, &mut self.rng);
        let name = CUSTOMER_NAMES.choose(&mut self.rng).copied().unwrap_or("Guest");

        let id = self.next_id;
        let customer = Customer::new(id, name, order, slot, self.max_patience);
        info!(
            "[SPAWNER] {} (customer {}) sits at {:?} and orders {} {:?}",
            customer.name, id, slot, customer.order.dish_name, customer.order.required
        );
        match customers.push(customer) {
            Ok(()) => {
                self.next_id += 1;
                EventCode::CustomerArrived { id, slot }
            }
            Err(event) => event,
        }
    }
}

/// Arma el pedido con los ingredientes de la receta. Si la receta tiene mas de `max_ingredients`,
/// se eligen esa cantidad al azar sin repetir.
pub fn build_order<R: Rng + ?Sized>(recipe: &Recipe, max_ingredients: usize, rng: &mut R) -> Order {
    if recipe.ingredients.len() <= max_ingredients {
        return Order::new(&recipe.dish_name, recipe.ingredients.iter().copied());
    }
    let picked = rand::seq::index::sample(rng, recipe.ingredients.len(), max_ingredients);
    Order::new(
        &recipe.dish_name,
        picked.into_iter().map(|index| recipe.ingredients[index]),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{customer::Slot, order::Ingredient::*};

    fn spawner(cooldown_ticks: u32) -> Spawner<StdRng> {
        Spawner::new(
            StdRng::seed_from_u64(7),
            RecipeBook::default(),
            cooldown_ticks,
            3,
            100.0,
        )
    }

    #[test]
    fn should_sample_three_distinct_ingredients_from_a_big_recipe() {
        let recipe = Recipe::new("Phở", vec![Noodles, Broth, Beef, Herbs, Lime], "").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let order = build_order(&recipe, 3, &mut rng);
            assert_eq!(3, order.required.len());
            assert!(order.required.iter().all(|ingredient| recipe.ingredients.contains(ingredient)));
        }
    }

    #[test]
    fn should_keep_a_small_recipe_whole() {
        let recipe = Recipe::new("Phở", vec![Noodles, Broth, Beef], "").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let order = build_order(&recipe, 3, &mut rng);
        assert_eq!(Order::new("Phở", vec![Noodles, Broth, Beef]), order);
    }

    #[test]
    fn should_fill_the_three_slots_and_reject_the_fourth() {
        let mut spawner = spawner(0);
        let mut customers = CustomersQueue::new(3);
        for expected_id in 1..=3 {
            match spawner.try_spawn(&mut customers) {
                EventCode::CustomerArrived { id, .. } => assert_eq!(expected_id, id),
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(EventCode::NoFreeSlot, spawner.try_spawn(&mut customers));
        assert_eq!(3, customers.len());

        let slots: HashSet<Slot> = customers.iter().map(|customer| customer.slot).collect();
        assert_eq!(3, slots.len());
        for customer in customers.iter() {
            assert_eq!(100.0, customer.patience());
            assert!(customer.order.required.len() <= 3);
            assert!(spawner.recipes().get(&customer.order.dish_name).is_some());
        }
    }

    #[test]
    fn should_spawn_on_the_first_tick_and_then_every_cooldown_ticks() {
        let mut spawner = spawner(2);
        let mut customers = CustomersQueue::new(3);
        assert!(matches!(
            spawner.tick(&mut customers),
            Some(EventCode::CustomerArrived { id: 1, .. })
        ));
        assert_eq!(None, spawner.tick(&mut customers));
        assert!(matches!(
            spawner.tick(&mut customers),
            Some(EventCode::CustomerArrived { id: 2, .. })
        ));
    }

    #[test]
    fn should_space_the_attempts_by_the_default_cooldown() {
        let mut spawner = spawner(300);
        let mut customers = CustomersQueue::new(3);
        let attempts: Vec<u32> = (1..=700)
            .filter(|_| spawner.tick(&mut customers).is_some())
            .collect();
        assert_eq!(vec![1, 301, 601], attempts);
    }

    #[test]
    fn should_try_every_tick_with_a_cooldown_of_zero_or_one() {
        for cooldown in 0..=1 {
            let mut spawner = spawner(cooldown);
            let mut customers = CustomersQueue::new(3);
            let attempts = (0..5).filter(|_| spawner.tick(&mut customers).is_some()).count();
            assert_eq!(5, attempts);
        }
    }

    #[test]
    fn should_repeat_the_same_customers_with_the_same_seed() {
        let mut first = CustomersQueue::new(3);
        let mut second = CustomersQueue::new(3);
        let mut spawner_a = spawner(0);
        let mut spawner_b = spawner(0);
        for _ in 0..3 {
            spawner_a.try_spawn(&mut first);
            spawner_b.try_spawn(&mut second);
        }
        let describe = |queue: &CustomersQueue| -> Vec<(Slot, Order)> {
            queue.iter().map(|customer| (customer.slot, customer.order.clone())).collect()
        };
        assert_eq!(describe(&first), describe(&second));
    }
}
