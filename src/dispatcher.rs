//! Resuelve la accion "interactuar" del jugador. Cada invocacion produce exactamente un efecto.
use log::debug;

use crate::{
    customers_queue::CustomersQueue,
    events::EventCode,
    layout::Zone,
    order::Ingredient,
    pipeline::Pipeline,
    station::{CookState, Lane},
    statistics::Scoreboard,
};

/// Representa al despachador de interacciones.
/// Tiene referencias a lo que lleva el jugador, a la linea de estaciones, a la fila de clientes y al puntaje.
pub struct Dispatcher<'a> {
    carrying: &'a mut Option<Ingredient>,
    pipeline: &'a mut Pipeline,
    customers: &'a mut CustomersQueue,
    scoreboard: &'a mut Scoreboard,
    base_reward: u64,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        carrying: &'a mut Option<Ingredient>,
        pipeline: &'a mut Pipeline,
        customers: &'a mut CustomersQueue,
        scoreboard: &'a mut Scoreboard,
        base_reward: u64,
    ) -> Dispatcher<'a> {
        Dispatcher {
            carrying,
            pipeline,
            customers,
            scoreboard,
            base_reward,
        }
    }

    pub fn interact(&mut self, zone: Option<Zone>) -> EventCode {
        let event = match zone {
            Some(Zone::IngredientBin(ingredient)) => self.pick_up(ingredient),
            Some(Zone::Station(Lane::Prep)) => self.use_prep(),
            Some(Zone::Station(Lane::Cook)) => self.use_cook(),
            Some(Zone::Station(Lane::Serve)) => self.use_serve(),
            None => EventCode::NothingToDo,
        };
        debug!("[DISPATCHER] Interaction at {:?}: {:?}", zone, event);
        event
    }

    fn pick_up(&mut self, ingredient: Ingredient) -> EventCode {
        if self.carrying.is_some() {
            return EventCode::AlreadyCarrying;
        }
        *self.carrying = Some(ingredient);
        EventCode::PickedUp(ingredient)
    }

    fn use_prep(&mut self) -> EventCode {
        if let Some(ingredient) = *self.carrying {
            return match self.pipeline.add_ingredient(Lane::Prep, ingredient) {
                Ok(()) => {
                    *self.carrying = None;
                    EventCode::Deposited(ingredient)
                }
                Err(event) => event,
            };
        }
        if self.pipeline.station(Lane::Prep).is_empty() {
            return EventCode::NothingToDo;
        }
        match self.pipeline.promote(Lane::Prep, Lane::Cook) {
            Ok(()) => EventCode::Promoted {
                from: Lane::Prep,
                to: Lane::Cook,
            },
            Err(event) => event,
        }
    }

    fn use_cook(&mut self) -> EventCode {
        let cook = self.pipeline.station(Lane::Cook);
        if cook.is_empty() {
            return EventCode::NothingToDo;
        }
        match cook.cook_state() {
            Some(CookState::Cooking { .. }) => EventCode::StillCooking,
            Some(CookState::Done) => EventCode::DestinationOccupied,
            _ => {
                if self.pipeline.start_cooking() {
                    EventCode::CookingStarted
                } else {
                    EventCode::NothingToDo
                }
            }
        }
    }

    fn use_serve(&mut self) -> EventCode {
        let dish = self.pipeline.station(Lane::Serve).contents();
        if dish.is_empty() {
            return EventCode::NothingToServe;
        }
        match self.customers.serve(dish, self.base_reward) {
            Ok(served) => {
                self.pipeline.clear_serve();
                self.scoreboard.record_served(served.reward);
                EventCode::CustomerServed {
                    id: served.customer.id,
                    reward: served.reward,
                }
            }
            Err(event) => event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        customer::{Customer, Slot},
        order::{Ingredient::*, Order},
        station::StationPhase,
    };

    struct Kitchen {
        carrying: Option<Ingredient>,
        pipeline: Pipeline,
        customers: CustomersQueue,
        scoreboard: Scoreboard,
    }

    impl Kitchen {
        fn new() -> Kitchen {
            Kitchen {
                carrying: None,
                pipeline: Pipeline::new(5, 2),
                customers: CustomersQueue::new(3),
                scoreboard: Scoreboard::default(),
            }
        }

        fn interact(&mut self, zone: Option<Zone>) -> EventCode {
            Dispatcher::new(
                &mut self.carrying,
                &mut self.pipeline,
                &mut self.customers,
                &mut self.scoreboard,
                100,
            )
            .interact(zone)
        }

        fn deposit(&mut self, ingredient: Ingredient) {
            self.interact(Some(Zone::IngredientBin(ingredient)));
            self.interact(Some(Zone::Station(Lane::Prep)));
        }
    }

    const PREP: Option<Zone> = Some(Zone::Station(Lane::Prep));
    const COOK: Option<Zone> = Some(Zone::Station(Lane::Cook));
    const SERVE: Option<Zone> = Some(Zone::Station(Lane::Serve));

    #[test]
    fn should_pick_up_an_ingredient_with_empty_hands() {
        let mut kitchen = Kitchen::new();
        assert_eq!(EventCode::PickedUp(Beef), kitchen.interact(Some(Zone::IngredientBin(Beef))));
        assert_eq!(Some(Beef), kitchen.carrying);
    }

    #[test]
    fn should_not_pick_up_a_second_ingredient() {
        let mut kitchen = Kitchen::new();
        kitchen.interact(Some(Zone::IngredientBin(Beef)));
        assert_eq!(EventCode::AlreadyCarrying, kitchen.interact(Some(Zone::IngredientBin(Pork))));
        assert_eq!(Some(Beef), kitchen.carrying);
    }

    #[test]
    fn should_deposit_into_prep_and_free_the_hands() {
        let mut kitchen = Kitchen::new();
        kitchen.interact(Some(Zone::IngredientBin(Beef)));
        assert_eq!(EventCode::Deposited(Beef), kitchen.interact(PREP));
        assert_eq!(None, kitchen.carrying);
        assert_eq!(vec![Beef], kitchen.pipeline.station(Lane::Prep).contents().to_vec());
    }

    #[test]
    fn should_keep_the_ingredient_when_prep_is_full() {
        let mut kitchen = Kitchen::new();
        for ingredient in [Noodles, Broth, Beef, Herbs, Lime] {
            kitchen.deposit(ingredient);
        }
        kitchen.interact(Some(Zone::IngredientBin(Pork)));
        assert_eq!(EventCode::StationFull, kitchen.interact(PREP));
        assert_eq!(Some(Pork), kitchen.carrying);
        assert_eq!(5, kitchen.pipeline.station(Lane::Prep).contents().len());
    }

    #[test]
    fn should_promote_prep_to_cook_with_empty_hands() {
        let mut kitchen = Kitchen::new();
        kitchen.deposit(Noodles);
        assert_eq!(
            EventCode::Promoted {
                from: Lane::Prep,
                to: Lane::Cook
            },
            kitchen.interact(PREP)
        );
        assert_eq!(StationPhase::Loaded, kitchen.pipeline.station(Lane::Cook).phase());
    }

    #[test]
    fn should_report_the_cook_station_as_occupied() {
        let mut kitchen = Kitchen::new();
        kitchen.deposit(Noodles);
        kitchen.interact(PREP);
        kitchen.deposit(Beef);
        assert_eq!(EventCode::DestinationOccupied, kitchen.interact(PREP));
        assert_eq!(vec![Beef], kitchen.pipeline.station(Lane::Prep).contents().to_vec());
    }

    #[test]
    fn should_start_cooking_once() {
        let mut kitchen = Kitchen::new();
        kitchen.deposit(Noodles);
        kitchen.interact(PREP);
        assert_eq!(EventCode::CookingStarted, kitchen.interact(COOK));
        assert_eq!(EventCode::StillCooking, kitchen.interact(COOK));
        assert_eq!(StationPhase::Cooking, kitchen.pipeline.station(Lane::Cook).phase());
    }

    #[test]
    fn should_do_nothing_at_an_empty_station() {
        let mut kitchen = Kitchen::new();
        assert_eq!(EventCode::NothingToDo, kitchen.interact(PREP));
        assert_eq!(EventCode::NothingToDo, kitchen.interact(COOK));
        assert_eq!(EventCode::NothingToServe, kitchen.interact(SERVE));
        assert_eq!(EventCode::NothingToDo, kitchen.interact(None));
    }

    #[test]
    fn should_serve_the_dish_to_the_matching_customer() {
        let mut kitchen = Kitchen::new();
        kitchen
            .customers
            .push(Customer::new(1, "Mai", Order::new("Phở", vec![Noodles, Broth, Beef]), Slot::Top, 100.0))
            .unwrap();
        for ingredient in [Beef, Noodles, Broth] {
            kitchen.deposit(ingredient);
        }
        kitchen.interact(PREP);
        kitchen.interact(COOK);
        kitchen.pipeline.advance_tick();
        kitchen.pipeline.advance_tick();

        assert_eq!(EventCode::CustomerServed { id: 1, reward: 200 }, kitchen.interact(SERVE));
        assert_eq!(true, kitchen.customers.is_empty());
        assert_eq!(true, kitchen.pipeline.station(Lane::Serve).is_empty());
        assert_eq!(200, kitchen.scoreboard.score);
        assert_eq!(1, kitchen.scoreboard.orders_completed);
    }

    #[test]
    fn should_keep_the_dish_when_nobody_ordered_it() {
        let mut kitchen = Kitchen::new();
        kitchen
            .customers
            .push(Customer::new(1, "Mai", Order::new("Phở", vec![Noodles, Broth, Beef]), Slot::Top, 100.0))
            .unwrap();
        kitchen.pipeline.add_ingredient(Lane::Serve, Noodles).unwrap();

        assert_eq!(EventCode::NoMatchingOrder, kitchen.interact(SERVE));
        assert_eq!(vec![Noodles], kitchen.pipeline.station(Lane::Serve).contents().to_vec());
        assert_eq!(1, kitchen.customers.len());
        assert_eq!(0, kitchen.scoreboard.score);
    }
}
