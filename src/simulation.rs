//! Estado completo de la partida y el avance de un tick.
//! Hay un unico dueño del estado: el que llama a `tick`. La interfaz solo lee `snapshot`.
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config_reader::KitchenConfig,
    customers_queue::CustomersQueue,
    dispatcher::Dispatcher,
    events::EventCode,
    layout::{Direction, Layout, Player},
    pipeline::Pipeline,
    snapshot::{BinSnapshot, CustomerSnapshot, Snapshot, StationsSnapshot},
    spawner::Spawner,
    station::Lane,
    statistics::Scoreboard,
};

/// Entrada del jugador para un tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub movement: Option<Direction>,
    pub interact: bool,
}

impl TickInput {
    pub fn interact() -> TickInput {
        TickInput {
            movement: None,
            interact: true,
        }
    }

    pub fn moving(direction: Direction) -> TickInput {
        TickInput {
            movement: Some(direction),
            interact: false,
        }
    }
}

pub struct SimulationState<R: Rng = StdRng> {
    tick: u64,
    layout: Layout,
    player: Player,
    pipeline: Pipeline,
    customers: CustomersQueue,
    spawner: Spawner<R>,
    scoreboard: Scoreboard,
    patience_decay_rate: f64,
    base_reward: u64,
    last_event: Option<EventCode>,
}

impl SimulationState<StdRng> {
    /// Usa la semilla de la configuracion, o una al azar si no tiene
    pub fn from_config(config: &KitchenConfig) -> SimulationState<StdRng> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SimulationState::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationState<R> {
    pub fn with_rng(config: &KitchenConfig, rng: R) -> SimulationState<R> {
        let layout = Layout::standard(&config.recipes.ingredients_in_use());
        let player = Player::new(
            layout.bounds.width / 2.0,
            layout.bounds.height / 2.0,
        );
        SimulationState {
            tick: 0,
            layout,
            player,
            pipeline: Pipeline::new(config.station_capacity, config.cook_duration_ticks),
            customers: CustomersQueue::new(config.max_customers),
            spawner: Spawner::new(
                rng,
                config.recipes.clone(),
                config.spawn_cooldown_ticks,
                config.max_order_ingredients,
                config.max_patience,
            ),
            scoreboard: Scoreboard::default(),
            patience_decay_rate: config.patience_decay_rate,
            base_reward: config.base_reward,
            last_event: None,
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn customers(&self) -> &CustomersQueue {
        &self.customers
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Avanza la simulacion un tick: movimiento, interaccion, coccion, paciencia y llegada de clientes.
    pub fn tick(&mut self, input: &TickInput) -> Vec<EventCode> {
        let mut events = Vec::new();

        if let Some(direction) = input.movement {
            self.player.step(direction, &self.layout.bounds);
        }

        if input.interact {
            let zone = self.layout.zone_near(&self.player.position);
            let event = Dispatcher::new(
                &mut self.player.carrying,
                &mut self.pipeline,
                &mut self.customers,
                &mut self.scoreboard,
                self.base_reward,
            )
            .interact(zone);
            events.push(event);
        }

        events.extend(self.pipeline.advance_tick());

        for customer in self.customers.decay(self.patience_decay_rate) {
            self.scoreboard.record_lost();
            events.push(EventCode::CustomerLeft {
                id: customer.id,
                slot: customer.slot,
            });
        }

        if let Some(event) = self.spawner.tick(&mut self.customers) {
            events.push(event);
        }

        self.tick += 1;
        if let Some(event) = events.last() {
            self.last_event = Some(event.clone());
        }
        if !events.is_empty() {
            debug!("[SIMULATION] Tick {}: {:?}", self.tick, events);
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            player_carry: self.player.carrying,
            player_position: self.player.position,
            stations: StationsSnapshot {
                prep: self.pipeline.station(Lane::Prep).into(),
                cook: self.pipeline.station(Lane::Cook).into(),
                serve: self.pipeline.station(Lane::Serve).into(),
            },
            bins: self
                .layout
                .bins()
                .iter()
                .map(|(ingredient, area)| BinSnapshot {
                    ingredient: *ingredient,
                    area: *area,
                })
                .collect(),
            customers: self.customers.iter().map(CustomerSnapshot::from).collect(),
            score: self.scoreboard.score,
            orders_completed: self.scoreboard.orders_completed,
            customers_lost: self.scoreboard.customers_lost,
            last_event: self.last_event.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn place_player(&mut self, x: f32, y: f32) {
        self.player.position.x = x;
        self.player.position.y = y;
    }
}
