pub mod autopilot;
pub mod catalog;
pub mod clock;
pub mod config_reader;
pub mod constants;
pub mod customer;
pub mod customers_queue;
pub mod dispatcher;
pub mod errors;
pub mod events;
pub mod layout;
pub mod order;
pub mod pipeline;
pub mod simulation;
pub mod snapshot;
pub mod spawner;
pub mod station;
pub mod statistics;

use std::{env, thread, time::Instant};

use log::{debug, error, info, LevelFilter};
use simple_logger::SimpleLogger;

use crate::{
    autopilot::Autopilot,
    clock::SimulationClock,
    config_reader::{read_config_or_default, KitchenConfig},
    constants::{DEFAULT_CONFIG_PATH, DEFAULT_SESSION_SECONDS, STATISTICS_INTERVAL_TICKS},
    simulation::SimulationState,
    statistics::StatisticsPrinter,
};

/// Ticks que dura una sesion. Un pedido de segundos desmedido queda en el maximo en vez de desbordar.
fn session_ticks(seconds: u64, ticks_per_second: u32) -> u64 {
    seconds.saturating_mul(ticks_per_second as u64)
}

fn run_session(config: &KitchenConfig, seconds: u64) {
    let mut state = SimulationState::from_config(config);
    let mut clock = SimulationClock::new(config.ticks_per_second, config.max_catch_up_ticks);
    let statistics = StatisticsPrinter::new(STATISTICS_INTERVAL_TICKS);
    let autopilot = Autopilot::default();
    let total_ticks = session_ticks(seconds, config.ticks_per_second);

    info!("[KITCHEN] Opening for {} seconds ({} ticks)", seconds, total_ticks);
    let mut last_frame = Instant::now();
    while state.current_tick() < total_ticks {
        thread::sleep(clock.tick_duration());
        let now = Instant::now();
        let ticks = clock.advance(now - last_frame);
        last_frame = now;

        for _ in 0..ticks {
            let input = autopilot.next_input(&state);
            for event in state.tick(&input) {
                if event.is_failure() {
                    debug!("[KITCHEN] {}", event.message());
                } else {
                    info!("[KITCHEN] {}", event.message());
                }
            }
            statistics.process_statistics(&state.snapshot());
        }
    }

    let snapshot = state.snapshot();
    statistics.print_statistics(&snapshot);
    match snapshot.to_json() {
        Ok(json) => debug!("[KITCHEN] Final snapshot: {}", json),
        Err(error) => error!("[KITCHEN] Could not serialize the final snapshot: {}", error),
    }
}

fn main() {
    if let Err(error) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", error);
    }

    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
    let seconds = args
        .get(2)
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SESSION_SECONDS);

    match read_config_or_default(path) {
        Ok(config) => run_session(&config, seconds),
        Err(error) => error!("[KITCHEN] Could not load the kitchen configuration: {}", error),
    }
}
