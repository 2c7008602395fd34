//! Reloj de paso fijo. Convierte el tiempo real de cada frame en una cantidad entera de ticks,
//! asi la simulacion avanza igual sin importar como se dibuje.
use std::time::Duration;

use log::warn;

pub struct SimulationClock {
    tick_duration: Duration,
    accumulator: Duration,
    max_catch_up_ticks: u32,
}

impl SimulationClock {
    pub fn new(ticks_per_second: u32, max_catch_up_ticks: u32) -> SimulationClock {
        SimulationClock {
            tick_duration: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            max_catch_up_ticks: max_catch_up_ticks.max(1),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Suma el tiempo del frame y devuelve cuantos ticks hay que correr.
    /// Si se acumulo mas de `max_catch_up_ticks`, el resto se descarta.
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.accumulator += frame_time;
        let mut ticks = 0;
        while self.accumulator >= self.tick_duration {
            if ticks == self.max_catch_up_ticks {
                warn!(
                    "[CLOCK] Dropping {:?} of simulation time after a slow frame",
                    self.accumulator
                );
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_tick_before_a_full_tick_elapses() {
        let mut clock = SimulationClock::new(60, 5);
        assert_eq!(0, clock.advance(Duration::from_millis(10)));
        assert_eq!(1, clock.advance(Duration::from_millis(10)));
    }

    #[test]
    fn should_keep_the_leftover_time_between_frames() {
        let mut clock = SimulationClock::new(100, 5);
        assert_eq!(1, clock.advance(Duration::from_millis(15)));
        assert_eq!(2, clock.advance(Duration::from_millis(15)));
    }

    #[test]
    fn should_cap_the_ticks_after_a_long_frame() {
        let mut clock = SimulationClock::new(60, 5);
        assert_eq!(5, clock.advance(Duration::from_secs(2)));
        assert_eq!(0, clock.advance(Duration::from_millis(1)));
    }
}
