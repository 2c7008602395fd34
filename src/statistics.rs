use log::info;

use crate::snapshot::Snapshot;

/// Puntaje de la partida
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u64,
    pub orders_completed: u64,
    pub customers_lost: u64,
}

impl Scoreboard {
    pub fn record_served(&mut self, reward: u64) {
        self.score += reward;
        self.orders_completed += 1;
    }

    pub fn record_lost(&mut self) {
        self.customers_lost += 1;
    }
}

/// Loguea las estadisticas de la partida cada `interval_ticks` ticks
pub struct StatisticsPrinter {
    interval_ticks: u64,
}

impl StatisticsPrinter {
    pub fn new(interval_ticks: u64) -> StatisticsPrinter {
        StatisticsPrinter {
            interval_ticks: interval_ticks.max(1),
        }
    }

    pub fn process_statistics(&self, snapshot: &Snapshot) {
        if snapshot.tick % self.interval_ticks == 0 {
            self.print_statistics(snapshot);
        }
    }

    pub fn print_statistics(&self, snapshot: &Snapshot) {
        info!("{}", self.format_statistics(snapshot));
    }

    fn format_statistics(&self, snapshot: &Snapshot) -> String {
        let mut statistics = format!(
            "[STATISTICS] Tick={} | Score={} | Orders completed={} | Customers lost={} | Customer=(slot, dish, patience) |",
            snapshot.tick, snapshot.score, snapshot.orders_completed, snapshot.customers_lost
        );
        self.add_customers_to_statistics_string(snapshot, &mut statistics);
        statistics
    }

    fn add_customers_to_statistics_string(&self, snapshot: &Snapshot, statistics: &mut String) {
        for customer in snapshot.customers.iter() {
            statistics.push_str(&format!(
                " {}=({:?}, {}, {:.0}%) ",
                customer.name,
                customer.slot,
                customer.dish,
                customer.patience_fraction * 100.0
            ));
        }
    }
}
