//! Shared one-second countdown driving every rendered row.
//!
//! Exactly one timer task exists at a time. It is tagged with the table load
//! it was started for and stops on its own once the table has been replaced,
//! so a timer can never tick rows it did not start with.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::table::IncidentTable;

/// Interval between countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

struct CountdownTask {
    load: u64,
    handle: JoinHandle<()>,
}

/// Owner of the cancellable countdown task
pub struct CountdownEngine {
    table: Arc<Mutex<IncidentTable>>,
    period: Duration,
    task: Option<CountdownTask>,
    ticks: Arc<watch::Sender<u64>>,
}

impl CountdownEngine {
    pub fn new(table: Arc<Mutex<IncidentTable>>) -> Self {
        Self::with_period(table, TICK_PERIOD)
    }

    pub fn with_period(table: Arc<Mutex<IncidentTable>>, period: Duration) -> Self {
        let (ticks, _) = watch::channel(0);
        Self {
            table,
            period,
            task: None,
            ticks: Arc::new(ticks),
        }
    }

    /// Receiver bumped after every applied tick
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.ticks.subscribe()
    }

    /// Cancel the running timer, then start a new one for `load`.
    ///
    /// The first decrement happens one full period after the restart.
    /// Must be called from within a tokio runtime.
    pub fn restart(&mut self, load: u64) {
        self.cancel();

        let table = Arc::clone(&self.table);
        let ticks = Arc::clone(&self.ticks);
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                {
                    let mut table = table.lock();
                    if table.load() != load {
                        tracing::debug!(load, current = table.load(), "countdown outlived its rows");
                        break;
                    }
                    table.tick();
                }
                ticks.send_modify(|n| *n = n.wrapping_add(1));
            }
        });

        tracing::trace!(load, "countdown started");
        self.task = Some(CountdownTask { load, handle });
    }

    /// Stop the running timer, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.handle.abort();
            tracing::trace!(load = task.load, "countdown cancelled");
        }
    }

    /// Load the live timer serves, if one is running
    pub fn running_load(&self) -> Option<u64> {
        self.task
            .as_ref()
            .filter(|t| !t.handle.is_finished())
            .map(|t| t.load)
    }

    pub fn is_running(&self) -> bool {
        self.running_load().is_some()
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ticket;

    fn table_with_hours(hours_left: f64) -> Arc<Mutex<IncidentTable>> {
        let mut table = IncidentTable::new();
        table.replace(&[Ticket {
            id: "INC-001".to_string(),
            hours_left,
            ..Default::default()
        }]);
        Arc::new(Mutex::new(table))
    }

    fn remaining(table: &Arc<Mutex<IncidentTable>>) -> i64 {
        table.lock().row_at(0).unwrap().remaining_seconds()
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let table = table_with_hours(1.0);
        let mut engine = CountdownEngine::new(Arc::clone(&table));
        let load = table.lock().load();
        engine.restart(load);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(remaining(&table), 3600);

        time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(remaining(&table), 3597);
        assert_eq!(engine.running_load(), Some(load));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_does_not_skip_or_double_decrement() {
        let table = table_with_hours(0.0);
        let mut engine = CountdownEngine::new(Arc::clone(&table));
        let load = table.lock().load();
        engine.restart(load);

        time::sleep(Duration::from_millis(500)).await;
        engine.restart(load);

        // The cancelled timer would have fired at 1000ms
        time::sleep(Duration::from_millis(600)).await;
        assert_eq!(remaining(&table), 0);

        // The replacement fires at 1500ms
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(remaining(&table), -1);

        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(remaining(&table), -3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_stops_after_replace() {
        let table = table_with_hours(1.0);
        let mut engine = CountdownEngine::new(Arc::clone(&table));
        let load = table.lock().load();
        engine.restart(load);

        table.lock().replace(&[Ticket {
            id: "INC-002".to_string(),
            hours_left: 2.0,
            ..Default::default()
        }]);

        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(remaining(&table), 7200);
        assert!(!engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticking_and_notifies_nothing() {
        let table = table_with_hours(1.0);
        let mut engine = CountdownEngine::new(Arc::clone(&table));
        let rx = engine.subscribe();
        let load = table.lock().load();

        engine.restart(load);
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(*rx.borrow(), 1);

        engine.cancel();
        time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(remaining(&table), 3599);
        assert_eq!(*rx.borrow(), 1);
        assert!(!engine.is_running());
    }
}
