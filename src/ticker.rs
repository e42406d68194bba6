use std::cell::Cell;

use gloo::timers::callback::Interval;
use tokeidai_core::{Cancel, TimerSlot};

pub(crate) const TICK_PERIOD_MS: u32 = 1000;

thread_local! {
    static ACTIVE_TICKERS: Cell<usize> = Cell::new(0);
}

struct TrackedInterval(Interval);

impl TrackedInterval {
    fn start<F>(period_ms: u32, on_tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        ACTIVE_TICKERS.with(|count| count.set(count.get() + 1));
        Self(Interval::new(period_ms, on_tick))
    }
}

impl Cancel for TrackedInterval {
    fn cancel(self) {
        let _ = self.0.cancel();
        ACTIVE_TICKERS.with(|count| count.set(count.get().saturating_sub(1)));
    }
}

/// Periodic callback owned by one mounted clock. Dropping the ticker cancels
/// the interval.
pub(crate) struct ClockTicker {
    slot: TimerSlot<TrackedInterval>,
}

impl ClockTicker {
    pub(crate) fn new() -> Self {
        Self {
            slot: TimerSlot::new(),
        }
    }

    pub(crate) fn start<F>(&mut self, period_ms: u32, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.slot.acquire(TrackedInterval::start(period_ms, on_tick));
    }

    pub(crate) fn stop(&mut self) -> bool {
        self.slot.release()
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.slot.is_active()
    }
}

#[cfg(test)]
pub(crate) fn active_tickers() -> usize {
    ACTIVE_TICKERS.with(|count| count.get())
}
