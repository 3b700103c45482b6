//! Tick scheduling for the widget window.
//!
//! Every tick redraws the clock line. Whether the month bars are recomputed
//! on a tick depends on the configured [`ProgressRefresh`] policy.

use crate::models::settings::ProgressRefresh;
use chrono::NaiveDate;

/// What a single tick asks the window to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawRequest {
    pub clock: bool,
    pub month_bars: bool,
}

#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    policy: ProgressRefresh,
    last_date: NaiveDate,
}

impl RefreshScheduler {
    /// `started_on` is the date the month bars were first computed for.
    pub fn new(policy: ProgressRefresh, started_on: NaiveDate) -> Self {
        Self {
            policy,
            last_date: started_on,
        }
    }

    /// Date the bars were last computed for.
    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    /// Decide what the tick observed at `today` should redraw.
    pub fn on_tick(&mut self, today: NaiveDate) -> RedrawRequest {
        let date_changed = today != self.last_date;

        let month_bars = match self.policy {
            ProgressRefresh::EveryTick => true,
            ProgressRefresh::OnDateChange => date_changed,
            ProgressRefresh::OnceAtLaunch => false,
        };

        if month_bars {
            if date_changed {
                log::debug!("Date advanced from {} to {}", self.last_date, today);
            }
            self.last_date = today;
        }

        RedrawRequest {
            clock: true,
            month_bars,
        }
    }
}
