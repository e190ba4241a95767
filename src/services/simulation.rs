use yew::Callback;

use super::scheduler::{Scheduler, TaskHandle};
use super::telemetry::{RandomSource, generate_reading};
use crate::config::Config;
use crate::models::dashboard::DashboardAction;

/// The timers that keep a mounted dashboard "live".
///
/// Holds the repeating telemetry refresh and the one-shot maintenance alert.
/// Both are cancelled when the `Simulation` is stopped or dropped, so nothing
/// is dispatched after the dashboard unmounts.
pub struct Simulation {
    refresh: TaskHandle,
    maintenance_alert: TaskHandle,
}

impl Simulation {
    /// Starts both timers on `scheduler`, sending their updates through `dispatch`
    pub fn start<S, R>(scheduler: &S, mut random: R, dispatch: Callback<DashboardAction>) -> Self
    where
        S: Scheduler + ?Sized,
        R: RandomSource + 'static,
    {
        let refresh = {
            let dispatch = dispatch.clone();
            scheduler.every(
                Config::REFRESH_INTERVAL_MS,
                Box::new(move || {
                    dispatch.emit(DashboardAction::Telemetry(generate_reading(&mut random)));
                }),
            )
        };

        let maintenance_alert = scheduler.after(
            Config::MAINTENANCE_ALERT_DELAY_MS,
            Box::new(move || dispatch.emit(DashboardAction::RaiseMaintenanceAlert)),
        );

        Self {
            refresh,
            maintenance_alert,
        }
    }

    pub fn is_running(&self) -> bool {
        self.refresh.is_active()
    }

    /// Cancels both timers
    pub fn stop(self) {
        self.refresh.cancel();
        self.maintenance_alert.cancel();
    }
}
