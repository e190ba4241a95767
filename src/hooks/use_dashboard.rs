use yew::prelude::*;

use crate::models::dashboard::{DashboardAction, DashboardState};
use crate::services::scheduler::BrowserScheduler;
use crate::services::simulation::Simulation;

/// Handle returned by `use_dashboard` hook
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub sell_to_grid: Callback<()>,
    pub store_in_batteries: Callback<()>,
}

/// Owns the dashboard state and runs the telemetry simulation while mounted
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer(DashboardState::default);

    // Effect: start timers on mount, cancel them on unmount
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let dispatch = Callback::from(move |action| dispatcher.dispatch(action));
            let simulation = Simulation::start(&BrowserScheduler, fastrand::Rng::new(), dispatch);
            gloo::console::log!("Telemetry simulation started");

            move || {
                simulation.stop();
                gloo::console::log!("Telemetry simulation stopped");
            }
        });
    }

    let sell_to_grid = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(DashboardAction::SellToGrid))
    };

    let store_in_batteries = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(DashboardAction::StoreInBatteries))
    };

    DashboardHandle {
        state,
        sell_to_grid,
        store_in_batteries,
    }
}
