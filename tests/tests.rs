#[cfg(test)]
mod tests {
    use renewable_dashboard::config::Config;
    use renewable_dashboard::models::{
        dashboard::{DashboardAction, DashboardState},
        energy::{EnergyProduction, EnergyReading, EnergySource},
        error::AppError,
        trend::{TrendPoint, TrendSeries},
    };
    use renewable_dashboard::services::{
        scheduler::{ManualScheduler, Scheduler},
        simulation::Simulation,
        telemetry::{RandomSource, generate_reading},
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;

    /// Replays a fixed list of unit values, cycling when exhausted
    struct ScriptedRandom {
        values: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedRandom {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn unit(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    // Helper: a mounted dashboard driven by a simulated clock
    fn mount<R: RandomSource + 'static>(
        random: R,
    ) -> (ManualScheduler, Rc<RefCell<DashboardState>>, Simulation) {
        let scheduler = ManualScheduler::new();
        let state = Rc::new(RefCell::new(DashboardState::default()));

        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: DashboardAction| state.borrow_mut().apply(action))
        };

        let simulation = Simulation::start(&scheduler, random, dispatch);
        (scheduler, state, simulation)
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    #[test]
    fn test_app_error_render_display() {
        let error = AppError::RenderError("no canvas".to_string());
        assert_eq!(error.to_string(), "Render error: no canvas");
    }

    // ===== Surplus Disposal Tests =====

    #[test]
    fn test_sell_to_grid_reports_earnings() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SellToGrid);

        assert_eq!(
            state.popup_message.as_deref(),
            Some("You saved €50 by selling surplus energy!")
        );
        assert_eq!(state.surplus_energy, 0.0);
    }

    #[test]
    fn test_store_in_batteries_reports_stored_energy() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::StoreInBatteries);

        assert_eq!(
            state.popup_message.as_deref(),
            Some("You stored 10 kWh in the batteries!")
        );
        assert_eq!(state.surplus_energy, 0.0);
    }

    #[test]
    fn test_second_sale_reports_zero() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SellToGrid);
        state.apply(DashboardAction::SellToGrid);

        assert_eq!(
            state.popup_message.as_deref(),
            Some("You saved €0 by selling surplus energy!")
        );
        assert_eq!(state.surplus_energy, 0.0);
    }

    #[test]
    fn test_store_after_sale_reports_zero() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SellToGrid);
        state.apply(DashboardAction::StoreInBatteries);

        assert_eq!(
            state.popup_message.as_deref(),
            Some("You stored 0 kWh in the batteries!")
        );
    }

    #[test]
    fn test_disposal_leaves_other_fields_alone() {
        let mut state = DashboardState::default();
        let before = state.clone();
        state.apply(DashboardAction::StoreInBatteries);

        assert_eq!(state.co2_savings, before.co2_savings);
        assert_eq!(state.energy_production, before.energy_production);
        assert_eq!(state.energy_consumption, before.energy_consumption);
        assert_eq!(state.recommendations, before.recommendations);
        assert!(!state.maintenance_alert);
    }

    // ===== Telemetry Tests =====

    #[test]
    fn test_reading_lower_bounds() {
        let reading = generate_reading(&mut ScriptedRandom::new(&[0.0]));

        assert_eq!(reading.production, EnergyProduction::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(reading.consumption, Config::CONSUMPTION_MIN_KW);
    }

    #[test]
    fn test_reading_upper_bounds_stay_exclusive() {
        let reading = generate_reading(&mut ScriptedRandom::new(&[0.999_999]));

        for (source, kw) in reading.production.iter() {
            assert!(kw < source.max_output(), "{source:?} reached {kw}");
            assert!(kw > source.max_output() - 0.01);
        }
        assert_eq!(reading.consumption, 799);
    }

    #[test]
    fn test_reading_draw_order() {
        let reading = generate_reading(&mut ScriptedRandom::new(&[0.5, 0.25, 0.125, 0.375, 0.75]));

        assert_eq!(reading.production.get(EnergySource::Solar), 150.0);
        assert_eq!(reading.production.get(EnergySource::Wind), 50.0);
        assert_eq!(reading.production.get(EnergySource::Hydro), 18.75);
        assert_eq!(reading.production.get(EnergySource::Biomass), 37.5);
        assert_eq!(reading.consumption, 650);
    }

    #[test]
    fn test_telemetry_replaces_production_wholesale() {
        let mut state = DashboardState::default();
        let reading = EnergyReading {
            production: EnergyProduction::new(1.0, 2.0, 3.0, 4.0),
            consumption: 321,
        };
        state.apply(DashboardAction::Telemetry(reading.clone()));

        assert_eq!(state.energy_production, reading.production);
        assert_eq!(state.energy_consumption, 321);
        assert_eq!(state.surplus_energy, Config::INITIAL_SURPLUS_KWH);
    }

    #[test]
    fn test_production_total() {
        let production = EnergyProduction::default();
        assert_eq!(production.total(), 500.0);
        assert_eq!(
            production.iter().map(|(s, _)| s).collect::<Vec<_>>(),
            EnergySource::all().to_vec()
        );
    }

    // ===== Simulation Tests =====

    #[test]
    fn test_nothing_changes_before_first_interval() {
        let (scheduler, state, _simulation) = mount(ScriptedRandom::new(&[0.0]));

        scheduler.advance(u64::from(Config::REFRESH_INTERVAL_MS) - 1);

        assert_eq!(*state.borrow(), DashboardState::default());
    }

    #[test]
    fn test_refresh_fires_every_interval() {
        let (scheduler, state, simulation) = mount(ScriptedRandom::new(&[0.0]));
        let interval = u64::from(Config::REFRESH_INTERVAL_MS);

        scheduler.advance(interval);
        assert_eq!(state.borrow().energy_consumption, 200);
        assert_eq!(state.borrow().energy_production.total(), 0.0);

        state.borrow_mut().energy_consumption = 0;
        scheduler.advance(interval);
        assert_eq!(state.borrow().energy_consumption, 200);
        assert!(simulation.is_running());
    }

    #[test]
    fn test_refresh_values_in_range_over_many_ticks() {
        let (scheduler, state, _simulation) = mount(fastrand::Rng::with_seed(42));
        let interval = u64::from(Config::REFRESH_INTERVAL_MS);

        for _ in 0..200 {
            scheduler.advance(interval);
            let state = state.borrow();
            for (source, kw) in state.energy_production.iter() {
                assert!((0.0..source.max_output()).contains(&kw));
            }
            assert!((200..800).contains(&state.energy_consumption));
        }
    }

    #[test]
    fn test_maintenance_alert_waits_for_delay() {
        let (scheduler, state, _simulation) = mount(ScriptedRandom::new(&[0.5]));
        let delay = u64::from(Config::MAINTENANCE_ALERT_DELAY_MS);

        scheduler.advance(delay - 1);
        assert!(!state.borrow().maintenance_alert);

        scheduler.advance(1);
        assert!(state.borrow().maintenance_alert);
    }

    #[test]
    fn test_maintenance_alert_fires_once() {
        let alerts = Rc::new(RefCell::new(0));
        let scheduler = ManualScheduler::new();

        let dispatch = {
            let alerts = alerts.clone();
            Callback::from(move |action: DashboardAction| {
                if action == DashboardAction::RaiseMaintenanceAlert {
                    *alerts.borrow_mut() += 1;
                }
            })
        };
        let _simulation = Simulation::start(&scheduler, ScriptedRandom::new(&[0.5]), dispatch);

        scheduler.advance(60_000);
        assert_eq!(*alerts.borrow(), 1);
        // Only the refresh timer is left
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_no_writes_after_teardown() {
        let (scheduler, state, simulation) = mount(ScriptedRandom::new(&[0.0]));

        scheduler.advance(1_000);
        simulation.stop();
        scheduler.advance(60_000);

        assert_eq!(*state.borrow(), DashboardState::default());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_like_stop() {
        let (scheduler, state, simulation) = mount(ScriptedRandom::new(&[0.0]));
        let interval = u64::from(Config::REFRESH_INTERVAL_MS);

        scheduler.advance(interval);
        let after_first_tick = state.borrow().clone();
        drop(simulation);
        state.borrow_mut().energy_consumption = 1;

        scheduler.advance(interval * 10);
        assert!(after_first_tick.maintenance_alert);
        assert_eq!(state.borrow().energy_consumption, 1);
    }

    #[test]
    fn test_remount_raises_alert_again() {
        let (scheduler, state, simulation) = mount(ScriptedRandom::new(&[0.0]));
        scheduler.advance(1_000);
        drop(simulation);

        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: DashboardAction| state.borrow_mut().apply(action))
        };
        *state.borrow_mut() = DashboardState::default();
        let _simulation = Simulation::start(&scheduler, ScriptedRandom::new(&[0.0]), dispatch);

        scheduler.advance(u64::from(Config::MAINTENANCE_ALERT_DELAY_MS));
        assert!(state.borrow().maintenance_alert);
    }

    #[test]
    fn test_user_actions_interleave_with_timers() {
        let (scheduler, state, _simulation) = mount(ScriptedRandom::new(&[0.0]));

        state.borrow_mut().apply(DashboardAction::StoreInBatteries);
        scheduler.advance(u64::from(Config::REFRESH_INTERVAL_MS));

        let state = state.borrow();
        assert_eq!(state.surplus_energy, 0.0);
        assert_eq!(
            state.popup_message.as_deref(),
            Some("You stored 10 kWh in the batteries!")
        );
        assert_eq!(state.energy_consumption, 200);
        assert!(state.maintenance_alert);
    }

    // ===== Trend Series Tests =====

    #[test]
    fn test_monthly_trend_series() {
        let (x_data, y_data) = TrendSeries::monthly_consumption().series_data().unwrap();

        assert_eq!(x_data, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(y_data, vec![400.0, 380.0, 360.0, 340.0]);
    }

    #[test]
    fn test_empty_trend_series_is_error() {
        let result = TrendSeries::new(Vec::<TrendPoint>::new()).series_data();
        assert!(matches!(result, Err(AppError::DataError(_))));
    }

    // ===== Scheduler Trait Tests =====

    #[test]
    fn test_scheduler_usable_as_trait_object() {
        let scheduler = ManualScheduler::new();
        let dynamic: &dyn Scheduler = &scheduler;
        let hits = Rc::new(RefCell::new(0));

        let counter = hits.clone();
        let _handle = dynamic.every(10, Box::new(move || *counter.borrow_mut() += 1));
        scheduler.advance(30);

        assert_eq!(*hits.borrow(), 3);
    }
}
