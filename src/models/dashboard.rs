use std::rc::Rc;
use yew::Reducible;

use super::energy::{EnergyProduction, EnergyReading};
use crate::config::Config;

const RECOMMENDATIONS: [&str; 5] = [
    "Reduce nighttime consumption",
    "Optimize solar panel angle",
    "Improve battery storage efficiency",
    "Increase wind turbine maintenance intervals",
    "Use AI to predict peak demand",
];

/// How the sensors are being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorMode {
    #[default]
    Auto,
    Manual,
}

impl SensorMode {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Manual => "Manual",
        }
    }
}

/// Everything that can change the dashboard after it is mounted
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Replace production and consumption with a fresh sample
    Telemetry(EnergyReading),
    RaiseMaintenanceAlert,
    SellToGrid,
    StoreInBatteries,
}

/// All values displayed by the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub co2_savings: u8,
    pub maintenance_alert: bool,
    pub surplus_energy: f64,
    pub recommendations: Vec<String>,
    pub energy_production: EnergyProduction,
    pub energy_consumption: u32,
    pub sensor_mode: SensorMode,
    pub popup_message: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            co2_savings: Config::INITIAL_CO2_SAVINGS,
            maintenance_alert: false,
            surplus_energy: Config::INITIAL_SURPLUS_KWH,
            recommendations: RECOMMENDATIONS.iter().map(ToString::to_string).collect(),
            energy_production: EnergyProduction::default(),
            energy_consumption: Config::INITIAL_CONSUMPTION_KW,
            sensor_mode: SensorMode::Auto,
            popup_message: None,
        }
    }
}

impl DashboardState {
    /// Applies a single action in place
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Telemetry(reading) => {
                self.energy_production = reading.production;
                self.energy_consumption = reading.consumption;
            }
            // Once raised, the alert stays raised
            DashboardAction::RaiseMaintenanceAlert => self.maintenance_alert = true,
            DashboardAction::SellToGrid => self.sell_to_grid(),
            DashboardAction::StoreInBatteries => self.store_in_batteries(),
        }
    }

    /// Sells the whole surplus at the grid price and zeroes it
    pub fn sell_to_grid(&mut self) {
        let earnings = self.surplus_energy * Config::GRID_PRICE_PER_KWH;
        self.popup_message = Some(format!(
            "You saved €{earnings} by selling surplus energy!"
        ));
        self.surplus_energy = 0.0;
    }

    /// Moves the whole surplus into storage and zeroes it
    pub fn store_in_batteries(&mut self) {
        self.popup_message = Some(format!(
            "You stored {} kWh in the batteries!",
            self.surplus_energy
        ));
        self.surplus_energy = 0.0;
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
