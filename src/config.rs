/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Interval between simulated telemetry refreshes in milliseconds
    pub const REFRESH_INTERVAL_MS: u32 = 5_000;

    /// Delay before the simulated maintenance fault is raised
    pub const MAINTENANCE_ALERT_DELAY_MS: u32 = 5_000;

    /// Lower bound (inclusive) of simulated total consumption in kW
    pub const CONSUMPTION_MIN_KW: u32 = 200;

    /// Upper bound (exclusive) of simulated total consumption in kW
    pub const CONSUMPTION_MAX_KW: u32 = 800;

    /// Price paid per kWh sold back to the grid (EUR)
    pub const GRID_PRICE_PER_KWH: f64 = 5.0;

    pub const INITIAL_CO2_SAVINGS: u8 = 50;
    pub const INITIAL_SURPLUS_KWH: f64 = 10.0;
    pub const INITIAL_CONSUMPTION_KW: u32 = 450;
}
