pub mod card;
pub mod chart;
pub mod co2_savings;
pub mod live_stats;
pub mod maintenance_alert;
pub mod recommendations;
pub mod settings_panel;
pub mod surplus_panel;

pub use card::Card;
pub use chart::TrendChart;
pub use co2_savings::Co2Savings;
pub use live_stats::LiveStats;
pub use maintenance_alert::MaintenanceAlert;
pub use recommendations::Recommendations;
pub use settings_panel::SettingsPanel;
pub use surplus_panel::SurplusPanel;
