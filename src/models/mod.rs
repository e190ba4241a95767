pub mod dashboard;
pub mod energy;
pub mod error;
pub mod trend;
