pub mod scheduler;
pub mod simulation;
pub mod telemetry;
