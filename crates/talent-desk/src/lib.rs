pub mod config;
pub mod error;
pub mod filter;
pub mod telemetry;
pub mod tracking;
