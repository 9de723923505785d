pub mod amf;
pub mod config;
pub mod telemetry;
