//! Employee roster analytics: the filtering, ranking and grouped-mean logic behind the
//! employee dashboard, plus the configuration, telemetry and error types shared by the
//! CLI and HTTP front ends.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workforce;
