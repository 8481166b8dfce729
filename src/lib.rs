//! Timed Kalah agent
//!
//! Wraps the [`kalah_engine`] iterative-deepening driver in a wall-clock
//! budget and provides the configuration the `kalah-agent` binary runs
//! with.

pub mod agent;
pub mod config;

pub use agent::{Agent, Report};
pub use config::{AgentConfig, ConfigError};
