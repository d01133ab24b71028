//! Application state for the route planner
//!
//! This crate provides the process-wide session that screens share,
//! app configuration, cancellable fixed-delay timers, and the simulated
//! authentication used by the login and register screens.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod session;
pub mod timers;

pub use auth::{AuthOutcome, AuthProvider, AuthRequest, SimulatedAuth};
pub use config::{AppConfig, ConfigError, TimingConfig};
pub use session::{AppSession, SessionError};
pub use timers::DelayedAction;
