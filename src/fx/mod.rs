//! The authorization engine and its host-facing collaborators
//!
//! - [`Fx`]: `verify_transfer` / `verify_operation` entry points
//! - [`FxState`]: created → initialized → bootstrapping → bootstrapped
//! - [`Environment`], [`Clock`], [`UnsignedTx`]: what the host provides
//! - [`FxConfig`]: engine configuration

pub mod config;
pub mod engine;
pub mod env;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::{ConfigError, FxConfig};
pub use engine::Fx;
pub use env::{Clock, Environment, ManualClock, StaticEnvironment, SystemClock, UnsignedTx};
pub use state::FxState;
