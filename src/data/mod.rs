//! Configuration data
//!
//! Curve, tiers, draw mode and prize pools, loaded from RON/JSON files with
//! built-in defaults.

pub mod loader;
pub mod pools;

pub use loader::{GameConfig, export_default_config, DEFAULT_CONFIG_PATH};
pub use pools::default_pools;
