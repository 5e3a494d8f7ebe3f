//! Library exports for the rasterboard drawing engine.
//!
//! Exposes the raster surface, snapshot history, and input state machine so
//! that hosts (a windowed front end, the headless script runner, tests) can
//! drive the same engine and share configuration handling.

pub mod config;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod script;

pub use config::Config;
