//! Body-composition and goal-projection engine.
//!
//! Pure functions over measurements and goals: muscle-mass derivation, Navy
//! circumference inversion, weekly-rate risk tiers, and actual-vs-required
//! chart series.

pub mod core;
pub mod dataset;
pub mod error;
pub mod models;
pub mod output;
