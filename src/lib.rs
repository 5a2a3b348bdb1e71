//! Minitools Library
//!
//! This library provides the core of the Minitools collection: a unit
//! conversion engine, HEX/RGB/HSL color transforms and schemes, calendar-aware
//! age arithmetic, and persisted favorites, history and saved colors.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod store;
