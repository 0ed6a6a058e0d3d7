// src/engine/mod.rs
pub mod aggregate;
pub mod config;
pub mod config_file;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod report;
pub mod select;
pub mod token;
