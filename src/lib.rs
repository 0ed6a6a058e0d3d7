// src/lib.rs

//! Internal library for codepicker – not published on crates.io

pub mod app_controller;
pub mod common;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    aggregate::Aggregator,
    config::{CodepickerConfig, CodepickerConfigBuilder},
    model::{ProcessedFile, RunResult},
    reconcile::reconcile,
    token::{Tokenizer, TokenizerChoice},
};
