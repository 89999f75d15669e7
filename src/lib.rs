//! # Review Classifier
#![forbid(unsafe_code)]

/// Text cleaning and tokenization
pub mod preprocessing;

/// Pipelines
pub mod pipelines;

/// Datasets
pub mod datasets;

/// The classification service
pub mod server;

/// Utilities
pub mod utils;

/// Error macros
#[macro_use]
extern crate anyhow;
