/// File utilities
pub mod files;

/// Utilities for classification tasks
pub mod classes;
