//! Progress reporters for panel runs

pub mod reporter;
