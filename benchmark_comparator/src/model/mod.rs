//!
//! The validated benchmark data model.
//!

pub mod benchmark;
pub mod error;
pub mod report;
