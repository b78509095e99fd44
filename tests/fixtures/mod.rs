//! Test fixtures for trusker-planner.
//!
//! Provides realistic test data including:
//! - Real Paris locations
//! - A feed builder producing start/end point pairs

#![allow(dead_code)]

pub mod feed_builder;
pub mod paris_locations;

pub use feed_builder::*;
pub use paris_locations::*;
