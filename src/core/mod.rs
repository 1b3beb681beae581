//! Core types for route planning.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Point`]: 2-D world coordinate value type
//! - [`Circle`]: circular obstacle
//! - [`geometry`]: stateless geometric primitives shared by both planners

pub mod geometry;

mod point;

pub use point::{Circle, Point};
