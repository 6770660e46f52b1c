//! Integration module for connecting object detection backends with the
//! centroid tracker.
//!
//! This module provides traits and utilities for feeding per-frame boxes
//! from any detection backend (ONNX Runtime, OpenCV, etc.) into the
//! tracker.

mod builder;
mod detector;
mod pipeline;

pub use builder::RectBuilder;
pub use detector::{BoxSource, IntoBoxes};
pub use pipeline::TrackerPipeline;
