//! Nearest-centroid multi-object tracking.
//!
//! Assigns stable integer identities to per-frame bounding boxes by
//! matching each detection to the nearest track centroid from previous
//! frames, subject to a distance threshold. Detection itself is out of
//! scope: any backend can feed boxes in through the [`integration`]
//! module's `BoxSource` trait.

pub mod integration;
pub mod tracker;

pub use integration::{BoxSource, IntoBoxes, RectBuilder, TrackerPipeline};
pub use tracker::{Centroid, CentroidTracker, Rect, Track, TrackerConfig, TrackerError};
