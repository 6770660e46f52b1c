mod centroid_tracker;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{CentroidTracker, TrackerConfig, TrackerError};
pub use rect::{Centroid, Rect};
pub use track::Track;
