//! Main nearest-centroid tracker implementation.

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::tracker::matching;
use crate::tracker::rect::{Centroid, Rect};
use crate::tracker::track::Track;

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum centroid distance for a detection to continue an existing
    /// track. Anything strictly farther starts a new identity.
    pub distance_thresh: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_thresh: 50.0,
        }
    }
}

/// Error type for tracker construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// The distance threshold is negative or NaN.
    #[error("distance threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),
}

/// Frame-to-frame identity assignment by nearest centroid.
///
/// Each call to [`track`](CentroidTracker::track) consumes one frame's
/// detections and returns one track ID per detection, in input order.
/// Matching is greedy per detection: every detection independently picks
/// the nearest live track within the distance threshold, so two
/// detections in one frame can legitimately resolve to the same ID.
#[derive(Debug, Default)]
pub struct CentroidTracker {
    // Insertion order doubles as creation order: IDs only ever ascend,
    // so index order is the tie-break order during matching.
    tracks: Vec<Track>,
    next_id: u64,
    config: TrackerConfig,
}

impl CentroidTracker {
    /// Create a tracker with the given configuration.
    ///
    /// Fails with [`TrackerError::InvalidThreshold`] if the distance
    /// threshold is negative or NaN.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        if config.distance_thresh.is_nan() || config.distance_thresh < 0.0 {
            return Err(TrackerError::InvalidThreshold(config.distance_thresh));
        }
        Ok(Self {
            tracks: Vec::new(),
            next_id: 0,
            config,
        })
    }

    /// Create a tracker with the given distance threshold.
    pub fn with_threshold(distance_thresh: f64) -> Result<Self, TrackerError> {
        Self::new(TrackerConfig { distance_thresh })
    }

    /// Process one frame of detections and return one track ID per box,
    /// positionally matched to the input.
    pub fn track(&mut self, boxes: &[Rect]) -> Vec<u64> {
        let mut ids = Vec::with_capacity(boxes.len());

        // No live tracks: every detection starts a new identity, no
        // distance computation.
        if self.tracks.is_empty() {
            for rect in boxes {
                ids.push(self.register(rect.centroid()));
            }
            return ids;
        }

        // Empty frame wipes all tracks at once; the ID counter keeps
        // running so dropped IDs are never handed out again.
        if boxes.is_empty() {
            debug!("empty frame, dropping {} tracks", self.tracks.len());
            self.tracks.clear();
            return ids;
        }

        let detections: Vec<Centroid> = boxes.iter().map(Rect::centroid).collect();
        let known: Vec<Centroid> = self.tracks.iter().map(|t| t.centroid).collect();
        let dists = matching::distance_matrix(&detections, &known);

        // Matrix columns index the pre-frame track snapshot; tracks
        // registered below land past it and are not match candidates
        // until the next frame. A matched track keeps the centroid it
        // was registered with.
        for (i, centroid) in detections.iter().enumerate() {
            match matching::nearest(dists.row(i)) {
                Some((j, dist)) if dist <= self.config.distance_thresh => {
                    ids.push(self.tracks[j].id);
                }
                _ => ids.push(self.register(*centroid)),
            }
        }

        // Drop every pre-existing track no detection selected this frame.
        let kept: HashSet<u64> = ids.iter().copied().collect();
        let before = self.tracks.len();
        self.tracks.retain(|t| kept.contains(&t.id));
        if self.tracks.len() < before {
            debug!("dropped {} unmatched tracks", before - self.tracks.len());
        }

        ids
    }

    fn register(&mut self, centroid: Centroid) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        debug!("registered track {} at ({}, {})", id, centroid.x, centroid.y);
        self.tracks.push(Track { id, centroid });
        id
    }

    /// Currently live tracks, in creation order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The tracker's configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
