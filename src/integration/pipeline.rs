//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{CentroidTracker, TrackerConfig, TrackerError};

use super::BoxSource;

/// A combined tracker that bundles box detection with centroid tracking.
///
/// This struct provides a convenient way to run end-to-end tracking
/// by combining any `BoxSource` with the `CentroidTracker`.
pub struct TrackerPipeline<S: BoxSource> {
    source: S,
    tracker: CentroidTracker,
}

impl<S: BoxSource> TrackerPipeline<S> {
    /// Create a new tracking pipeline with the given box source and tracker config.
    pub fn new(source: S, config: TrackerConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            source,
            tracker: CentroidTracker::new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(source: S) -> Self {
        Self {
            source,
            tracker: CentroidTracker::default(),
        }
    }

    /// Process a single frame and return one track ID per detected box.
    ///
    /// This method runs detection on the input image and then updates
    /// the tracker with the resulting boxes.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// A vector of track IDs, positionally matched to the frame's boxes,
    /// or a detection error.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u64>, S::Error> {
        let boxes = self.source.detect(input, width, height)?;
        Ok(self.tracker.track(&boxes))
    }

    /// Get a reference to the underlying box source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying box source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Rect;

    struct MockSource {
        boxes: Vec<Rect>,
    }

    impl BoxSource for MockSource {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Rect>, Self::Error> {
            Ok(self.boxes.clone())
        }
    }

    #[test]
    fn test_tracker_pipeline() {
        let source = MockSource {
            boxes: vec![Rect::new(10, 20, 50, 80)],
        };

        let mut pipeline = TrackerPipeline::with_default_config(source);
        let ids = pipeline.process_frame(&[], 640, 480).unwrap();

        // First frame registers one fresh track
        assert_eq!(ids, vec![0]);
        assert_eq!(pipeline.tracker().tracks().len(), 1);

        // Same box next frame keeps its identity
        let ids = pipeline.process_frame(&[], 640, 480).unwrap();
        assert_eq!(ids, vec![0]);
    }
}
