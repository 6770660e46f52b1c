//! Trait for upstream box providers.

use crate::tracker::Rect;

/// Trait for per-frame bounding box providers.
///
/// Implement this trait to connect any detection backend to the tracker.
///
/// # Example
///
/// ```ignore
/// use centroid_track_rs::{BoxSource, Rect};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl BoxSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Rect>, Self::Error> {
///         // Run inference and return this frame's boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait BoxSource {
    /// Error type for detection failures.
    type Error;

    /// Produce the bounding boxes for one frame of raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// A vector of `Rect` boxes, or an error.
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Rect>, Self::Error>;
}

/// Helper trait for converting backend-specific outputs to `Rect` boxes.
///
/// Implement this for your backend's output format to enable easy conversion.
pub trait IntoBoxes {
    /// Convert the output into a vector of boxes.
    fn into_boxes(self) -> Vec<Rect>;
}

impl IntoBoxes for Vec<Rect> {
    fn into_boxes(self) -> Vec<Rect> {
        self
    }
}

impl IntoBoxes for Vec<(i64, i64, i64, i64)> {
    fn into_boxes(self) -> Vec<Rect> {
        self.into_iter()
            .map(|(x, y, w, h)| Rect::new(x, y, w, h))
            .collect()
    }
}
