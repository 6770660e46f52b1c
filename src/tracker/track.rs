use crate::tracker::rect::Centroid;

/// A single tracked identity.
///
/// The centroid is the position the track was registered at; matching a
/// track in later frames does not move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    /// Unique track identifier, never reused within a tracker instance
    pub id: u64,
    /// Centroid recorded at registration
    pub centroid: Centroid,
}
