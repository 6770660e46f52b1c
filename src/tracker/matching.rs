//! Matching utilities for nearest-centroid association.

use crate::tracker::rect::Centroid;
use ndarray::{Array2, ArrayView1};

/// Compute the Euclidean distance matrix between detections and tracks.
///
/// Returns a matrix of shape (M, N) where M is the length of
/// `detections` and N is the length of `tracks`.
pub fn distance_matrix(detections: &[Centroid], tracks: &[Centroid]) -> Array2<f64> {
    let mut dists = Array2::zeros((detections.len(), tracks.len()));
    for (i, d) in detections.iter().enumerate() {
        for (j, t) in tracks.iter().enumerate() {
            dists[[i, j]] = d.distance(t);
        }
    }
    dists
}

/// Find the nearest track for one detection row of the distance matrix.
///
/// Returns the column index and distance of the row minimum, or `None`
/// for an empty row. Ties resolve to the lowest index, i.e. the
/// earliest-created track.
pub fn nearest(row: ArrayView1<f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &dist) in row.iter().enumerate() {
        match best {
            Some((_, min)) if dist >= min => {}
            _ => best = Some((j, dist)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_matrix_shape() {
        let dets = vec![Centroid { x: 0, y: 0 }, Centroid { x: 10, y: 0 }];
        let tracks = vec![
            Centroid { x: 0, y: 0 },
            Centroid { x: 3, y: 4 },
            Centroid { x: 10, y: 10 },
        ];
        let dists = distance_matrix(&dets, &tracks);
        assert_eq!(dists.dim(), (2, 3));
        assert_eq!(dists[[0, 0]], 0.0);
        assert!((dists[[0, 1]] - 5.0).abs() < 1e-12);
        assert!((dists[[1, 2]] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_matrix_empty() {
        let dets: Vec<Centroid> = vec![];
        let tracks = vec![Centroid { x: 0, y: 0 }];
        assert_eq!(distance_matrix(&dets, &tracks).dim(), (0, 1));
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let dists = distance_matrix(
            &[Centroid { x: 0, y: 0 }],
            &[
                Centroid { x: 9, y: 0 },
                Centroid { x: 2, y: 0 },
                Centroid { x: 5, y: 0 },
            ],
        );
        assert_eq!(nearest(dists.row(0)), Some((1, 2.0)));
    }

    #[test]
    fn test_nearest_tie_breaks_to_first() {
        // Both tracks sit at distance 5; the earlier one wins
        let dists = distance_matrix(
            &[Centroid { x: 0, y: 0 }],
            &[Centroid { x: 3, y: 4 }, Centroid { x: 4, y: 3 }],
        );
        assert_eq!(nearest(dists.row(0)), Some((0, 5.0)));
    }

    #[test]
    fn test_nearest_empty_row() {
        let dists = distance_matrix(&[Centroid { x: 0, y: 0 }], &[]);
        assert_eq!(nearest(dists.row(0)), None);
    }
}
