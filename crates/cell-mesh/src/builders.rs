//! Point and face generators shared by the curved primitives.
//!
//! Point generators return absolute positions; face generators take the index
//! at which the relevant points were added to a [`MeshBuilder`](crate::MeshBuilder).

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use smallvec::smallvec;

use crate::mesh::Face;

/// Number of divisions used for every curved primitive.
///
/// Cell files also carry a coarse/fine setting for curved surfaces; it is
/// accepted and ignored.
pub const DIVISIONS: usize = 16;

/// Points evenly spaced around a full circle, starting on the +X side.
pub fn ring_points(radius: f64, height: f64, divisions: usize, centre: DVec2) -> Vec<DVec3> {
    (0..divisions)
        .map(|i| {
            let angle = TAU * i as f64 / divisions as f64;
            DVec3::new(
                centre.x + radius * angle.cos(),
                centre.y + radius * angle.sin(),
                height,
            )
        })
        .collect()
}

/// A circle: the centre followed by `divisions` circumference points.
pub fn circle_points(radius: f64, height: f64, divisions: usize, centre: DVec2) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(divisions + 1);
    points.push(centre.extend(height));
    points.extend(ring_points(radius, height, divisions, centre));
    points
}

/// A sector: the centre followed by `divisions + 1` points from `start` to
/// `end` (degrees, counter-clockwise from +X), both ends included.
pub fn sector_points(
    radius: f64,
    height: f64,
    divisions: usize,
    centre: DVec2,
    start: f64,
    end: f64,
) -> Vec<DVec3> {
    let (start, end) = (start.to_radians(), end.to_radians());
    let mut points = Vec::with_capacity(divisions + 2);
    points.push(centre.extend(height));
    points.extend((0..=divisions).map(|i| {
        let t = if divisions == 0 { 0.0 } else { i as f64 / divisions as f64 };
        let angle = start + (end - start) * t;
        DVec3::new(
            centre.x + radius * angle.cos(),
            centre.y + radius * angle.sin(),
            height,
        )
    }));
    points
}

/// Triangles fanning from `hub` around the ring starting at `first`.
///
/// A closed fan wraps its last face back to `first`; an open one expects
/// `divisions + 1` ring points and stops at the last of them.
pub fn fan_faces(hub: u32, first: u32, divisions: usize, closed: bool) -> Vec<Face> {
    let n = divisions as u32;
    (0..n)
        .map(|i| -> Face {
            let next = if closed { (i + 1) % n } else { i + 1 };
            smallvec![hub, first + i, first + next]
        })
        .collect()
}

/// Quads between two rings of equal size, split into `2 * divisions`
/// triangles. The last pair wraps back to the first ring points.
pub fn wall_faces(lower: u32, upper: u32, divisions: usize) -> Vec<Face> {
    let n = divisions as u32;
    (0..n)
        .flat_map(|i| -> [Face; 2] {
            let j = (i + 1) % n;
            [
                smallvec![lower + i, lower + j, upper + j],
                smallvec![lower + i, upper + j, upper + i],
            ]
        })
        .collect()
}

/// Flip the winding of every face.
pub fn reversed(faces: Vec<Face>) -> Vec<Face> {
    faces
        .into_iter()
        .map(|mut face| {
            face.reverse();
            face
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_circle_points() {
        let points = circle_points(2.0, 1.0, 4, DVec2::new(1.0, 0.0));
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], DVec3::new(1.0, 0.0, 1.0));
        assert!(close(points[1], DVec3::new(3.0, 0.0, 1.0)));
        assert!(close(points[2], DVec3::new(1.0, 2.0, 1.0)));
        assert!(close(points[3], DVec3::new(-1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_sector_points_include_both_ends() {
        let points = sector_points(1.0, 0.0, 2, DVec2::ZERO, 0.0, 90.0);
        assert_eq!(points.len(), 4);
        assert!(close(points[1], DVec3::X));
        assert!(close(points[3], DVec3::Y));
    }

    #[test]
    fn test_closed_fan_wraps() {
        let faces = fan_faces(0, 1, 16, true);
        assert_eq!(faces.len(), 16);
        assert_eq!(faces[15].as_slice(), &[0, 16, 1]);
    }

    #[test]
    fn test_open_fan_stops_short() {
        let faces = fan_faces(0, 1, 16, false);
        assert_eq!(faces[15].as_slice(), &[0, 16, 17]);
    }

    #[test]
    fn test_wall_wraps_to_first_ring_point() {
        let faces = wall_faces(1, 18, 16);
        assert_eq!(faces.len(), 32);
        assert_eq!(faces[30].as_slice(), &[16, 1, 18]);
        assert_eq!(faces[31].as_slice(), &[16, 18, 33]);
    }

    #[test]
    fn test_reversed() {
        let faces = reversed(fan_faces(0, 1, 3, true));
        assert_eq!(faces[0].as_slice(), &[2, 1, 0]);
    }

    proptest! {
        #[test]
        fn prop_circle_counts(n in 1usize..64, radius in 0.0f64..100.0) {
            let points = circle_points(radius, 0.0, n, DVec2::ZERO);
            let faces = fan_faces(0, 1, n, true);
            prop_assert_eq!(points.len(), n + 1);
            prop_assert_eq!(faces.len(), n);
            prop_assert!(faces.iter().flatten().all(|&i| (i as usize) < points.len()));
        }

        #[test]
        fn prop_sector_counts(n in 1usize..64, start in -360.0f64..360.0, sweep in 0.0f64..360.0) {
            let points = sector_points(1.0, 0.0, n, DVec2::ZERO, start, start + sweep);
            let faces = fan_faces(0, 1, n, false);
            prop_assert_eq!(points.len(), n + 2);
            prop_assert_eq!(faces.len(), n);
            prop_assert!(faces.iter().flatten().all(|&i| (i as usize) < points.len()));
        }

        #[test]
        fn prop_wall_counts(n in 1usize..64) {
            let faces = wall_faces(0, n as u32, n);
            prop_assert_eq!(faces.len(), 2 * n);
            prop_assert!(faces.iter().flatten().all(|&i| (i as usize) < 2 * n));
        }
    }
}
