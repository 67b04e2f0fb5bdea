//! Meshes for the solid cell primitives.
//!
//! Every primitive sits on the XY plane with its base at `z = 0` and grows
//! towards +Z. Offsets shift the top (or apex) relative to the base.

use glam::{DVec2, DVec3};
use smallvec::smallvec;

use crate::builders::{circle_points, fan_faces, reversed, ring_points, sector_points, wall_faces};
use crate::mesh::{Face, Mesh, MeshBuilder, FACETED, SMOOTH};

/// Number of latitude bands in a hemisphere.
pub const HEMISPHERE_BANDS: usize = 3;

/// A frustum of a cone: two circles joined by a wall.
///
/// Yields `2 * (divisions + 1)` points and `4 * divisions` faces.
pub fn frustum(
    base_radius: f64,
    top_radius: f64,
    height: f64,
    top_offset: DVec2,
    divisions: usize,
) -> Mesh {
    let mut mesh = MeshBuilder::new();
    let base = mesh.add_points(circle_points(base_radius, 0.0, divisions, DVec2::ZERO));
    let top = mesh.add_points(circle_points(top_radius, height, divisions, top_offset));

    mesh.add_faces(reversed(fan_faces(base, base + 1, divisions, true)), FACETED);
    mesh.add_faces(wall_faces(base + 1, top + 1, divisions), SMOOTH);
    mesh.add_faces(fan_faces(top, top + 1, divisions, true), FACETED);
    mesh.build()
}

/// A cylinder is a frustum with equal radii.
pub fn cylinder(radius: f64, height: f64, top_offset: DVec2, divisions: usize) -> Mesh {
    frustum(radius, radius, height, top_offset, divisions)
}

/// A cone: base disc plus a mantle fanning to the apex.
pub fn cone(radius: f64, height: f64, apex_offset: DVec2, divisions: usize) -> Mesh {
    let mut mesh = MeshBuilder::new();
    let base = mesh.add_points(circle_points(radius, 0.0, divisions, DVec2::ZERO));
    let apex = mesh.add_point(apex_offset.extend(height));

    mesh.add_faces(reversed(fan_faces(base, base + 1, divisions, true)), FACETED);
    mesh.add_faces(fan_faces(apex, base + 1, divisions, true), SMOOTH);
    mesh.build()
}

/// A hemisphere approximated by latitude bands.
///
/// Band `i` sits at latitude `i * 90 / HEMISPHERE_BANDS` degrees with radius
/// `r cos(lat)` and height `r sin(lat)`. The top band closes as a cone onto
/// the pole.
pub fn hemisphere(radius: f64, divisions: usize) -> Mesh {
    let mut mesh = MeshBuilder::new();
    let centre = mesh.add_points(circle_points(radius, 0.0, divisions, DVec2::ZERO));
    mesh.add_faces(reversed(fan_faces(centre, centre + 1, divisions, true)), FACETED);

    let mut lower = centre + 1;
    for band in 1..HEMISPHERE_BANDS {
        let latitude = (band as f64 * 90.0 / HEMISPHERE_BANDS as f64).to_radians();
        let upper = mesh.add_points(ring_points(
            radius * latitude.cos(),
            radius * latitude.sin(),
            divisions,
            DVec2::ZERO,
        ));
        mesh.add_faces(wall_faces(lower, upper, divisions), SMOOTH);
        lower = upper;
    }

    let pole = mesh.add_point(DVec3::new(0.0, 0.0, radius));
    mesh.add_faces(fan_faces(pole, lower, divisions, true), SMOOTH);
    mesh.build()
}

/// A flat, open circular sector at `z = 0`.
pub fn sector(radius: f64, start: f64, end: f64, divisions: usize) -> Mesh {
    let mut mesh = MeshBuilder::new();
    let centre = mesh.add_points(sector_points(radius, 0.0, divisions, DVec2::ZERO, start, end));
    mesh.add_faces(fan_faces(centre, centre + 1, divisions, false), FACETED);
    mesh.build()
}

/// A box whose top rectangle may differ in size and be offset from its base.
pub fn trapezoid(bottom: DVec2, top: DVec2, height: f64, top_offset: DVec2) -> Mesh {
    let mut mesh = MeshBuilder::new();
    mesh.add_points(rectangle_corners(DVec2::ZERO, bottom, 0.0));
    mesh.add_points(rectangle_corners(top_offset, top, height));

    let faces: [Face; 6] = [
        smallvec![0, 3, 2, 1],
        smallvec![4, 5, 6, 7],
        smallvec![0, 1, 5, 4],
        smallvec![1, 2, 6, 5],
        smallvec![2, 3, 7, 6],
        smallvec![3, 0, 4, 7],
    ];
    mesh.add_faces(faces, FACETED);
    mesh.build()
}

/// A rectangular base joined to a single apex.
pub fn tetrahedron(base: DVec2, height: f64, apex_offset: DVec2) -> Mesh {
    let mut mesh = MeshBuilder::new();
    mesh.add_points(rectangle_corners(DVec2::ZERO, base, 0.0));
    let apex = mesh.add_point(apex_offset.extend(height));

    mesh.add_face(smallvec![0, 3, 2, 1], FACETED);
    for i in 0..4 {
        mesh.add_face(smallvec![i, (i + 1) % 4, apex], FACETED);
    }
    mesh.build()
}

/// A single flat rectangle at `z = 0`.
pub fn rectangle(size: DVec2) -> Mesh {
    let mut mesh = MeshBuilder::new();
    mesh.add_points(rectangle_corners(DVec2::ZERO, size, 0.0));
    mesh.add_face(smallvec![0, 1, 2, 3], FACETED);
    mesh.build()
}

/// A mesh from explicit points and zero-based polygon faces.
pub fn polyhedron(points: &[DVec3], faces: &[Face]) -> Mesh {
    let mut mesh = MeshBuilder::new();
    mesh.add_points(points.iter().copied());
    mesh.add_faces(faces.iter().cloned(), FACETED);
    mesh.build()
}

fn rectangle_corners(origin: DVec2, size: DVec2, height: f64) -> [DVec3; 4] {
    [
        DVec3::new(origin.x, origin.y, height),
        DVec3::new(origin.x + size.x, origin.y, height),
        DVec3::new(origin.x + size.x, origin.y + size.y, height),
        DVec3::new(origin.x, origin.y + size.y, height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DIVISIONS;
    use glam::Vec3;
    use proptest::prelude::*;

    fn outward(mesh: &Mesh, face: usize) -> Vec3 {
        let f = &mesh.faces[face];
        let (a, b, c) = (
            mesh.positions[f[0] as usize],
            mesh.positions[f[1] as usize],
            mesh.positions[f[2] as usize],
        );
        (b - a).cross(c - a)
    }

    #[test]
    fn test_cylinder_counts() {
        let mesh = cylinder(2.0, 5.0, DVec2::ZERO, DIVISIONS);
        assert_eq!(mesh.vertex_count(), 2 * (DIVISIONS + 1));
        assert_eq!(mesh.face_count(), 4 * DIVISIONS);
        let bounds = mesh.compute_bounds();
        assert!((bounds.max.z - 5.0).abs() < 1e-6);
        assert!((bounds.max.x - 2.0).abs() < 1e-6);
        assert!((bounds.min.x + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cylinder_caps_face_outwards() {
        let mesh = cylinder(1.0, 1.0, DVec2::ZERO, 8);
        assert!(outward(&mesh, 0).z < 0.0);
        assert!(outward(&mesh, mesh.face_count() - 1).z > 0.0);
    }

    #[test]
    fn test_cylinder_smoothing_groups() {
        let mesh = cylinder(1.0, 1.0, DVec2::ZERO, 4);
        let groups = mesh.smoothing_groups.unwrap();
        assert_eq!(groups.len(), 16);
        assert_eq!(groups.iter().filter(|&&g| g == SMOOTH).count(), 8);
    }

    #[test]
    fn test_cone() {
        let mesh = cone(1.0, 3.0, DVec2::new(0.5, 0.0), DIVISIONS);
        assert_eq!(mesh.vertex_count(), DIVISIONS + 2);
        assert_eq!(mesh.face_count(), 2 * DIVISIONS);
        assert_eq!(mesh.positions[DIVISIONS + 1], Vec3::new(0.5, 0.0, 3.0));
    }

    #[test]
    fn test_hemisphere() {
        let mesh = hemisphere(2.0, DIVISIONS);
        assert_eq!(mesh.vertex_count(), 3 * DIVISIONS + 2);
        assert_eq!(mesh.face_count(), 6 * DIVISIONS);
        let pole = mesh.positions[mesh.vertex_count() - 1];
        assert_eq!(pole, Vec3::new(0.0, 0.0, 2.0));
        // second band at 30 degrees
        let band = mesh.positions[DIVISIONS + 1];
        assert!((band.x - 2.0 * 30f32.to_radians().cos()).abs() < 1e-5);
        assert!((band.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sector() {
        let mesh = sector(1.0, 0.0, 180.0, DIVISIONS);
        assert_eq!(mesh.vertex_count(), DIVISIONS + 2);
        assert_eq!(mesh.face_count(), DIVISIONS);
    }

    #[test]
    fn test_trapezoid_faces_outwards() {
        let mesh = trapezoid(DVec2::new(2.0, 2.0), DVec2::new(1.0, 1.0), 1.0, DVec2::new(0.5, 0.5));
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.triangles().len(), 12);
        assert!(outward(&mesh, 0).z < 0.0);
        assert!(outward(&mesh, 1).z > 0.0);
        assert!(outward(&mesh, 2).y < 0.0);
        assert!(outward(&mesh, 3).x > 0.0);
        assert!(mesh.smoothing_groups.is_none());
    }

    #[test]
    fn test_tetrahedron() {
        let mesh = tetrahedron(DVec2::new(1.0, 1.0), 2.0, DVec2::new(0.5, 0.5));
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.face_count(), 5);
        assert_eq!(mesh.faces[4].as_slice(), &[3, 0, 4]);
    }

    #[test]
    fn test_rectangle() {
        let mesh = rectangle(DVec2::new(3.0, 2.0));
        assert_eq!(mesh.positions[2], Vec3::new(3.0, 2.0, 0.0));
        assert_eq!(mesh.triangles(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_polyhedron() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let faces: Vec<Face> = vec![
            smallvec![0, 2, 1],
            smallvec![0, 1, 3],
            smallvec![1, 2, 3],
            smallvec![2, 0, 3],
        ];
        let mesh = polyhedron(&points, &faces);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles().len(), 4);
    }

    proptest! {
        #[test]
        fn prop_frustum_counts(n in 1usize..48, r1 in 0.0f64..10.0, r2 in 0.0f64..10.0, h in 0.0f64..10.0) {
            let mesh = frustum(r1, r2, h, DVec2::ZERO, n);
            prop_assert_eq!(mesh.vertex_count(), 2 * (n + 1));
            prop_assert_eq!(mesh.face_count(), 4 * n);
            prop_assert!(mesh.faces.iter().flatten().all(|&i| (i as usize) < mesh.vertex_count()));
        }

        #[test]
        fn prop_hemisphere_indices_in_range(n in 1usize..48, r in 0.0f64..10.0) {
            let mesh = hemisphere(r, n);
            prop_assert!(mesh.faces.iter().flatten().all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }
}
