//! Mesh types.

use glam::{DVec3, Vec3};
use smallvec::SmallVec;

/// A polygon as a list of vertex indices (at least three).
pub type Face = SmallVec<[u32; 4]>;

/// Smoothing group for flat, faceted faces.
pub const FACETED: u32 = 0;
/// Smoothing group for faces approximating a curved surface.
pub const SMOOTH: u32 = 1;

/// An indexed polygon mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Polygon faces, counter-clockwise when seen from outside.
    pub faces: Vec<Face>,
    /// One smoothing group per face, absent when every face is faceted.
    pub smoothing_groups: Option<Vec<u32>>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Triangulate every face as a fan from its first vertex.
    ///
    /// Only correct for convex planar faces; nothing checks that.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.faces.iter().flat_map(|face| fan(face)).collect()
    }

    /// Smoothing group of each triangle returned by [`Mesh::triangles`].
    pub fn triangle_smoothing_groups(&self) -> Option<Vec<u32>> {
        let groups = self.smoothing_groups.as_ref()?;
        Some(
            self.faces
                .iter()
                .zip(groups)
                .flat_map(|(face, &group)| std::iter::repeat(group).take(face.len().saturating_sub(2)))
                .collect(),
        )
    }

    /// Compute the bounding box.
    pub fn compute_bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.positions)
    }
}

fn fan(face: &Face) -> impl Iterator<Item = [u32; 3]> + '_ {
    (1..face.len().saturating_sub(1)).map(move |k| [face[0], face[k], face[k + 1]])
}

/// Accumulates double-precision points and faces, then emits a [`Mesh`].
#[derive(Debug, Default)]
pub struct MeshBuilder {
    points: Vec<DVec3>,
    faces: Vec<Face>,
    groups: Vec<u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Append points and return the index of the first one.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = DVec3>) -> u32 {
        let first = self.points.len() as u32;
        self.points.extend(points);
        first
    }

    pub fn add_point(&mut self, point: DVec3) -> u32 {
        self.add_points(std::iter::once(point))
    }

    pub fn add_face(&mut self, face: Face, group: u32) {
        self.faces.push(face);
        self.groups.push(group);
    }

    pub fn add_faces(&mut self, faces: impl IntoIterator<Item = Face>, group: u32) {
        for face in faces {
            self.add_face(face, group);
        }
    }

    /// Narrow the points to `f32` and emit the mesh.
    pub fn build(self) -> Mesh {
        let smoothing_groups = self
            .groups
            .iter()
            .any(|&group| group != FACETED)
            .then_some(self.groups);
        Mesh {
            positions: self.points.iter().map(|point| point.as_vec3()).collect(),
            faces: self.faces,
            smoothing_groups,
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Create from a set of points.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::default();
        };
        rest.iter().fold(Self { min: first, max: first }, |bounds, &p| Self {
            min: bounds.min.min(p),
            max: bounds.max.max(p),
        })
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand to include another bounding box.
    pub fn expand(&mut self, other: &BoundingBox) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_fan_triangulation() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO; 5],
            faces: vec![smallvec![0, 1, 2, 3, 4], smallvec![4, 3, 2]],
            smoothing_groups: Some(vec![FACETED, SMOOTH]),
        };
        assert_eq!(
            mesh.triangles(),
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [4, 3, 2]]
        );
        assert_eq!(
            mesh.triangle_smoothing_groups(),
            Some(vec![FACETED, FACETED, FACETED, SMOOTH])
        );
    }

    #[test]
    fn test_builder_emits_f32() {
        let mut builder = MeshBuilder::new();
        let first = builder.add_points([DVec3::new(0.5, 0.25, 2.0), DVec3::X, DVec3::Y]);
        assert_eq!(first, 0);
        builder.add_face(smallvec![0, 1, 2], FACETED);
        let mesh = builder.build();
        assert_eq!(mesh.positions[0], Vec3::new(0.5, 0.25, 2.0));
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.smoothing_groups.is_none());
    }

    #[test]
    fn test_builder_keeps_smoothing_groups() {
        let mut builder = MeshBuilder::new();
        builder.add_points([DVec3::ZERO, DVec3::X, DVec3::Y]);
        builder.add_face(smallvec![0, 1, 2], SMOOTH);
        assert_eq!(builder.build().smoothing_groups, Some(vec![SMOOTH]));
    }

    #[test]
    fn test_bounding_box() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, -1.0, -1.0),
        ];
        let bounds = BoundingBox::from_points(&points);
        assert_eq!(bounds.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.size(), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(BoundingBox::from_points(&[]), BoundingBox::default());
    }
}
