//! Point-list primitives: polyhedra and vector lists.

use cell_core::reader::{at_least, between};
use cell_core::{Result, TokenReader};
use cell_mesh::{primitives, Face, Mesh};
use glam::DVec3;

use super::read_point;

/// A mesh given by explicit points and polygon faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub points: Vec<DVec3>,
    /// Zero-based point indices.
    pub faces: Vec<Face>,
}

impl Polyhedron {
    /// Read `point-count points face-count faces`, where each face is a
    /// vertex count followed by one-based point indices.
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let point_count = reader.read_int_with("polyhedron point count", at_least(3))?;
        let points = (0..point_count)
            .map(|_| read_point(reader, "polyhedron point"))
            .collect::<Result<Vec<_>>>()?;

        let face_count = reader.read_int_with("polyhedron face count", at_least(1))?;
        let mut faces = Vec::new();
        for _ in 0..face_count {
            let vertex_count = reader.read_int_with("polyhedron face vertex count", at_least(3))?;
            let face = (0..vertex_count)
                .map(|_| {
                    reader
                        .read_int_with("polyhedron face point index", between(1, point_count))
                        .map(|index| (index - 1) as u32)
                })
                .collect::<Result<Face>>()?;
            faces.push(face);
        }
        Ok(Self { points, faces })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::polyhedron(&self.points, &self.faces)
    }
}

/// A polyline. Read and kept, not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorList {
    pub points: Vec<DVec3>,
}

impl VectorList {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let count = reader.read_int_with("vector list point count", at_least(2))?;
        let points = (0..count)
            .map(|_| read_point(reader, "vector list point"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRA: &str = "4  0 0 0  1 0 0  0 1 0  0 0 1\n\
                         4  3 1 3 2  3 1 2 4  3 2 3 4  3 3 1 4";

    #[test]
    fn test_read_polyhedron() {
        let mut reader = TokenReader::from_text(TETRA);
        let polyhedron = Polyhedron::read(&mut reader).unwrap();
        assert_eq!(polyhedron.points.len(), 4);
        assert_eq!(polyhedron.faces.len(), 4);
        assert_eq!(polyhedron.faces[0].as_slice(), &[0, 2, 1]);
        let mesh = polyhedron.mesh();
        assert_eq!(mesh.triangles().len(), 4);
    }

    #[test]
    fn test_quad_faces_fan_triangulate() {
        let text = "4  0 0 0  1 0 0  1 1 0  0 1 0  1  4 1 2 3 4";
        let mut reader = TokenReader::from_text(text);
        let mesh = Polyhedron::read(&mut reader).unwrap().mesh();
        assert_eq!(mesh.triangles(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_index_out_of_range() {
        let text = "3  0 0 0  1 0 0  0 1 0  1  3 1 2 4";
        let mut reader = TokenReader::from_text(text);
        assert!(Polyhedron::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_too_few_points() {
        let mut reader = TokenReader::from_text("2  0 0 0  1 0 0");
        assert!(Polyhedron::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_degenerate_face() {
        let text = "3  0 0 0  1 0 0  0 1 0  1  2 1 2";
        let mut reader = TokenReader::from_text(text);
        assert!(Polyhedron::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_vector_list() {
        let mut reader = TokenReader::from_text("2  0 0 0  5 5 0");
        let list = VectorList::read(&mut reader).unwrap();
        assert_eq!(list.points[1], DVec3::new(5.0, 5.0, 0.0));

        let mut reader = TokenReader::from_text("1  0 0 0");
        assert!(VectorList::read(&mut reader).unwrap_err().is_parsing());
    }
}
