//! Solid primitives: boxes, pyramids, rectangles and the curved surfaces.

use cell_core::reader::at_least;
use cell_core::{Result, TokenReader};
use cell_mesh::{primitives, Mesh, DIVISIONS};
use glam::DVec2;

fn dimension(reader: &mut TokenReader<'_>, description: &str) -> Result<f64> {
    reader.read_double_with(description, at_least(0.0))
}

fn offset(reader: &mut TokenReader<'_>, what: &str) -> Result<DVec2> {
    Ok(DVec2::new(
        reader.read_double(&format!("{what} x offset"))?,
        reader.read_double(&format!("{what} y offset"))?,
    ))
}

/// Box with independent bottom and top rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Trapezoid {
    pub bottom: DVec2,
    pub top: DVec2,
    pub height: f64,
    pub top_offset: DVec2,
}

impl Trapezoid {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let bottom = DVec2::new(
            dimension(reader, "trapezoid bottom x dimension")?,
            dimension(reader, "trapezoid bottom y dimension")?,
        );
        let top = DVec2::new(
            dimension(reader, "trapezoid top x dimension")?,
            dimension(reader, "trapezoid top y dimension")?,
        );
        let height = dimension(reader, "trapezoid height")?;
        let top_offset = offset(reader, "trapezoid top")?;
        Ok(Self {
            bottom,
            top,
            height,
            top_offset,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::trapezoid(self.bottom, self.top, self.height, self.top_offset)
    }
}

/// Rectangular base rising to a single apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Tetrahedron {
    pub base: DVec2,
    pub height: f64,
    pub apex_offset: DVec2,
}

impl Tetrahedron {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let base = DVec2::new(
            dimension(reader, "tetrahedron base x dimension")?,
            dimension(reader, "tetrahedron base y dimension")?,
        );
        let height = dimension(reader, "tetrahedron height")?;
        let apex_offset = offset(reader, "tetrahedron apex")?;
        Ok(Self {
            base,
            height,
            apex_offset,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::tetrahedron(self.base, self.height, self.apex_offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub size: DVec2,
}

impl Rectangle {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let size = DVec2::new(
            dimension(reader, "rectangle x dimension")?,
            dimension(reader, "rectangle y dimension")?,
        );
        Ok(Self { size })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::rectangle(self.size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hemisphere {
    pub radius: f64,
}

impl Hemisphere {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let radius = dimension(reader, "hemisphere radius")?;
        Ok(Self { radius })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::hemisphere(self.radius, DIVISIONS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    pub radius: f64,
    pub height: f64,
    pub apex_offset: DVec2,
}

impl Cone {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let radius = dimension(reader, "cone radius")?;
        let height = dimension(reader, "cone height")?;
        let apex_offset = offset(reader, "cone apex")?;
        Ok(Self {
            radius,
            height,
            apex_offset,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::cone(self.radius, self.height, self.apex_offset, DIVISIONS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    pub radius: f64,
    pub height: f64,
    pub top_offset: DVec2,
}

impl Cylinder {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let radius = dimension(reader, "cylinder radius")?;
        let height = dimension(reader, "cylinder height")?;
        let top_offset = offset(reader, "cylinder top")?;
        Ok(Self {
            radius,
            height,
            top_offset,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::cylinder(self.radius, self.height, self.top_offset, DIVISIONS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    pub base_radius: f64,
    pub top_radius: f64,
    pub height: f64,
    pub top_offset: DVec2,
}

impl Frustum {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let base_radius = dimension(reader, "frustum base radius")?;
        let top_radius = dimension(reader, "frustum top radius")?;
        let height = dimension(reader, "frustum height")?;
        let top_offset = offset(reader, "frustum top")?;
        Ok(Self {
            base_radius,
            top_radius,
            height,
            top_offset,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::frustum(
            self.base_radius,
            self.top_radius,
            self.height,
            self.top_offset,
            DIVISIONS,
        )
    }
}

/// A flat circular arc, drawn as an open sector.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArc {
    pub radius: f64,
    /// Degrees, counter-clockwise from +X.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl CircularArc {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let radius = dimension(reader, "arc radius")?;
        let start_angle = reader.read_double("arc start angle")?;
        let end_angle = reader.read_double("arc end angle")?;
        Ok(Self {
            radius,
            start_angle,
            end_angle,
        })
    }

    pub fn mesh(&self) -> Mesh {
        primitives::sector(self.radius, self.start_angle, self.end_angle, DIVISIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder() {
        let mut reader = TokenReader::from_text("2.0 5.0 0.0 0.0");
        let cylinder = Cylinder::read(&mut reader).unwrap();
        assert_eq!(cylinder.radius, 2.0);
        assert_eq!(cylinder.height, 5.0);
        let mesh = cylinder.mesh();
        assert_eq!(mesh.vertex_count(), 2 * (DIVISIONS + 1));
        assert_eq!(mesh.face_count(), 4 * DIVISIONS);
    }

    #[test]
    fn test_negative_cylinder_radius() {
        let mut reader = TokenReader::from_text("-1.0 5.0 0.0 0.0");
        let err = Cylinder::read(&mut reader).unwrap_err();
        assert!(err.is_parsing());
        assert!(err.message().contains("cylinder radius"));
    }

    #[test]
    fn test_trapezoid() {
        let mut reader = TokenReader::from_text("4 2 2 1 3 1 0.5");
        let trapezoid = Trapezoid::read(&mut reader).unwrap();
        assert_eq!(trapezoid.top, DVec2::new(2.0, 1.0));
        assert_eq!(trapezoid.top_offset, DVec2::new(1.0, 0.5));
        assert_eq!(trapezoid.mesh().face_count(), 6);
    }

    #[test]
    fn test_offsets_may_be_negative() {
        let mut reader = TokenReader::from_text("1 2 -0.5 -0.5");
        let cone = Cone::read(&mut reader).unwrap();
        assert_eq!(cone.apex_offset, DVec2::new(-0.5, -0.5));
    }

    #[test]
    fn test_frustum_negative_height() {
        let mut reader = TokenReader::from_text("2 1 -3 0 0");
        assert!(Frustum::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_hemisphere_and_arc() {
        let mut reader = TokenReader::from_text("1.5  2 0 270");
        let hemisphere = Hemisphere::read(&mut reader).unwrap();
        assert_eq!(hemisphere.mesh().vertex_count(), 3 * DIVISIONS + 2);
        let arc = CircularArc::read(&mut reader).unwrap();
        assert_eq!(arc.end_angle, 270.0);
        assert_eq!(arc.mesh().face_count(), DIVISIONS);
    }

    #[test]
    fn test_rectangle_and_tetrahedron() {
        let mut reader = TokenReader::from_text("3 4  1 1 2 0.5 0.5");
        assert_eq!(Rectangle::read(&mut reader).unwrap().size, DVec2::new(3.0, 4.0));
        let tetrahedron = Tetrahedron::read(&mut reader).unwrap();
        assert_eq!(tetrahedron.height, 2.0);
        assert_eq!(tetrahedron.mesh().vertex_count(), 5);
    }
}
