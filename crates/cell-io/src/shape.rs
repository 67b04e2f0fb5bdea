//! Renderable output handed to a drawing layer.

use cell_core::{LineStyle, LineWidth, Rgb};
use cell_mesh::Mesh;
use glam::{DMat4, Vec3};

/// What a cell draws, independent of its transform and colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shape {
    /// Nothing to draw (triads, vector lists, file references, screen text).
    #[default]
    Empty,
    /// Draws only through its children.
    Group,
    Mesh(Mesh),
    Text(Vec<Label>),
}

impl Shape {
    pub fn mesh(&self) -> Option<&Mesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A text string placed in the cell's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Vec3,
    pub text: String,
    pub font: u32,
}

/// Resolved drawing state for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAttributes {
    pub face_color: Rgb,
    pub edge_color: Rgb,
    /// `1.0` is opaque.
    pub opacity: f64,
    pub wireframe: bool,
    pub line_style: LineStyle,
    pub line_width: LineWidth,
    /// Local-to-parent transform.
    pub transform: DMat4,
}
