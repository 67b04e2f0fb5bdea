//! Cell records and their kinds.
//!
//! Every record starts with a common header (flags, optional bounding box,
//! attributes, joint and transformation); the kind-specific fields follow.

pub mod attributes;
pub mod bounds;
pub mod joint;
pub mod polyhedron;
pub mod sets;
pub mod solids;
pub mod text;
pub mod transform;

pub use attributes::Attributes;
pub use bounds::StoredBounds;
pub use joint::Joint;
pub use polyhedron::{Polyhedron, VectorList};
pub use sets::{EmbeddedFile, FileReference, Instance, Set};
pub use solids::{CircularArc, Cone, Cylinder, Frustum, Hemisphere, Rectangle, Tetrahedron, Trapezoid};
pub use text::{Text, TextItem, TextList, TextPlacement};
pub use transform::{TransformOp, Transformation};

use cell_core::{CellError, CellFlags, Result, TokenReader};
use glam::DVec3;
use tracing::trace;

use crate::shape::Shape;

/// Index of a cell within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What the kind readers know about the record they are completing.
#[derive(Debug, Clone, Copy)]
pub struct CellContext {
    pub id: CellId,
    pub type_code: i32,
}

/// The fields shared by every cell record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellHeader {
    pub flags: CellFlags,
    pub attributes: Attributes,
    pub joint: Option<Joint>,
    pub transformation: Transformation,
}

impl CellHeader {
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let flags = CellFlags::read(reader)?;
        if flags.bounding_box_present() {
            let bounds = StoredBounds::read(reader)?;
            trace!(min = ?bounds.min, max = ?bounds.max, "skipping stored bounding box");
        }
        let attributes = if flags.attributes_present() {
            Attributes::read(reader, flags.colors_inherited())?
        } else {
            Attributes::default()
        };
        let joint = if flags.joint_data_present() {
            Some(Joint::read(reader)?)
        } else {
            None
        };
        let transformation = if !flags.geometry_data_present() {
            Transformation::identity()
        } else if flags.geometry_in_matrix_form() {
            return Err(CellError::incorrect_format(
                reader.line_number(),
                "geometry in matrix form is not supported",
            ));
        } else {
            Transformation::read(reader)?
        };
        Ok(Self {
            flags,
            attributes,
            joint,
            transformation,
        })
    }
}

/// A parsed cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub type_code: i32,
    /// Enclosing cell; `None` for the scene root and for definitions.
    pub parent: Option<CellId>,
    pub flags: CellFlags,
    pub attributes: Attributes,
    pub joint: Option<Joint>,
    pub transformation: Transformation,
    pub kind: CellKind,
    /// Renderable form, built once when the cell is read.
    pub shape: Shape,
}

impl Cell {
    pub fn name(&self) -> Option<&str> {
        self.attributes.name()
    }

    /// Cells whose children are sub-cells rather than geometry.
    pub fn is_set(&self) -> bool {
        matches!(
            self.kind,
            CellKind::Set(_) | CellKind::Definition(_) | CellKind::Instance(_) | CellKind::EmbeddedFile(_)
        )
    }

    pub fn children(&self) -> &[CellId] {
        self.kind.children()
    }
}

/// Kind-specific payload of a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellKind {
    Triad,
    VectorList(VectorList),
    Polyhedron(Polyhedron),
    Arc(CircularArc),
    Text(Text),
    TextList(TextList),
    Trapezoid(Trapezoid),
    Tetrahedron(Tetrahedron),
    Rectangle(Rectangle),
    Hemisphere(Hemisphere),
    Cone(Cone),
    Cylinder(Cylinder),
    Frustum(Frustum),
    FileReference(FileReference),
    EmbeddedFile(EmbeddedFile),
    Set(Set),
    /// A set registered in the scene's definition table under its name.
    Definition(Set),
    Instance(Instance),
}

impl CellKind {
    /// Child cells in file order. An instance's only child is its
    /// definition.
    pub fn children(&self) -> &[CellId] {
        match self {
            Self::Set(set) | Self::Definition(set) => &set.children,
            Self::Instance(instance) => std::slice::from_ref(&instance.definition),
            Self::EmbeddedFile(file) => std::slice::from_ref(&file.contents),
            _ => &[],
        }
    }

    /// Build the renderable form of this kind.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Triad | Self::VectorList(_) | Self::FileReference(_) => Shape::Empty,
            Self::Set(_) | Self::Definition(_) | Self::Instance(_) | Self::EmbeddedFile(_) => {
                Shape::Group
            }
            Self::Text(text) => text.shape(),
            Self::TextList(list) => list.shape(),
            Self::Polyhedron(p) => Shape::Mesh(p.mesh()),
            Self::Arc(arc) => Shape::Mesh(arc.mesh()),
            Self::Trapezoid(t) => Shape::Mesh(t.mesh()),
            Self::Tetrahedron(t) => Shape::Mesh(t.mesh()),
            Self::Rectangle(r) => Shape::Mesh(r.mesh()),
            Self::Hemisphere(h) => Shape::Mesh(h.mesh()),
            Self::Cone(c) => Shape::Mesh(c.mesh()),
            Self::Cylinder(c) => Shape::Mesh(c.mesh()),
            Self::Frustum(f) => Shape::Mesh(f.mesh()),
        }
    }
}

/// Read an `x y z` triple.
pub(crate) fn read_point(reader: &mut TokenReader<'_>, what: &str) -> Result<DVec3> {
    Ok(DVec3::new(
        reader.read_double(&format!("{what} x"))?,
        reader.read_double(&format!("{what} y"))?,
        reader.read_double(&format!("{what} z"))?,
    ))
}
