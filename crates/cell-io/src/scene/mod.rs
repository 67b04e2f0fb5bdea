//! The parsed scene graph.

mod parser;

pub use parser::{parse, SceneParser};

use std::ops::Index;
use std::path::{Path, PathBuf};

use cell_core::{CellColor, CellFlags};
use cell_mesh::BoundingBox;
use glam::DMat4;
use indexmap::IndexMap;

use crate::cells::{Attributes, Cell, CellId};
use crate::options::ReadOptions;
use crate::shape::{RenderAttributes, Shape};

/// A fully read cell scene.
///
/// Cells live in one arena indexed by [`CellId`]. Parents always precede
/// their children, and definitions are stored alongside the cells that use
/// them.
#[derive(Debug, Clone)]
pub struct Scene {
    cells: Vec<Cell>,
    root: CellId,
    definitions: IndexMap<String, CellId>,
    options: ReadOptions,
    source: Option<PathBuf>,
}

impl Scene {
    /// Id of the root cell, the first one in the stream.
    pub fn root_id(&self) -> CellId {
        self.root
    }

    /// The root cell.
    pub fn root(&self) -> &Cell {
        &self[self.root]
    }

    /// The cell with `id`, or `None` if it belongs to another scene.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// All cells in the order they were read.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, definitions included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Children of a cell in file order. An instance's only child is its
    /// definition.
    pub fn children(&self, id: CellId) -> &[CellId] {
        self[id].children()
    }

    /// Enclosing cell; `None` for the root and for definitions.
    pub fn parent(&self, id: CellId) -> Option<CellId> {
        self[id].parent
    }

    /// Look up a definition by name.
    pub fn definition(&self, name: &str) -> Option<&Cell> {
        self.definitions.get(name).map(|&id| &self[id])
    }

    /// Definitions in the order they were registered.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, CellId)> {
        self.definitions.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Number of registered definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Options the scene was read with.
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// File the scene was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Face color used when no cell up the chain names one.
    pub fn default_face_color(&self) -> CellColor {
        self.options.default_face_color
    }

    /// Edge color used when no cell up the chain names one.
    pub fn default_edge_color(&self) -> CellColor {
        self.options.default_edge_color
    }

    /// Face color of a cell, inherited up the parent chain and finally from
    /// the scene default.
    pub fn face_color(&self, id: CellId) -> CellColor {
        self.inherited(id, |attributes| attributes.face_color)
            .unwrap_or(self.options.default_face_color)
    }

    /// Edge color of a cell, resolved like [`Scene::face_color`].
    pub fn edge_color(&self, id: CellId) -> CellColor {
        self.inherited(id, |attributes| attributes.edge_color)
            .unwrap_or(self.options.default_edge_color)
    }

    fn inherited(&self, id: CellId, pick: impl Fn(&Attributes) -> Option<CellColor>) -> Option<CellColor> {
        let mut current = Some(id);
        while let Some(cell) = current.and_then(|id| self.get(id)) {
            if let Some(color) = pick(&cell.attributes) {
                return Some(color);
            }
            current = cell.parent;
        }
        None
    }

    /// Everything a drawing layer needs to know about one cell besides its
    /// shape.
    pub fn render_attributes(&self, id: CellId) -> RenderAttributes {
        let cell = &self[id];
        let style = cell.attributes.display_style;
        RenderAttributes {
            face_color: self.face_color(id).rgb(),
            edge_color: self.edge_color(id).rgb(),
            opacity: style.opacity(),
            wireframe: style.is_wireframe(),
            line_style: cell.attributes.line_style,
            line_width: cell.attributes.line_width,
            transform: cell.transformation.matrix(),
        }
    }

    /// Resolve a file name from the stream against the base location.
    pub fn resolve_reference(&self, name: &str) -> PathBuf {
        self.options.resolve_reference(name, self.source())
    }

    /// Visit every cell reachable from the root, depth first, with its
    /// local-to-world transform. Shared definitions are visited once per
    /// instance.
    pub fn traverse(&self) -> impl Iterator<Item = (CellId, &Cell, DMat4)> {
        SceneTraverser::new(self)
    }

    /// World-space bounds of every mesh reachable from the root.
    pub fn compute_bounds(&self) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;
        for (_, cell, world) in self.traverse() {
            let Shape::Mesh(mesh) = &cell.shape else {
                continue;
            };
            let points: Vec<_> = mesh
                .positions
                .iter()
                .map(|p| world.transform_point3(p.as_dvec3()).as_vec3())
                .collect();
            if points.is_empty() {
                continue;
            }
            let mesh_bounds = BoundingBox::from_points(&points);
            match bounds.as_mut() {
                Some(total) => total.expand(&mesh_bounds),
                None => bounds = Some(mesh_bounds),
            }
        }
        bounds
    }

    /// Flags the root cell was written with.
    pub fn root_flags(&self) -> CellFlags {
        self.root().flags
    }
}

impl Index<CellId> for Scene {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

/// Iterator for traversing the scene graph.
struct SceneTraverser<'a> {
    scene: &'a Scene,
    stack: Vec<(CellId, DMat4)>,
}

impl<'a> SceneTraverser<'a> {
    fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            stack: vec![(scene.root, DMat4::IDENTITY)],
        }
    }
}

impl<'a> Iterator for SceneTraverser<'a> {
    type Item = (CellId, &'a Cell, DMat4);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, parent_transform) = self.stack.pop()?;
        let cell = &self.scene[id];
        let world_transform = parent_transform * cell.transformation.matrix();

        // Push children in reverse order so they're visited in file order
        for &child in cell.children().iter().rev() {
            self.stack.push((child, world_transform));
        }

        Some((id, cell, world_transform))
    }
}
