//! Recursive-descent construction of a scene.

use std::path::PathBuf;

use cell_core::{CellError, Result, TokenReader};
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::Scene;
use crate::cells::{Cell, CellContext, CellHeader, CellId};
use crate::options::ReadOptions;
use crate::registry::{CellRegistry, CellType};

/// A scene being read.
///
/// Owns the token reader and the definition table while cells are parsed,
/// and turns into an immutable [`Scene`] with [`SceneParser::finish`].
pub struct SceneParser<'a> {
    reader: TokenReader<'a>,
    options: ReadOptions,
    registry: &'static CellRegistry,
    /// Slots are reserved before a cell's children are read, so parents
    /// always have smaller ids than their children.
    cells: Vec<Option<Cell>>,
    definitions: IndexMap<String, CellId>,
    depth: usize,
}

impl<'a> SceneParser<'a> {
    pub fn new(reader: TokenReader<'a>, options: ReadOptions) -> Self {
        Self {
            reader,
            options,
            registry: CellRegistry::global(),
            cells: Vec::new(),
            definitions: IndexMap::new(),
            depth: 0,
        }
    }

    pub fn reader(&mut self) -> &mut TokenReader<'a> {
        &mut self.reader
    }

    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// A definition registered so far.
    pub fn definition(&self, name: &str) -> Option<CellId> {
        self.definitions.get(name).copied()
    }

    /// A cell that has been read completely.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0).and_then(Option::as_ref)
    }

    /// Read one complete cell, children included.
    ///
    /// With `definition` set only definition type codes are accepted and the
    /// cell is registered under its name once read; otherwise definition
    /// codes are rejected like any unknown code.
    pub fn read_next_cell(&mut self, parent: Option<CellId>, definition: bool) -> Result<CellId> {
        let expected = definition.then_some(Expected::Any);
        self.read_entry(parent, expected)
    }

    /// Read the definition an instance refers to, which must be named
    /// `name`. The name is checked before the definition is registered.
    pub fn read_definition(&mut self, name: &str) -> Result<CellId> {
        self.read_entry(None, Some(Expected::Named(name)))
    }

    fn read_entry(&mut self, parent: Option<CellId>, expected: Option<Expected<'_>>) -> Result<CellId> {
        let definition = expected.is_some();
        let code = self.reader.read_int("cell type code")?;
        let cell_type = self.registry.lookup(code, definition).ok_or_else(|| {
            let message = if definition {
                format!("expected a definition, found cell type code {code}")
            } else {
                format!("unknown or unsupported cell type code {code}")
            };
            CellError::parsing(self.reader.line_number(), message)
        })?;
        if self.depth >= self.options.max_depth {
            return Err(CellError::parsing(
                self.reader.line_number(),
                format!("cells nested deeper than {} levels", self.options.max_depth),
            ));
        }

        let id = CellId(self.cells.len());
        self.cells.push(None);
        debug!(
            code,
            kind = cell_type.name,
            id = id.0,
            line = self.reader.line_number(),
            "reading cell"
        );

        self.depth += 1;
        let cell = self.read_cell(id, cell_type, parent);
        self.depth -= 1;
        let cell = cell?;

        if let Some(expected) = expected {
            self.register(&cell, expected)?;
        }
        self.cells[id.0] = Some(cell);
        Ok(id)
    }

    fn read_cell(&mut self, id: CellId, cell_type: &CellType, parent: Option<CellId>) -> Result<Cell> {
        let header = CellHeader::read(&mut self.reader)?;
        let context = CellContext {
            id,
            type_code: cell_type.code,
        };
        let kind = (cell_type.read)(self, context)?;
        let shape = kind.shape();
        Ok(Cell {
            id,
            type_code: cell_type.code,
            parent,
            flags: header.flags,
            attributes: header.attributes,
            joint: header.joint,
            transformation: header.transformation,
            kind,
            shape,
        })
    }

    fn register(&mut self, cell: &Cell, expected: Expected<'_>) -> Result<()> {
        if let Expected::Named(wanted) = expected {
            let found = cell.name().unwrap_or_default();
            if found != wanted {
                return Err(CellError::parsing(
                    self.reader.line_number(),
                    format!("instance refers to definition {wanted:?} but the definition that follows is {found:?}"),
                ));
            }
        }
        let name = cell
            .name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CellError::parsing(self.reader.line_number(), "definition has no name"))?;
        if self.definitions.contains_key(name) {
            return Err(CellError::parsing(
                self.reader.line_number(),
                format!("definition {name:?} is defined more than once"),
            ));
        }
        trace!(name, id = cell.id.0, "registered definition");
        self.definitions.insert(name.to_string(), cell.id);
        Ok(())
    }

    /// Freeze the parsed cells into a scene rooted at `root`.
    pub fn finish(self, root: CellId, source: Option<PathBuf>) -> Result<Scene> {
        let line = self.reader.line_number();
        let cells = self
            .cells
            .into_iter()
            .collect::<Option<Vec<Cell>>>()
            .ok_or_else(|| CellError::parsing(line, "scene holds a partially read cell"))?;
        Ok(Scene {
            cells,
            root,
            definitions: self.definitions,
            options: self.options,
            source,
        })
    }
}

/// Name a definition being read must carry.
#[derive(Debug, Clone, Copy)]
enum Expected<'n> {
    Any,
    Named(&'n str),
}

/// Read a whole scene: the stream holds exactly one root cell.
pub fn parse(reader: TokenReader<'_>, options: ReadOptions, source: Option<PathBuf>) -> Result<Scene> {
    let mut parser = SceneParser::new(reader, options);
    let root = parser.read_next_cell(None, false)?;
    let scene = parser.finish(root, source)?;
    debug!(
        cells = scene.cell_count(),
        definitions = scene.definition_count(),
        "cell scene read"
    );
    Ok(scene)
}
