//! cell-io: Loader for legacy cell scene files.
//!
//! A cell file is a whitespace-delimited stream holding one root cell. Set
//! cells nest further cells, instances pull in named definitions, and the
//! solid primitives expand into triangle meshes as they are read.
//!
//! # Quick Start
//!
//! ```ignore
//! use cell_io::{read_file, ReadOptions};
//!
//! let scene = read_file("plant/workcell.cel", &ReadOptions::default())?;
//! for (id, cell, world) in scene.traverse() {
//!     let attributes = scene.render_attributes(id);
//!     // hand cell.shape, attributes and world to the drawing layer
//! }
//! ```
//!
//! # Errors
//!
//! Reading stops at the first problem. Malformed numbers and matrix-form
//! geometry are [`CellError::IncorrectFormat`]; everything else, from range
//! checks to a truncated stream, is [`CellError::Parsing`]. Both carry the
//! line number.

pub mod cells;
pub mod options;
pub mod registry;
pub mod scene;
pub mod shape;

pub use cell_core::{CellColor, CellError, CellFlags, DisplayStyle, LineStyle, LineWidth, Result, TokenReader};
pub use cell_mesh::{BoundingBox, Mesh};
pub use cells::{Cell, CellId, CellKind};
pub use options::{ReadOptions, MAX_NESTING_DEPTH};
pub use registry::CellRegistry;
pub use scene::{parse, Scene, SceneParser};
pub use shape::{Label, RenderAttributes, Shape};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

/// Reads cell scenes with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct CellReader {
    options: ReadOptions,
}

impl CellReader {
    /// File extensions cell scenes are usually saved with.
    pub const EXTENSIONS: &'static [&'static str] = &["cel", "cell"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Quick check that `data` starts with a known cell type code.
    pub fn can_read(&self, data: &[u8]) -> bool {
        let Some(first) = data
            .split(|b| b.is_ascii_whitespace())
            .find(|field| !field.is_empty())
        else {
            return false;
        };
        std::str::from_utf8(first)
            .ok()
            .and_then(cell_core::field::parse_integer)
            .is_some_and(|code| CellRegistry::global().lookup(code, false).is_some())
    }

    /// Read a scene from any buffered source.
    pub fn read(&self, source: impl BufRead) -> Result<Scene> {
        parse(TokenReader::new(source), self.options.clone(), None)
    }

    pub fn read_bytes(&self, data: &[u8]) -> Result<Scene> {
        self.read(data)
    }

    pub fn read_str(&self, text: &str) -> Result<Scene> {
        self.read(text.as_bytes())
    }

    /// Read a scene from disk. The path is kept so references inside the
    /// scene resolve relative to it.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Scene> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|err| CellError::parsing(0, format!("cannot open {}: {err}", path.display())))?;
        let scene = parse(
            TokenReader::new(BufReader::new(file)),
            self.options.clone(),
            Some(path.to_path_buf()),
        )?;
        info!(
            path = %path.display(),
            cells = scene.cell_count(),
            definitions = scene.definition_count(),
            "loaded cell scene"
        );
        Ok(scene)
    }
}

/// Read a scene held in memory.
///
/// # Example
///
/// ```ignore
/// use cell_io::{read, ReadOptions};
///
/// let scene = read(b"700 0 0", &ReadOptions::default())?;
/// assert_eq!(scene.cell_count(), 1);
/// ```
pub fn read(data: &[u8], options: &ReadOptions) -> Result<Scene> {
    CellReader::with_options(options.clone()).read_bytes(data)
}

/// Read a scene file.
pub fn read_file(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Scene> {
    CellReader::with_options(options.clone()).read_file(path)
}
