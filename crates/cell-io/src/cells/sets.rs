//! Cells that hold other cells: sets, definitions, instances and files.

use cell_core::reader::at_least;
use cell_core::Result;
use tracing::debug;

use super::{CellContext, CellId};
use crate::scene::SceneParser;

/// An ordered group of child cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Set {
    pub children: Vec<CellId>,
}

impl Set {
    /// Read the child count, then each child in file order.
    pub fn read(parser: &mut SceneParser<'_>, context: CellContext) -> Result<Self> {
        let count = parser.reader().read_int_with("set child count", at_least(0))?;
        let mut children = Vec::new();
        for _ in 0..count {
            children.push(parser.read_next_cell(Some(context.id), false)?);
        }
        Ok(Self { children })
    }
}

/// A use of a named definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub definition: CellId,
}

impl Instance {
    /// Read the definition name and resolve it.
    ///
    /// A name not defined yet means the definition follows immediately in
    /// the stream; it is read in place and must carry the same name.
    pub fn read(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<Self> {
        let name = parser.reader().read_string("instance definition name")?;
        let definition = match parser.definition(&name) {
            Some(id) => id,
            None => {
                debug!(name = name.as_str(), "reading definition in place");
                parser.read_definition(&name)?
            }
        };
        Ok(Self { name, definition })
    }
}

/// A reference to another cell file. Recorded, not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReference {
    pub file_name: String,
}

impl FileReference {
    pub fn read(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<Self> {
        let file_name = parser.reader().read_string("referenced file name")?;
        Ok(Self { file_name })
    }
}

/// The contents of another cell file copied into this one: the source
/// file name followed by that file's root cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFile {
    pub file_name: String,
    pub contents: CellId,
}

impl EmbeddedFile {
    pub fn read(parser: &mut SceneParser<'_>, context: CellContext) -> Result<Self> {
        let file_name = parser.reader().read_string("embedded file name")?;
        let contents = parser.read_next_cell(Some(context.id), false)?;
        Ok(Self {
            file_name,
            contents,
        })
    }
}
