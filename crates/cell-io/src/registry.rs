//! Cell type codes and the readers behind them.
//!
//! One static list describes every supported type. It is split once into
//! two lookup tables: definitions, which may only appear where an instance
//! pulls one in, and every other cell type.

use std::sync::OnceLock;

use cell_core::Result;
use indexmap::IndexMap;

use crate::cells::{
    CellContext, CellKind, CircularArc, Cone, Cylinder, EmbeddedFile, FileReference, Frustum,
    Hemisphere, Instance, Polyhedron, Rectangle, Set, Tetrahedron, Text, TextList, TextPlacement,
    Trapezoid, VectorList,
};
use crate::scene::SceneParser;

/// Reads the kind-specific fields of a cell whose header is already read.
pub type CellReadFn = fn(&mut SceneParser<'_>, CellContext) -> Result<CellKind>;

/// A supported cell type.
#[derive(Clone, Copy)]
pub struct CellType {
    pub code: i32,
    pub name: &'static str,
    /// Only valid where a definition is expected.
    pub definition: bool,
    pub read: CellReadFn,
}

impl std::fmt::Debug for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellType")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

const fn regular(code: i32, name: &'static str, read: CellReadFn) -> CellType {
    CellType {
        code,
        name,
        definition: false,
        read,
    }
}

const TEXT_CODES: i32 = 140;
const TEXT_LIST_CODES: i32 = 150;

static CELL_TYPES: &[CellType] = &[
    regular(100, "triad", read_triad),
    regular(115, "vector list", read_vector_list),
    regular(125, "polyhedron", read_polyhedron),
    regular(130, "arc", read_arc),
    regular(131, "arc", read_arc),
    regular(140, "world text", read_text),
    regular(141, "screen text", read_text),
    regular(142, "screen text", read_text),
    regular(143, "unrotated text", read_text),
    regular(144, "unrotated text", read_text),
    regular(150, "world text list", read_text_list),
    regular(151, "screen text list", read_text_list),
    regular(152, "screen text list", read_text_list),
    regular(153, "unrotated text list", read_text_list),
    regular(154, "unrotated text list", read_text_list),
    CellType {
        code: 308,
        name: "definition",
        definition: true,
        read: read_definition,
    },
    regular(310, "trapezoid", read_trapezoid),
    regular(311, "tetrahedron", read_tetrahedron),
    regular(315, "rectangle", read_rectangle),
    regular(330, "hemisphere", read_hemisphere),
    regular(331, "hemisphere", read_hemisphere),
    regular(340, "cone", read_cone),
    regular(341, "cone", read_cone),
    regular(350, "cylinder", read_cylinder),
    regular(351, "cylinder", read_cylinder),
    regular(360, "frustum", read_frustum),
    regular(361, "frustum", read_frustum),
    regular(388, "file reference", read_file_reference),
    regular(408, "instance", read_instance),
    regular(599, "embedded file", read_embedded_file),
    regular(700, "set", read_set),
    regular(7000, "main set", read_set),
    regular(10000, "root set", read_set),
];

/// Lookup tables from type code to cell type.
#[derive(Debug)]
pub struct CellRegistry {
    regular: IndexMap<i32, &'static CellType>,
    definitions: IndexMap<i32, &'static CellType>,
}

impl CellRegistry {
    /// The registry of all supported types, built on first use.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<CellRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::from_types(CELL_TYPES))
    }

    fn from_types(types: &'static [CellType]) -> Self {
        let mut regular = IndexMap::new();
        let mut definitions = IndexMap::new();
        for cell_type in types {
            let table = if cell_type.definition {
                &mut definitions
            } else {
                &mut regular
            };
            table.insert(cell_type.code, cell_type);
        }
        Self {
            regular,
            definitions,
        }
    }

    /// Find `code` in the definition table or in the regular one.
    pub fn lookup(&self, code: i32, definition: bool) -> Option<&'static CellType> {
        let table = if definition {
            &self.definitions
        } else {
            &self.regular
        };
        table.get(&code).copied()
    }

    pub fn regular_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.regular.keys().copied()
    }

    pub fn definition_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.definitions.keys().copied()
    }
}

fn read_triad(_parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Triad)
}

fn read_vector_list(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::VectorList(VectorList::read(parser.reader())?))
}

fn read_polyhedron(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Polyhedron(Polyhedron::read(parser.reader())?))
}

fn read_arc(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Arc(CircularArc::read(parser.reader())?))
}

fn read_text(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    let placement = TextPlacement::from_code(context.type_code, TEXT_CODES);
    Ok(CellKind::Text(Text::read(parser.reader(), placement)?))
}

fn read_text_list(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    let placement = TextPlacement::from_code(context.type_code, TEXT_LIST_CODES);
    Ok(CellKind::TextList(TextList::read(parser.reader(), placement)?))
}

fn read_definition(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Definition(Set::read(parser, context)?))
}

fn read_trapezoid(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Trapezoid(Trapezoid::read(parser.reader())?))
}

fn read_tetrahedron(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Tetrahedron(Tetrahedron::read(parser.reader())?))
}

fn read_rectangle(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Rectangle(Rectangle::read(parser.reader())?))
}

fn read_hemisphere(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Hemisphere(Hemisphere::read(parser.reader())?))
}

fn read_cone(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Cone(Cone::read(parser.reader())?))
}

fn read_cylinder(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Cylinder(Cylinder::read(parser.reader())?))
}

fn read_frustum(parser: &mut SceneParser<'_>, _context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Frustum(Frustum::read(parser.reader())?))
}

fn read_file_reference(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    Ok(CellKind::FileReference(FileReference::read(parser, context)?))
}

fn read_instance(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Instance(Instance::read(parser, context)?))
}

fn read_embedded_file(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    Ok(CellKind::EmbeddedFile(EmbeddedFile::read(parser, context)?))
}

fn read_set(parser: &mut SceneParser<'_>, context: CellContext) -> Result<CellKind> {
    Ok(CellKind::Set(Set::read(parser, context)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_disjoint() {
        let registry = CellRegistry::global();
        assert_eq!(registry.definition_codes().collect::<Vec<_>>(), vec![308]);
        assert!(registry.regular_codes().all(|code| code != 308));
        assert_eq!(registry.regular_codes().count(), CELL_TYPES.len() - 1);
    }

    #[test]
    fn test_lookup() {
        let registry = CellRegistry::global();
        assert_eq!(registry.lookup(350, false).map(|t| t.name), Some("cylinder"));
        assert!(registry.lookup(350, true).is_none());
        assert!(registry.lookup(308, false).is_none());
        assert!(registry.lookup(308, true).is_some());
        assert!(registry.lookup(555, false).is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<i32> = CELL_TYPES.iter().map(|t| t.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CELL_TYPES.len());
    }
}
