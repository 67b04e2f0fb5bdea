//! The attribute section of a cell record.

use cell_core::{CellColor, DisplayStyle, LineStyle, LineWidth, Result, TokenReader};
use tracing::warn;

/// Longest name the legacy tools accept without complaint.
const NAME_WARNING_LENGTH: usize = 22;

/// Drawing attributes of a cell.
///
/// Missing colors are inherited from the parent cell, then from the scene.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    pub face_color: Option<CellColor>,
    pub edge_color: Option<CellColor>,
    pub line_style: LineStyle,
    pub line_width: LineWidth,
    pub display_style: DisplayStyle,
    pub name: Option<String>,
}

impl Attributes {
    /// Read face color, edge color, line style, line width, display style
    /// and name.
    ///
    /// With `colors_inherited` the two colors are still consumed but not kept.
    pub fn read(reader: &mut TokenReader<'_>, colors_inherited: bool) -> Result<Self> {
        let face_color = CellColor::read(reader)?;
        let edge_color = CellColor::read(reader)?;
        let line_style = LineStyle::read(reader)?;
        let line_width = LineWidth::read(reader)?;
        let display_style = DisplayStyle::read(reader)?;
        let name = reader.read_string_with("cell name", is_valid_name)?;
        if name.len() > NAME_WARNING_LENGTH {
            warn!(
                name = name.as_str(),
                line = reader.line_number(),
                "cell name is unusually long"
            );
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            warn!(
                name = name.as_str(),
                line = reader.line_number(),
                "cell name does not start with a letter"
            );
        }

        let (face_color, edge_color) = if colors_inherited {
            (None, None)
        } else {
            (Some(face_color), Some(edge_color))
        };
        Ok(Self {
            face_color,
            edge_color,
            line_style,
            line_width,
            display_style,
            name: Some(name),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Names are ASCII letters, digits and underscores.
fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
