//! Text and text-list cells.

use cell_core::reader::at_least;
use cell_core::{Result, TokenReader};
use glam::DVec3;

use super::read_point;
use crate::shape::{Label, Shape};

/// How a text string is placed.
///
/// Type codes come in blocks of five: world text, two screen variants and
/// two unrotated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPlacement {
    /// Positioned and rotated with the cell.
    World,
    /// Fixed on the screen; not drawn by this loader.
    Screen,
    /// Positioned with the cell, always facing the viewer.
    Unrotated,
}

impl TextPlacement {
    /// Placement for a type code, given the first code of its block.
    pub fn from_code(type_code: i32, block_start: i32) -> Self {
        match type_code - block_start {
            0 => Self::World,
            1 | 2 => Self::Screen,
            _ => Self::Unrotated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub position: DVec3,
    pub text: String,
}

impl TextItem {
    fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let position = read_point(reader, "text position")?;
        let text = reader.read_text("text string")?;
        Ok(Self { position, text })
    }

    fn label(&self, font: u32) -> Label {
        Label {
            position: self.position.as_vec3(),
            text: self.text.clone(),
            font,
        }
    }
}

fn read_font(reader: &mut TokenReader<'_>) -> Result<u32> {
    Ok(reader.read_int_with("text font", at_least(0))? as u32)
}

fn labels(placement: TextPlacement, font: u32, items: &[TextItem]) -> Shape {
    match placement {
        TextPlacement::Screen => Shape::Empty,
        _ => Shape::Text(items.iter().map(|item| item.label(font)).collect()),
    }
}

/// A single string: `font x y z text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub placement: TextPlacement,
    pub font: u32,
    pub item: TextItem,
}

impl Text {
    pub fn read(reader: &mut TokenReader<'_>, placement: TextPlacement) -> Result<Self> {
        let font = read_font(reader)?;
        let item = TextItem::read(reader)?;
        Ok(Self {
            placement,
            font,
            item,
        })
    }

    pub fn shape(&self) -> Shape {
        labels(self.placement, self.font, std::slice::from_ref(&self.item))
    }
}

/// Several strings sharing a font: `font count (x y z text)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextList {
    pub placement: TextPlacement,
    pub font: u32,
    pub items: Vec<TextItem>,
}

impl TextList {
    pub fn read(reader: &mut TokenReader<'_>, placement: TextPlacement) -> Result<Self> {
        let font = read_font(reader)?;
        let count = reader.read_int_with("text list item count", at_least(1))?;
        let items = (0..count)
            .map(|_| TextItem::read(reader))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            placement,
            font,
            items,
        })
    }

    pub fn shape(&self) -> Shape {
        labels(self.placement, self.font, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_codes() {
        assert_eq!(TextPlacement::from_code(140, 140), TextPlacement::World);
        assert_eq!(TextPlacement::from_code(142, 140), TextPlacement::Screen);
        assert_eq!(TextPlacement::from_code(154, 150), TextPlacement::Unrotated);
    }

    #[test]
    fn test_read_text() {
        let mut reader = TokenReader::from_text("2 1 2 0 Dock\tDoor 3\n");
        let text = Text::read(&mut reader, TextPlacement::World).unwrap();
        assert_eq!(text.font, 2);
        assert_eq!(text.item.text, "Dock Door 3");
        match text.shape() {
            Shape::Text(labels) => {
                assert_eq!(labels.len(), 1);
                assert_eq!(labels[0].text, "Dock Door 3");
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_screen_text_is_not_drawn() {
        let mut reader = TokenReader::from_text("0 0 0 0\nStatus");
        let text = Text::read(&mut reader, TextPlacement::Screen).unwrap();
        assert_eq!(text.item.text, "Status");
        assert!(text.shape().is_empty());
    }

    #[test]
    fn test_read_text_list() {
        let text = "1 2\n0 0 0\nFirst\n5 0 0 Second\n";
        let mut reader = TokenReader::from_text(text);
        let list = TextList::read(&mut reader, TextPlacement::Unrotated).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].text, "First");
        assert_eq!(list.items[1].position, DVec3::new(5.0, 0.0, 0.0));
        assert_eq!(list.items[1].text, "Second");
    }

    #[test]
    fn test_empty_text_list_rejected() {
        let mut reader = TokenReader::from_text("1 0");
        assert!(TextList::read(&mut reader, TextPlacement::World).unwrap_err().is_parsing());
    }
}
