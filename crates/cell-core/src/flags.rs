//! Cell flag bits.

use tracing::debug;

use crate::error::Result;
use crate::reader::{between, TokenReader};

/// The flags word leading every cell record.
///
/// It decides which optional sections follow the type code: bounding box,
/// attributes, joint data and geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellFlags(u16);

impl CellFlags {
    /// An attribute section follows.
    pub const ATTRIBUTES_PRESENT: u16 = 1 << 0;
    /// A joint record follows the attributes.
    pub const JOINT_DATA_PRESENT: u16 = 1 << 1;
    /// A transformation record follows the joint.
    pub const GEOMETRY_DATA_PRESENT: u16 = 1 << 2;
    /// The transformation is stored as a matrix rather than as
    /// translation, rotation and scale.
    pub const GEOMETRY_IN_MATRIX_FORM: u16 = 1 << 3;
    /// Colors in the attribute section are placeholders; the cell inherits
    /// its parent's.
    pub const COLORS_INHERITED: u16 = 1 << 4;
    /// Set by some writers; meaning unknown, ignored on read.
    pub const RESERVED: u16 = 1 << 5;
    /// A stored bounding box precedes the attributes.
    pub const BOUNDING_BOX_PRESENT: u16 = 1 << 6;

    const KNOWN: u16 = 0x7f;

    /// Wrap a raw flags word. Unknown bits are kept.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw flags word.
    pub const fn bits(self) -> u16 {
        self.0
    }

    const fn has(self, bit: u16) -> bool {
        self.0 & bit != 0
    }

    /// See [`CellFlags::ATTRIBUTES_PRESENT`].
    pub const fn attributes_present(self) -> bool {
        self.has(Self::ATTRIBUTES_PRESENT)
    }

    /// See [`CellFlags::JOINT_DATA_PRESENT`].
    pub const fn joint_data_present(self) -> bool {
        self.has(Self::JOINT_DATA_PRESENT)
    }

    /// See [`CellFlags::GEOMETRY_DATA_PRESENT`].
    pub const fn geometry_data_present(self) -> bool {
        self.has(Self::GEOMETRY_DATA_PRESENT)
    }

    /// See [`CellFlags::GEOMETRY_IN_MATRIX_FORM`].
    pub const fn geometry_in_matrix_form(self) -> bool {
        self.has(Self::GEOMETRY_IN_MATRIX_FORM)
    }

    /// See [`CellFlags::COLORS_INHERITED`].
    pub const fn colors_inherited(self) -> bool {
        self.has(Self::COLORS_INHERITED)
    }

    /// See [`CellFlags::BOUNDING_BOX_PRESENT`].
    pub const fn bounding_box_present(self) -> bool {
        self.has(Self::BOUNDING_BOX_PRESENT)
    }

    /// Read the flags field.
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let value = reader.read_int_with("cell flags", between(0, i32::from(u16::MAX)))?;
        let flags = Self(value as u16);
        if flags.0 & !Self::KNOWN != 0 {
            debug!(flags = flags.0, "cell flags carry unknown bits");
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bits() {
        let flags = CellFlags::from_bits(0b101_0101);
        assert!(flags.attributes_present());
        assert!(!flags.joint_data_present());
        assert!(flags.geometry_data_present());
        assert!(!flags.geometry_in_matrix_form());
        assert!(flags.colors_inherited());
        assert!(flags.bounding_box_present());
    }

    #[test]
    fn test_read_flags() {
        let mut reader = TokenReader::from_text("5");
        let flags = CellFlags::read(&mut reader).unwrap();
        assert_eq!(flags.bits(), 5);
        assert!(flags.attributes_present());
        assert!(flags.geometry_data_present());
    }

    #[test]
    fn test_negative_flags_rejected() {
        let mut reader = TokenReader::from_text("-1");
        assert!(CellFlags::read(&mut reader).unwrap_err().is_parsing());
    }

    #[test]
    fn test_default_is_empty() {
        let flags = CellFlags::default();
        assert_eq!(flags.bits(), 0);
        assert!(!flags.attributes_present());
    }
}
