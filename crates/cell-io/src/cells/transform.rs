//! Cell transformations.

use cell_core::{Axis, Result, RotationOrder, TokenReader};
use glam::{DMat4, DVec3};

/// One step of a cell transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(DVec3),
    Rotate { axis: Axis, degrees: f64 },
    Scale(DVec3),
}

impl TransformOp {
    pub fn matrix(&self) -> DMat4 {
        match *self {
            Self::Translate(offset) => DMat4::from_translation(offset),
            Self::Rotate { axis, degrees } => {
                let angle = degrees.to_radians();
                match axis {
                    Axis::X => DMat4::from_rotation_x(angle),
                    Axis::Y => DMat4::from_rotation_y(angle),
                    Axis::Z => DMat4::from_rotation_z(angle),
                }
            }
            Self::Scale(factors) => DMat4::from_scale(factors),
        }
    }
}

/// Ordered transform list of a cell, outermost first: translation, the
/// non-zero rotations in the cell's rotation order, then scaling.
///
/// Cells without geometry data carry an empty (identity) list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transformation {
    ops: Vec<TransformOp>,
}

impl Transformation {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build the list from decoded geometry values.
    pub fn new(translation: DVec3, order: RotationOrder, rotation: DVec3, scale: DVec3) -> Self {
        let mut ops = vec![TransformOp::Translate(translation)];
        for axis in order.axes() {
            let degrees = match axis {
                Axis::X => rotation.x,
                Axis::Y => rotation.y,
                Axis::Z => rotation.z,
            };
            if degrees != 0.0 {
                ops.push(TransformOp::Rotate { axis, degrees });
            }
        }
        ops.push(TransformOp::Scale(scale));
        Self { ops }
    }

    /// Read translation, rotation order, rotation and scale.
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let translation = DVec3::new(
            reader.read_double("x translation")?,
            reader.read_double("y translation")?,
            reader.read_double("z translation")?,
        );
        let order = RotationOrder::read(reader)?;
        let rotation = DVec3::new(
            reader.read_double("x rotation")?,
            reader.read_double("y rotation")?,
            reader.read_double("z rotation")?,
        );
        let positive = |value: f64| value > 0.0;
        let scale = DVec3::new(
            reader.read_double_with("x scale factor", positive)?,
            reader.read_double_with("y scale factor", positive)?,
            reader.read_double_with("z scale factor", positive)?,
        );
        Ok(Self::new(translation, order, rotation, scale))
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Compose the list into a single local-to-parent matrix.
    pub fn matrix(&self) -> DMat4 {
        self.ops
            .iter()
            .fold(DMat4::IDENTITY, |matrix, op| matrix * op.matrix())
    }
}
