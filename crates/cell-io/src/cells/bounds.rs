//! Stored bounding boxes.
//!
//! Some writers store a bounding box ahead of the attributes. It is checked
//! for consistency, then thrown away; bounds are recomputed from meshes.

use cell_core::reader::at_least;
use cell_core::{Result, TokenReader};
use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredBounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl StoredBounds {
    /// Read `xmin xmax ymin ymax zmin zmax`; each maximum must not be below
    /// its minimum.
    pub fn read(reader: &mut TokenReader<'_>) -> Result<Self> {
        let mut min = DVec3::ZERO;
        let mut max = DVec3::ZERO;
        for (axis, label) in ["x", "y", "z"].into_iter().enumerate() {
            min[axis] = reader.read_double(&format!("bounding box {label} minimum"))?;
            max[axis] = reader.read_double_with(
                &format!("bounding box {label} maximum"),
                at_least(min[axis]),
            )?;
        }
        Ok(Self { min, max })
    }
}
