//! Mesh generation for cell scene primitives.
//!
//! All geometry is computed in double precision and only narrowed to `f32`
//! when a [`Mesh`] is emitted by [`MeshBuilder::build`].

pub mod builders;
pub mod mesh;
pub mod primitives;

pub use builders::DIVISIONS;
pub use mesh::*;
