//! Core types for the cell scene format.
//!
//! This crate provides the pieces shared by the mesh builders and the scene
//! loader:
//! - The two-kind error type and its `Result` alias
//! - The field-oriented token reader over a cell stream
//! - Cell flags and the attribute enumerations (colors, styles, joints)

pub mod attributes;
pub mod error;
pub mod field;
pub mod flags;
pub mod reader;

pub use attributes::*;
pub use error::*;
pub use flags::CellFlags;
pub use reader::TokenReader;
