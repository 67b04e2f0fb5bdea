//! Options for reading cell files.

use std::path::{Path, PathBuf};

use cell_core::CellColor;
use serde::{Deserialize, Serialize};

/// Default limit on cell nesting.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Options for reading cell files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Directory used to resolve relative file references. When absent,
    /// references resolve against the directory of the file being read.
    pub base_location: Option<PathBuf>,
    /// Face color for cells with no color anywhere up their parent chain.
    pub default_face_color: CellColor,
    /// Edge color for cells with no color anywhere up their parent chain.
    pub default_edge_color: CellColor,
    /// Maximum nesting of sets, instances and embedded files.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            base_location: None,
            default_face_color: CellColor::Red,
            default_edge_color: CellColor::Red,
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl ReadOptions {
    /// Create default read options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve file references against `location`.
    pub fn with_base_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.base_location = Some(location.into());
        self
    }

    /// Set the scene default colors.
    pub fn with_default_colors(mut self, face: CellColor, edge: CellColor) -> Self {
        self.default_face_color = face;
        self.default_edge_color = edge;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Resolve a file name found in a cell stream.
    ///
    /// Absolute names are returned unchanged. Relative names are joined to
    /// the base location if one is set, otherwise to the directory holding
    /// `current_file`, otherwise left relative.
    pub fn resolve_reference(&self, name: &str, current_file: Option<&Path>) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match (&self.base_location, current_file.and_then(Path::parent)) {
            (Some(base), _) => base.join(path),
            (None, Some(dir)) => dir.join(path),
            (None, None) => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReadOptions::new();
        assert_eq!(options.default_face_color, CellColor::Red);
        assert_eq!(options.max_depth, MAX_NESTING_DEPTH);
        assert!(options.base_location.is_none());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = ReadOptions::from_json(r#"{ "default_edge_color": "Blue" }"#).unwrap();
        assert_eq!(options.default_edge_color, CellColor::Blue);
        assert_eq!(options.default_face_color, CellColor::Red);
    }

    #[test]
    fn test_resolve_against_current_file() {
        let options = ReadOptions::new();
        let resolved = options.resolve_reference("part.cel", Some(Path::new("models/cell/main.cel")));
        assert_eq!(resolved, PathBuf::from("models/cell/part.cel"));
    }

    #[test]
    fn test_base_location_overrides_current_file() {
        let options = ReadOptions::new().with_base_location("/library");
        let resolved = options.resolve_reference("part.cel", Some(Path::new("models/main.cel")));
        assert_eq!(resolved, PathBuf::from("/library/part.cel"));
    }

    #[test]
    fn test_unresolvable_stays_relative() {
        let options = ReadOptions::new();
        assert_eq!(options.resolve_reference("part.cel", None), PathBuf::from("part.cel"));
    }
}
