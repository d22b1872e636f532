//! Snapshot types for table state assertions.

use serde::Serialize;

use crate::sizing::format_pixels;

/// Declared and rendered widths of a table and its cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    /// Declared table width.
    pub width: Option<String>,
    /// Rendered table width.
    pub rendered_width: String,
    /// Cells, row by row.
    pub rows: Vec<Vec<CellSnapshot>>,
}

/// Declared and rendered width of a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    /// Declared cell width.
    pub width: Option<String>,
    /// Rendered cell width.
    pub rendered_width: String,
}

/// Formats a rendered width to two decimals.
pub fn rendered(width: f64) -> String {
    format_pixels((width * 100.).round() / 100.)
}
