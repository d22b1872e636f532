//! Host document access.
//!
//! The engine never owns the table. Everything it knows about a table comes through
//! [`TableDom`], and every width it commits goes back through it. The host is expected to
//! reflow synchronously, so a read after a write sees the new geometry.

use std::fmt;

/// Text flow direction of an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Converts a raw horizontal pointer movement into growth of the trailing edge.
    ///
    /// In RTL tables the trailing edge is on the left, so moving the pointer right shrinks
    /// the table.
    pub fn edge_delta(self, raw_delta: f64) -> f64 {
        match self {
            Direction::Ltr => raw_delta,
            Direction::Rtl => -raw_delta,
        }
    }
}

pub trait TableDom {
    /// Handle to a table, row or cell element.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Current rendered width in pixels, regardless of the declared unit.
    fn rendered_width(&self, element: &Self::Element) -> f64;

    /// Current rendered height in pixels.
    fn rendered_height(&self, element: &Self::Element) -> f64;

    /// X position of the element's left border edge, in pixels.
    fn rendered_left(&self, element: &Self::Element) -> f64;

    /// Inline style property value, if set.
    fn style(&self, element: &Self::Element, property: &str) -> Option<String>;

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    fn remove_style(&mut self, element: &Self::Element, property: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    /// Computed text direction of the element.
    fn direction(&self, element: &Self::Element) -> Direction;

    /// Layout container of the element, if any.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Rows of a table, in document order.
    fn rows(&self, table: &Self::Element) -> Vec<Self::Element>;

    /// Cells of a row, in document order.
    fn cells(&self, row: &Self::Element) -> Vec<Self::Element>;

    /// All cells of a table, row by row.
    fn table_cells(&self, table: &Self::Element) -> Vec<Self::Element> {
        self.rows(table)
            .iter()
            .flat_map(|row| self.cells(row))
            .collect()
    }
}
