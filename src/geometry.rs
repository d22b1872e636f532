//! Read-only geometry and declared size queries.

use crate::dom::TableDom;

/// Attribute the host editor uses to shadow inline styles while an object is being resized.
pub const DATA_STYLE_ATTRIBUTE: &str = "data-mce-style";

/// Current rendered width of the element in pixels.
pub fn rendered_width<D: TableDom>(dom: &D, element: &D::Element) -> f64 {
    dom.rendered_width(element)
}

/// Current rendered height of the element in pixels.
pub fn rendered_height<D: TableDom>(dom: &D, element: &D::Element) -> f64 {
    dom.rendered_height(element)
}

/// Raw declared width of the element.
///
/// The inline `width` style wins over the legacy `width` attribute. Blank values count as
/// absent.
pub fn declared_width<D: TableDom>(dom: &D, element: &D::Element) -> Option<String> {
    dom.style(element, "width")
        .or_else(|| dom.attribute(element, "width"))
        .map(|width| width.trim().to_owned())
        .filter(|width| !width.is_empty())
}

/// Whether a raw width string is expressed as a percentage.
pub fn is_percentage(raw: &str) -> bool {
    raw.trim_end().ends_with('%')
}

/// Whether the element currently declares a percentage width.
pub fn has_percentage_width<D: TableDom>(dom: &D, element: &D::Element) -> bool {
    declared_width(dom, element).is_some_and(|raw| is_percentage(&raw))
}

/// Removes the host's shadow style attribute from the table and all of its cells.
pub fn remove_data_style<D: TableDom>(dom: &mut D, table: &D::Element) {
    dom.remove_attribute(table, DATA_STYLE_ATTRIBUTE);
    for cell in dom.table_cells(table) {
        dom.remove_attribute(&cell, DATA_STYLE_ATTRIBUTE);
    }
}
