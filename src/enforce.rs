//! One-shot conversions of a table's sizing mode.
//!
//! All conversions take the table's current rendered geometry as the source of truth and
//! rewrite the declared widths of the table and every cell to match it.

use tracing::debug;

use crate::dom::{Direction, TableDom};
use crate::geometry::{declared_width, is_percentage, rendered_width};
use crate::sizing::{
    column_cells, column_percentage_widths, column_pixel_widths, format_percentage,
    set_column_widths, SizeStrategy,
};

/// Sizing context of a table at the time of a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TableSizing {
    direction: Direction,
    strategy: SizeStrategy,
}

impl TableSizing {
    fn read<D: TableDom>(dom: &D, table: &D::Element) -> Self {
        Self {
            direction: dom.direction(table),
            strategy: SizeStrategy::choose(dom, table),
        }
    }
}

fn cells_match_unit<D: TableDom>(dom: &D, table: &D::Element, percentage: bool) -> bool {
    dom.table_cells(table).iter().all(|cell| {
        declared_width(dom, cell).is_some_and(|raw| is_percentage(&raw) == percentage)
    })
}

/// Rewrites the table and its columns into percentages.
///
/// The table becomes a percentage of its container and each column a percentage of the
/// table. Tables already sized in percentages throughout are left untouched.
pub fn enforce_percentage<D: TableDom>(dom: &mut D, table: &D::Element) {
    let _span = tracy_client::span!("enforce_percentage");

    let sizing = TableSizing::read(dom, table);
    if sizing.strategy.is_percentage() && cells_match_unit(dom, table, true) {
        debug!("table is already sized in percentages");
        return;
    }

    let table_width = rendered_width(dom, table);
    let container_width = dom
        .parent(table)
        .map(|parent| rendered_width(dom, &parent))
        .filter(|width| *width > 0.)
        .unwrap_or(table_width);

    let widths = column_percentage_widths(dom, table, sizing.direction);
    let table_percentage = if container_width > 0. {
        table_width / container_width * 100.
    } else {
        100.
    };
    debug!(
        "converting table to percentages: {table_width}px -> {}, {sizing:?}",
        format_percentage(table_percentage)
    );

    let target = SizeStrategy::Percentage {
        width: table_percentage,
        pixel_width: table_width,
    };
    set_column_widths(dom, table, &widths, &target);
    target.set_element_width(dom, table, table_percentage);
    dom.remove_attribute(table, "width");
}

/// Rewrites the table and its columns into absolute pixels.
pub fn enforce_pixels<D: TableDom>(dom: &mut D, table: &D::Element) {
    let _span = tracy_client::span!("enforce_pixels");

    let sizing = TableSizing::read(dom, table);
    let table_width = rendered_width(dom, table);
    let widths = column_pixel_widths(dom, table, sizing.direction);
    debug!("converting table to pixels: {table_width}px, {sizing:?}");

    let target = SizeStrategy::Pixel { width: table_width };
    set_column_widths(dom, table, &widths, &target);
    target.set_element_width(dom, table, table_width);
    dom.remove_attribute(table, "width");
}

/// Strips all declared widths so that the table sizes itself to its content.
pub fn enforce_none<D: TableDom>(dom: &mut D, table: &D::Element) {
    let _span = tracy_client::span!("enforce_none");

    debug!("removing declared table widths");
    dom.remove_style(table, "width");
    dom.remove_attribute(table, "width");
    for cell in column_cells(dom, table).into_iter().flatten() {
        dom.remove_style(&cell, "width");
        dom.remove_attribute(&cell, "width");
    }
}

/// Bakes the computed width of every cell into an explicit inline pixel width.
pub fn sync_pixels<D: TableDom>(dom: &mut D, table: &D::Element) {
    let _span = tracy_client::span!("sync_pixels");

    // Measure everything first: writing a width can reflow the cells after it.
    let cells: Vec<_> = dom
        .table_cells(table)
        .into_iter()
        .map(|cell| {
            let width = rendered_width(dom, &cell);
            (cell, width)
        })
        .collect();

    let pixels = SizeStrategy::Pixel {
        width: rendered_width(dom, table),
    };
    for (cell, width) in cells {
        pixels.set_element_width(dom, &cell, width);
        dom.remove_attribute(&cell, "width");
    }
}
