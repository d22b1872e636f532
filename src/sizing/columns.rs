use super::strategy::SizeStrategy;
use crate::dom::{Direction, TableDom};
use crate::geometry::rendered_width;

/// Cells of the widest row, which define the table's columns.
fn reference_row<D: TableDom>(dom: &D, table: &D::Element) -> Vec<D::Element> {
    dom.rows(table)
        .iter()
        .map(|row| dom.cells(row))
        .fold(Vec::new(), |widest, cells| {
            if cells.len() > widest.len() {
                cells
            } else {
                widest
            }
        })
}

/// Cells of the table grouped by column index.
///
/// Rows shorter than the widest row simply don't contribute to the trailing columns.
pub fn column_cells<D: TableDom>(dom: &D, table: &D::Element) -> Vec<Vec<D::Element>> {
    let mut columns: Vec<Vec<D::Element>> = Vec::new();
    for row in dom.rows(table) {
        for (idx, cell) in dom.cells(&row).into_iter().enumerate() {
            if columns.len() <= idx {
                columns.resize_with(idx + 1, Vec::new);
            }
            columns[idx].push(cell);
        }
    }
    columns
}

/// Rendered width of every column in pixels.
///
/// Columns are measured between the start edges of neighboring cells, which is the left
/// edge in LTR tables and the right edge in RTL tables. The last column uses its own
/// rendered width.
pub fn column_pixel_widths<D: TableDom>(
    dom: &D,
    table: &D::Element,
    direction: Direction,
) -> Vec<f64> {
    let cells = reference_row(dom, table);

    let start_edge = |cell: &D::Element| match direction {
        Direction::Ltr => dom.rendered_left(cell),
        Direction::Rtl => dom.rendered_left(cell) + dom.rendered_width(cell),
    };

    let mut widths = Vec::with_capacity(cells.len());
    for (idx, cell) in cells.iter().enumerate() {
        let width = match cells.get(idx + 1) {
            Some(next) => match direction {
                Direction::Ltr => start_edge(next) - start_edge(cell),
                Direction::Rtl => start_edge(cell) - start_edge(next),
            },
            None => dom.rendered_width(cell),
        };
        widths.push(f64::max(0., width));
    }
    widths
}

/// Rendered width of every column as a percentage of the rendered table width.
pub fn column_percentage_widths<D: TableDom>(
    dom: &D,
    table: &D::Element,
    direction: Direction,
) -> Vec<f64> {
    let table_width = rendered_width(dom, table);
    let widths = column_pixel_widths(dom, table, direction);
    if table_width <= 0. {
        return vec![0.; widths.len()];
    }

    widths
        .into_iter()
        .map(|width| width / table_width * 100.)
        .collect()
}

/// Writes `widths` to every cell of the corresponding column.
///
/// The legacy `width` attribute is dropped so that it can't disagree with the style.
pub fn set_column_widths<D: TableDom>(
    dom: &mut D,
    table: &D::Element,
    widths: &[f64],
    strategy: &SizeStrategy,
) {
    for (cells, width) in column_cells(dom, table).iter().zip(widths) {
        for cell in cells {
            strategy.set_element_width(dom, cell, *width);
            dom.remove_attribute(cell, "width");
        }
    }
}
