use tracing::trace;

use super::columns::{column_percentage_widths, column_pixel_widths};
use super::width::{format_percentage, format_pixels, DeclaredWidth};
use super::MIN_CELL_WIDTH;
use crate::dom::{Direction, TableDom};
use crate::geometry::{declared_width, rendered_width};

/// Unit a table is sized in for the duration of one resize.
///
/// Chosen once from the table's declared width and never switched afterwards, even if the
/// table's declared width changes while the strategy is in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeStrategy {
    /// Widths are percentages of the table width.
    Percentage {
        /// Declared table width in percent.
        width: f64,
        /// Rendered table width when the strategy was chosen, the conversion basis.
        pixel_width: f64,
    },
    /// Widths are absolute pixels.
    Pixel {
        /// Declared table width in whole pixels.
        width: f64,
    },
}

impl SizeStrategy {
    /// Picks the strategy matching the table's current declared width.
    ///
    /// Tables with no usable declared width are sized in pixels using their rendered width.
    pub fn choose<D: TableDom>(dom: &D, table: &D::Element) -> Self {
        let raw = declared_width(dom, table);

        let strategy = match raw.as_deref().and_then(DeclaredWidth::parse) {
            Some(DeclaredWidth::Percentage(width)) => Self::Percentage {
                width,
                pixel_width: rendered_width(dom, table),
            },
            Some(DeclaredWidth::Pixels(width)) => Self::Pixel {
                width: width.trunc(),
            },
            None => Self::Pixel {
                width: rendered_width(dom, table).trunc(),
            },
        };

        trace!("chose {strategy:?} for declared width {raw:?}");
        strategy
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage { .. })
    }

    /// Table width in the strategy's unit.
    pub fn width(&self) -> f64 {
        match *self {
            Self::Percentage { width, .. } => width,
            Self::Pixel { width } => width,
        }
    }

    /// Table width in pixels that unit conversions are based on.
    pub fn pixel_width(&self) -> f64 {
        match *self {
            Self::Percentage { pixel_width, .. } => pixel_width,
            Self::Pixel { width } => width,
        }
    }

    /// Current width of every column in the strategy's unit.
    pub fn column_widths<D: TableDom>(
        &self,
        dom: &D,
        table: &D::Element,
        direction: Direction,
    ) -> Vec<f64> {
        match self {
            Self::Percentage { .. } => column_percentage_widths(dom, table, direction),
            Self::Pixel { .. } => round_edges(column_pixel_widths(dom, table, direction)),
        }
    }

    /// Converts a pointer delta in pixels into the strategy's unit.
    pub fn cell_delta(&self, pixel_delta: f64) -> f64 {
        match *self {
            Self::Percentage { pixel_width, .. } => {
                // A table that isn't rendered has no conversion basis.
                if pixel_width <= 0. {
                    return 0.;
                }
                pixel_delta / pixel_width * 100.
            }
            Self::Pixel { .. } => pixel_delta,
        }
    }

    /// Adjustment for the only column of a single-column table.
    ///
    /// A lone percentage column always fills the whole table, whatever the delta. A lone
    /// pixel column follows the delta down to the minimum width.
    pub fn single_column_width(&self, width: f64, delta: f64) -> Vec<f64> {
        match self {
            Self::Percentage { .. } => vec![100. - width],
            Self::Pixel { .. } => {
                let new_width = f64::max(MIN_CELL_WIDTH, width + delta);
                vec![new_width - width]
            }
        }
    }

    /// Minimum column width in the strategy's unit.
    pub fn min_cell_width(&self) -> f64 {
        match *self {
            Self::Percentage { pixel_width, .. } => {
                if pixel_width <= 0. {
                    return 0.;
                }
                MIN_CELL_WIDTH / pixel_width * 100.
            }
            Self::Pixel { .. } => MIN_CELL_WIDTH,
        }
    }

    /// Formats a width in the strategy's unit for an inline style.
    pub fn format(&self, width: f64) -> String {
        match self {
            Self::Percentage { .. } => format_percentage(width),
            Self::Pixel { .. } => format_pixels(width),
        }
    }

    /// Sets the `width` style of any element in the strategy's unit.
    pub fn set_element_width<D: TableDom>(&self, dom: &mut D, element: &D::Element, width: f64) {
        dom.set_style(element, "width", &self.format(width));
    }

    /// Commits the table's own width after its columns changed.
    ///
    /// Percentage tables move by `delta` from the width the strategy was chosen with; their
    /// columns are not required to add up to it. Pixel tables are always exactly as wide as
    /// their columns.
    pub fn set_table_width<D: TableDom>(
        &self,
        dom: &mut D,
        table: &D::Element,
        new_widths: &[f64],
        delta: f64,
    ) {
        let total = match *self {
            Self::Percentage { width, .. } => width + delta,
            Self::Pixel { .. } => new_widths.iter().sum(),
        };
        self.set_element_width(dom, table, total);
    }
}

/// Rounds widths to whole pixels at the column edges.
///
/// The total is rounded once, so fractional columns can't add up to a different table width.
fn round_edges(widths: Vec<f64>) -> Vec<f64> {
    let mut edge = 0.;
    let mut rounded_edge = 0.;
    widths
        .into_iter()
        .map(|width| {
            edge += width;
            let start = rounded_edge;
            rounded_edge = f64::round(edge);
            rounded_edge - start
        })
        .collect()
}
