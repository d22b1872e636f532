use std::fmt;

use tablesize_config::SizingPolicy;
use tracing::{debug, trace, warn};

use super::types::DragTarget;
use crate::dom::{Direction, TableDom};
use crate::enforce::{enforce_percentage, enforce_pixels, sync_pixels};
use crate::geometry::{declared_width, has_percentage_width, is_percentage, rendered_width};
use crate::sizing::{format_percentage, redistribute, set_column_widths, DeclaredWidth, SizeStrategy};

/// State of one resize gesture, from its start until it ends or is abandoned.
#[derive(Debug)]
pub struct ResizeSession<E> {
    /// Table being resized.
    pub table: E,
    /// Rendered table width in pixels when the session started.
    pub start_width: f64,
    /// Declared table width when the session started, empty if there was none.
    pub start_raw_width: String,
    /// Unit the table is resized in for the whole session.
    pub strategy: SizeStrategy,
    /// Text direction of the table.
    pub direction: Direction,
    /// Total trailing edge movement of a percentage table since the session started, in
    /// pixels.
    edge_delta: f64,
}

/// Converts the table into the forced unit, if it isn't in it already.
fn enforce_policy<D: TableDom>(dom: &mut D, table: &D::Element, policy: SizingPolicy) {
    let has_percentage = has_percentage_width(dom, table);

    if has_percentage && policy.is_pixels_forced() {
        enforce_pixels(dom, table);
    } else if !has_percentage && (policy.is_percentages_forced() || policy.is_responsive_forced())
    {
        enforce_percentage(dom, table);
    }
}

impl<E: Clone + PartialEq + fmt::Debug> ResizeSession<E> {
    /// Starts a session, converting the table to the forced unit first.
    pub fn begin<D: TableDom<Element = E>>(dom: &mut D, table: &E, policy: SizingPolicy) -> Self {
        enforce_policy(dom, table, policy);

        let start_width = rendered_width(dom, table);
        let start_raw_width = declared_width(dom, table).unwrap_or_default();
        let strategy = SizeStrategy::choose(dom, table);
        let direction = dom.direction(table);
        debug!("starting resize of {table:?} at {start_width}px ({start_raw_width:?})");

        Self {
            table: table.clone(),
            start_width,
            start_raw_width,
            strategy,
            direction,
            edge_delta: 0.,
        }
    }

    /// Whether the table was declared in percentages when the session started.
    pub fn is_percentage(&self) -> bool {
        is_percentage(&self.start_raw_width)
    }

    /// Applies one drag tick.
    ///
    /// `raw_delta` is the pointer movement since the previous tick, in pixels. Every tick
    /// commits a complete set of widths.
    pub fn drag<D: TableDom<Element = E>>(
        &mut self,
        dom: &mut D,
        target: DragTarget,
        raw_delta: f64,
    ) {
        let _span = tracy_client::span!("ResizeSession::drag");

        let widths = self.strategy.column_widths(dom, &self.table, self.direction);
        if widths.is_empty() {
            warn!("ignoring drag of a table without columns");
            return;
        }

        let pixel_delta = self.direction.edge_delta(raw_delta);
        match target.internal_boundary(widths.len()) {
            Some(boundary) => self.drag_boundary(dom, &widths, boundary, pixel_delta),
            None => self.drag_edge(dom, &widths, pixel_delta),
        }
    }

    fn unit_delta(&self, pixel_delta: f64) -> f64 {
        match self.strategy {
            SizeStrategy::Percentage { .. } => self.strategy.cell_delta(pixel_delta),
            // Pixel tables stay on whole pixels.
            SizeStrategy::Pixel { .. } => pixel_delta.round(),
        }
    }

    fn drag_boundary<D: TableDom<Element = E>>(
        &mut self,
        dom: &mut D,
        widths: &[f64],
        boundary: usize,
        pixel_delta: f64,
    ) {
        let delta = self.unit_delta(pixel_delta);
        let new_widths = redistribute(widths, boundary, delta, &self.strategy);
        trace!("boundary {boundary} moved by {delta}: {widths:?} -> {new_widths:?}");

        set_column_widths(dom, &self.table, &new_widths, &self.strategy);
        if !self.strategy.is_percentage() {
            self.strategy.set_table_width(dom, &self.table, &new_widths, 0.);
        }
    }

    fn drag_edge<D: TableDom<Element = E>>(
        &mut self,
        dom: &mut D,
        widths: &[f64],
        pixel_delta: f64,
    ) {
        if self.strategy.is_percentage() {
            // The table scales from its starting width and the host reflows the columns,
            // so the column percentages are not recalculated. They are allowed to drift from
            // the table width.
            self.edge_delta += pixel_delta;

            // Every column keeps at least the minimum width, as a share of the container.
            let floor = widths.len() as f64 * self.strategy.min_cell_width() / 100.
                * self.strategy.width();
            let lowest = f64::min(0., floor - self.strategy.width());
            let delta = self.strategy.cell_delta(self.edge_delta).max(lowest);

            if widths.len() == 1 {
                let new_widths = redistribute(widths, 0, delta, &self.strategy);
                set_column_widths(dom, &self.table, &new_widths, &self.strategy);
            }

            trace!("table edge moved by {delta}% from start");
            self.strategy.set_table_width(dom, &self.table, widths, delta);
        } else {
            let delta = self.unit_delta(pixel_delta);
            let last = widths.len() - 1;
            let new_widths = redistribute(widths, last, delta, &self.strategy);
            trace!("table edge moved by {delta}px: {widths:?} -> {new_widths:?}");

            set_column_widths(dom, &self.table, &new_widths, &self.strategy);
            self.strategy.set_table_width(dom, &self.table, &new_widths, delta);
        }
    }

    /// Finishes a resize made through the host's own object resize handles.
    ///
    /// Percentage tables are scaled to the final width keeping their unit; pixel tables get
    /// their reflowed cell widths baked in.
    pub fn finish_object_resize<D: TableDom<Element = E>>(&self, dom: &mut D, final_width: f64) {
        if !self.is_percentage() {
            sync_pixels(dom, &self.table);
            return;
        }

        let Some(DeclaredWidth::Percentage(start_percentage)) =
            DeclaredWidth::parse(&self.start_raw_width)
        else {
            warn!("unparsable start width {:?}", self.start_raw_width);
            return;
        };

        if self.start_width <= 0. {
            warn!("table had no rendered width when the resize started");
            return;
        }

        let percentage = final_width * start_percentage / self.start_width;
        debug!("scaling table to {}", format_percentage(percentage));
        dom.set_style(&self.table, "width", &format_percentage(percentage));
    }
}
