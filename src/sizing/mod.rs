//! Column and table sizing.
//!
//! ```text
//! sizing/
//! ├── mod.rs      - This file (constants and re-exports)
//! ├── width.rs    - Declared width parsing and formatting
//! ├── strategy.rs - Percentage and pixel size strategies
//! ├── columns.rs  - Measuring and writing column widths
//! └── deltas.rs   - Redistributing a drag delta between columns
//! ```

mod columns;
mod deltas;
mod strategy;
mod width;

pub use columns::{
    column_cells, column_percentage_widths, column_pixel_widths, set_column_widths,
};
pub use deltas::redistribute;
pub use strategy::SizeStrategy;
pub use width::{format_percentage, format_pixels, DeclaredWidth};

/// No column can be dragged narrower than this many pixels.
pub const MIN_CELL_WIDTH: f64 = 10.;
