//! Table column sizing and interactive resizing for rich text editors.
//!
//! The engine works against any document model through the [`dom::TableDom`] trait, and
//! against the hosting editor through [`resize::EditorHost`].

pub mod dom;
pub mod enforce;
pub mod geometry;
pub mod resize;
pub mod sizing;

#[cfg(test)]
mod snapshot;
#[cfg(test)]
mod tests;

pub use tablesize_config::{SizingPolicy, Table};
