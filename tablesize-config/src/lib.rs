//! Configuration for the table sizing engine.
//!
//! The config is a KDL document with a single `table` section:
//!
//! ```kdl
//! table {
//!     object-resizing true
//!     resize-bars true
//!     force-percentages
//! }
//! ```

use std::path::Path;

use miette::{Context as _, IntoDiagnostic as _};
use tracing::debug;

mod table;

pub use crate::table::{SizingPolicy, Table};

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub table: Table,
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let _span = tracy_client::span!("Config::load");

        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("config.kdl");

        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }
}
