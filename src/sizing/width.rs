use std::sync::LazyLock;

use regex::Regex;

static PERCENTAGE_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*%\s*$").unwrap());

// Unitless numbers are treated as pixels, like the legacy `width` attribute.
static PIXEL_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*(?:px)?\s*$").unwrap());

/// A declared width that the engine knows how to size against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeclaredWidth {
    /// Percentage of the container width.
    Percentage(f64),
    /// Absolute pixels, with or without the `px` suffix.
    Pixels(f64),
}

impl DeclaredWidth {
    /// Classifies a raw width string.
    ///
    /// Returns `None` for anything that is neither a percentage nor a pixel value, such as
    /// `auto`, `10em` or negative numbers.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some(caps) = PERCENTAGE_WIDTH.captures(raw) {
            return caps[1].parse().ok().map(Self::Percentage);
        }

        if let Some(caps) = PIXEL_WIDTH.captures(raw) {
            return caps[1].parse().ok().map(Self::Pixels);
        }

        None
    }
}

fn trim_number(value: f64) -> f64 {
    let value = (value * 10000.).round() / 10000.;
    // Avoid writing out "-0".
    if value == 0. {
        0.
    } else {
        value
    }
}

/// Formats a pixel width for an inline style, e.g. `250px`.
pub fn format_pixels(value: f64) -> String {
    format!("{}px", trim_number(value))
}

/// Formats a percentage width for an inline style, e.g. `33.3333%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", trim_number(value))
}
