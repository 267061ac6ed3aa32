//! Tube line colours.

use std::fmt;

use serde::Serialize;

/// A display colour for a tube line, as a CSS colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineColor(&'static str);

impl LineColor {
    /// Returns the colour as a CSS value.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Colour used for any line not in the table.
pub const DEFAULT_LINE_COLOR: LineColor = LineColor("black");

const LINE_COLORS: [(&str, LineColor); 11] = [
    ("Bakerloo", LineColor("#FF0000")),
    ("Central", LineColor("#0000FF")),
    ("Circle", LineColor("#FFFF00")),
    ("District", LineColor("#008000")),
    ("Hammersmith & City", LineColor("#FFC0CB")),
    ("Jubilee", LineColor("#808080")),
    ("Metropolitan", LineColor("#800080")),
    ("Northern", LineColor("#000000")),
    ("Piccadilly", LineColor("#00008B")),
    ("Victoria", LineColor("#ADD8E6")),
    ("Waterloo & City", LineColor("#008080")),
];

/// Look up the display colour for a line by its display name.
///
/// Matching is exact: `"Central"` has a colour, `"central"` does not.
///
/// ```
/// use tube_server::domain::{DEFAULT_LINE_COLOR, color_of};
///
/// assert_eq!(color_of("Central").as_str(), "#0000FF");
/// assert_eq!(color_of("Elizabeth"), DEFAULT_LINE_COLOR);
/// ```
pub fn color_of(line_name: &str) -> LineColor {
    LINE_COLORS
        .iter()
        .find(|(name, _)| *name == line_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LINE_COLOR)
}

/// Names of every line with a dedicated colour.
pub fn known_lines() -> impl Iterator<Item = &'static str> {
    LINE_COLORS.iter().map(|(name, _)| *name)
}
