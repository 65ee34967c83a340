//! A plain-data description of a document, independent of how it is rendered.

mod color;
mod paragraph;
mod table;

pub use color::*;
pub use paragraph::*;
pub use table::*;

use serde::Serialize;

/// Lengths are in typographic points (1/72 inch).
pub type Points = f32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSetup {
    pub orientation: Orientation,
    pub top_margin: Points,
    pub bottom_margin: Points,
    pub left_margin: Points,
    pub right_margin: Points,
}

impl PageSetup {
    #[must_use]
    pub const fn landscape_with_margins(margin: Points) -> Self {
        Self {
            orientation: Orientation::Landscape,
            top_margin: margin,
            bottom_margin: margin,
            left_margin: margin,
            right_margin: margin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
}

/// A single page section with a heading and a table below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub info: DocumentInfo,
    pub page_setup: PageSetup,
    pub heading: Paragraph,
    pub table: Table,
}
