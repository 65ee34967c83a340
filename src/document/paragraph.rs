use serde::Serialize;

use crate::document::Points;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub name: String,
    pub size: Points,
    pub bold: bool,
}

impl Font {
    #[must_use]
    pub fn new(name: impl Into<String>, size: Points) -> Self {
        Self {
            name: name.into(),
            size,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Alignment,
    pub font: Option<Font>,
    pub space_after: Points,
}

impl Paragraph {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::default(),
            font: None,
            space_after: 0.0,
        }
    }
}
