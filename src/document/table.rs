use serde::Serialize;

use crate::document::{Alignment, Color, Font, Points};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Borders {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub alignment: Alignment,
    /// Overrides the shading of the row.
    pub shading: Option<Color>,
    pub borders: Borders,
}

impl Cell {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    /// Overrides the font of the table.
    pub font: Option<Font>,
    pub shading: Option<Color>,
}

impl Row {
    /// Returns the background of the cell at `index`, taking the row shading into account.
    #[must_use]
    pub fn cell_shading(&self, index: usize) -> Option<Color> {
        self.cells
            .get(index)
            .and_then(|cell| cell.shading)
            .or(self.shading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Column {
    pub width: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub font: Option<Font>,
    pub border_color: Option<Color>,
}

impl Table {
    /// Creates an empty table with `column_count` columns of the given width.
    #[must_use]
    pub fn new(column_count: usize, width: Points) -> Self {
        Self {
            columns: vec![Column { width }; column_count],
            rows: Vec::new(),
            font: None,
            border_color: None,
        }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Appends a row with one blank cell per column and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Row {
            cells: vec![Cell::default(); self.column_count()],
            ..Row::default()
        });

        self.rows.len() - 1
    }

    /// Iterates over the text of every cell in the column at `index`.
    pub fn column_texts(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.cells.get(index))
            .map(|cell| cell.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_row() {
        let mut table = Table::new(4, 10.0);

        assert_eq!(table.add_row(), 0);
        assert_eq!(table.add_row(), 1);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row.cells.len() == 4));
        assert!(table.rows[1].cells.iter().all(Cell::is_blank));
    }

    #[test]
    fn test_cell_shading_overrides_row_shading() {
        let mut table = Table::new(2, 10.0);
        let index = table.add_row();

        let row = &mut table.rows[index];
        assert_eq!(row.cell_shading(0), None);

        row.shading = Some(Color::gray(220));
        row.cells[0].shading = Some(Color::WHITE);

        assert_eq!(row.cell_shading(0), Some(Color::WHITE));
        assert_eq!(row.cell_shading(1), Some(Color::gray(220)));
    }
}
