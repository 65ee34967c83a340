use core::fmt::Write as _;
use std::path::PathBuf;

use log::{debug, info};

use crate::document::{Alignment, Borders, Cell, Document, Font, Orientation, Paragraph, Row};
use crate::latex_string::LatexString;
use crate::tex_render::TexRender;
use crate::utils::Resources;

const TEMPLATE: &str = "attendance_list.tex";

fn escape(text: &str) -> LatexString {
    LatexString::escape(text)
}

/// Returns the latex code to switch to the font, for the font size a line height of 120% is used.
#[must_use]
fn font_commands(font: &Font) -> String {
    let mut result = format!(
        "\\attendancefont{{{}}}\\fontsize{{{}}}{{{:.1}}}\\selectfont",
        escape(&font.name),
        font.size,
        font.size * 1.2
    );

    if font.bold {
        result.push_str("\\bfseries");
    }

    result
}

#[must_use]
const fn alignment_command(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "\\raggedright",
        Alignment::Center => "\\centering",
        Alignment::Right => "\\raggedleft",
    }
}

/// Joins consecutive columns where `has_rule` is true to `\cline` commands.
///
/// If every column has a rule, a single `\hline` is returned.
#[must_use]
fn horizontal_rules(columns: usize, has_rule: impl Fn(usize) -> bool) -> String {
    if (0..columns).all(&has_rule) {
        return "\\hline".to_string();
    }

    let mut result = String::new();
    let mut start = None;
    for column in 0..=columns {
        match (start, column < columns && has_rule(column)) {
            (None, true) => start = Some(column),
            (Some(first), false) => {
                // \cline counts columns from 1
                let _ = write!(result, "\\cline{{{}-{}}}", first + 1, column);
                start = None;
            }
            _ => {}
        }
    }

    result
}

fn borders_at(rows: &[Row], row: usize, column: usize) -> Option<Borders> {
    rows.get(row)
        .and_then(|row| row.cells.get(column))
        .map(|cell| cell.borders)
}

pub struct LatexGenerator<'a> {
    document: &'a Document,
    latex_mk_path: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
}

impl<'a> LatexGenerator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            latex_mk_path: None,
            preserve_dir: None,
        }
    }

    pub fn latex_mk_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = Some(path.into());
        self
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    /// Creates the latex source of the document.
    pub fn to_latex(&self) -> anyhow::Result<String> {
        let template = Resources::get(TEMPLATE)
            .ok_or_else(|| anyhow::anyhow!("`{}` should be embedded in the binary", TEMPLATE))?;
        let template = String::from_utf8(template.data.into_owned())?;

        let setup = &self.document.page_setup;
        let orientation = match setup.orientation {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        };

        let mut body = self.heading_to_latex(&self.document.heading);
        body.push('\n');
        body.push_str(&self.table_to_latex());

        Ok(template
            .replace("%%ORIENTATION%%", orientation)
            .replace("%%TOP%%", &setup.top_margin.to_string())
            .replace("%%BOTTOM%%", &setup.bottom_margin.to_string())
            .replace("%%LEFT%%", &setup.left_margin.to_string())
            .replace("%%RIGHT%%", &setup.right_margin.to_string())
            .replace("%%TITLE%%", &escape(&self.document.info.title))
            .replace("%%AUTHOR%%", &escape(&self.document.info.author))
            .replace("%%BODY%%", &body))
    }

    fn heading_to_latex(&self, heading: &Paragraph) -> String {
        let mut result = String::from("{");
        result.push_str(alignment_command(heading.alignment));

        if let Some(font) = &heading.font {
            result.push_str(&font_commands(font));
        }

        let _ = write!(
            result,
            " {}\\par}}\n\\vspace{{{}pt}}\n",
            escape(&heading.text),
            heading.space_after
        );

        result
    }

    fn cell_to_latex(&self, row: &Row, row_index: usize, column: usize, cell: &Cell) -> String {
        let rows = &self.document.table.rows;
        let width = self.document.table.columns[column].width;

        // a vertical rule is shared by two neighbouring cells, it is drawn if one of them has it
        let left = column == 0 && cell.borders.left;
        let right = cell.borders.right
            || borders_at(rows, row_index, column + 1).map_or(false, |next| next.left);

        let mut content = String::new();
        if let Some(color) = row.cell_shading(column) {
            let _ = write!(content, "\\cellcolor[RGB]{{{}}}", color);
        }

        if let Some(font) = &row.font {
            content.push_str(&font_commands(font));
            content.push(' ');
        }

        content.push_str(&escape(&cell.text));

        format!(
            "\\multicolumn{{1}}{{{}>{{{}\\arraybackslash}}p{{\\dimexpr {}pt-2\\tabcolsep\\relax}}{}}}{{{}}}",
            if left { "|" } else { "" },
            alignment_command(cell.alignment),
            width,
            if right { "|" } else { "" },
            content
        )
    }

    fn table_to_latex(&self) -> String {
        let table = &self.document.table;
        let columns = table.column_count();
        let rows = &table.rows;

        let mut result = String::new();

        if let Some(color) = table.border_color {
            let _ = writeln!(result, "\\arrayrulecolor[RGB]{{{}}}", color);
        }

        result.push('{');
        if let Some(font) = &table.font {
            result.push_str(&font_commands(font));
        }
        result.push('\n');

        let _ = writeln!(result, "\\begin{{tabular}}{{{}}}", "l".repeat(columns));

        for (row_index, row) in rows.iter().enumerate() {
            // the rule above this row is drawn, if this row or the previous one requests it
            let rules = horizontal_rules(columns, |column| {
                borders_at(rows, row_index, column).map_or(false, |borders| borders.top)
                    || row_index
                        .checked_sub(1)
                        .and_then(|previous| borders_at(rows, previous, column))
                        .map_or(false, |borders| borders.bottom)
            });
            if !rules.is_empty() {
                result.push_str(&rules);
                result.push('\n');
            }

            let cells = row
                .cells
                .iter()
                .enumerate()
                .map(|(column, cell)| self.cell_to_latex(row, row_index, column, cell))
                .collect::<Vec<_>>();

            result.push_str(&cells.join(" & "));
            result.push_str(" \\\\\n");
        }

        if let Some(last) = rows.len().checked_sub(1) {
            let rules = horizontal_rules(columns, |column| {
                borders_at(rows, last, column).map_or(false, |borders| borders.bottom)
            });
            if !rules.is_empty() {
                result.push_str(&rules);
                result.push('\n');
            }
        }

        result.push_str("\\end{tabular}\n}\n");

        debug!(
            "converted a table with {} rows to {} bytes of latex",
            rows.len(),
            result.len()
        );

        result
    }

    /// Renders the document to a pdf file and returns its content.
    pub fn generate(self) -> anyhow::Result<Vec<u8>> {
        info!("Generating latex file");
        let latex = self.to_latex()?;

        info!("Compiling latex file to pdf");
        let mut renderer = TexRender::from_bytes(latex.into_bytes())?;

        if let Some(path) = &self.latex_mk_path {
            renderer.latex_mk_path(path);
        }

        if let Some(dir) = &self.preserve_dir {
            renderer.preserve_dir(dir);
        }

        let pdf = renderer.render()?;

        info!("Done");

        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::input::AttendanceListData;
    use crate::layout::AttendanceListDocumentGenerator;
    use crate::locale::English;
    use crate::time::{Month, Year};

    fn document(names: &[&str]) -> Document {
        let data = AttendanceListData::new(names.iter().copied(), Month::February, Year::new(2019))
            .expect("data should be valid");

        AttendanceListDocumentGenerator::new(data, English).generate_document()
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(horizontal_rules(4, |_| true), "\\hline".to_string());
        assert_eq!(horizontal_rules(4, |column| column >= 2), "\\cline{3-4}".to_string());
        assert_eq!(
            horizontal_rules(5, |column| column != 2),
            "\\cline{1-2}\\cline{4-5}".to_string()
        );
        assert_eq!(horizontal_rules(3, |_| false), String::new());
    }

    #[test]
    fn test_latex_contains_metadata_and_names() {
        let latex = LatexGenerator::new(&document(&["Alice", "Bob"]))
            .to_latex()
            .expect("latex should be generated");

        assert!(latex.contains("pdftitle={Attendance list - February 2019}"));
        assert!(latex.contains("pdfauthor={Attendance List Generator}"));
        assert!(latex.contains("landscape,top=30pt,bottom=30pt,left=30pt,right=30pt"));
        assert!(latex.contains("Alice"));
        assert!(latex.contains("Bob"));
        assert!(latex.contains("SUNDAY"));
        assert!(!latex.contains("%%"));
    }

    #[test]
    fn test_latex_escapes_names() {
        let latex = LatexGenerator::new(&document(&["R&D", "50%"]))
            .to_latex()
            .expect("latex should be generated");

        assert!(latex.contains("R\\&D"));
        assert!(latex.contains("50\\%"));
    }

    #[test]
    fn test_latex_rules_around_heading_corner() {
        let latex = LatexGenerator::new(&document(&["Alice", "Bob"]))
            .to_latex()
            .expect("latex should be generated");

        // the corner cells have no top border
        assert!(latex.contains("\\begin{tabular}{llll}\n\\cline{3-4}\n"));
        // one row per day and the heading row
        assert_eq!(latex.matches(" \\\\\n").count(), 29);
    }

    #[test]
    fn test_latex_shading() {
        let latex = LatexGenerator::new(&document(&["Alice"]))
            .to_latex()
            .expect("latex should be generated");

        assert!(latex.contains("\\cellcolor[RGB]{215,215,215}"));
        assert!(latex.contains("\\cellcolor[RGB]{192,192,192}"));
        assert!(latex.contains("\\cellcolor[RGB]{220,220,220}"));
        assert!(latex.contains("\\cellcolor[RGB]{255,255,255}"));
    }

    #[test]
    #[ignore = "requires latexmk and xelatex to be installed"]
    fn test_generate_pdf() {
        let pdf = LatexGenerator::new(&document(&["Alice", "Bob"]))
            .generate()
            .expect("pdf should be generated");

        assert!(pdf.starts_with(b"%PDF"));
    }
}
