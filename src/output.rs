use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};

use crate::document::Document;
use crate::latex_generator::LatexGenerator;
use crate::utils;

/// How [`save_pdf_document`] renders the document.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    pub latex_mk_path: Option<PathBuf>,
    /// Where the latex working directory is copied to, if compiling fails.
    pub preserve_dir: Option<PathBuf>,
    /// Writes the document as json next to the pdf.
    pub dump_json: bool,
}

/// Renders the `document` and writes it to `<directory>/<filename>`.
///
/// Returns the path of the written pdf.
pub fn save_pdf_document(
    document: &Document,
    directory: impl AsRef<Path>,
    filename: &str,
    options: &SaveOptions,
) -> anyhow::Result<PathBuf> {
    let directory = directory.as_ref();

    if directory.as_os_str().is_empty() {
        anyhow::bail!("the output directory must not be empty");
    }

    if filename.is_empty() {
        anyhow::bail!("the output file name must not be empty");
    }

    utils::create_dir_all(directory)
        .with_context(|| format!("failed to create `{}`", directory.display()))?;

    let path = directory.join(filename);

    if options.dump_json {
        let json_path = directory.join(format!("{}.json", filename));
        debug!("dumping document to {}", json_path.display());

        utils::write(&json_path, serde_json::to_string_pretty(document)?)
            .with_context(|| format!("failed to write `{}`", json_path.display()))?;
    }

    let mut generator = LatexGenerator::new(document);

    if let Some(latex_mk_path) = &options.latex_mk_path {
        generator.latex_mk_path(latex_mk_path);
    }

    if let Some(preserve_dir) = &options.preserve_dir {
        generator.preserve_dir(preserve_dir);
    }

    let pdf = generator.generate()?;

    utils::write(&path, pdf).with_context(|| format!("failed to write `{}`", path.display()))?;
    info!("saved attendance list to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::input::AttendanceListData;
    use crate::layout::AttendanceListDocumentGenerator;
    use crate::locale::Polish;
    use crate::time::{Month, Year};

    fn document() -> Document {
        let data = AttendanceListData::new(["Anna"], Month::May, Year::new(2022))
            .expect("data should be valid");

        AttendanceListDocumentGenerator::new(data, Polish).generate_document()
    }

    #[test]
    fn test_empty_directory() {
        let result = save_pdf_document(&document(), "", "list.pdf", &SaveOptions::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_filename() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = save_pdf_document(&document(), dir.path(), "", &SaveOptions::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_dump_json_before_rendering() {
        let dir = TempDir::new().expect("temp dir should be created");
        let output = dir.path().join("nested");
        let options = SaveOptions {
            latex_mk_path: Some("/this/latexmk/does/not/exist".into()),
            dump_json: true,
            ..SaveOptions::default()
        };

        let result = save_pdf_document(&document(), &output, "list.pdf", &options);
        assert!(result.is_err());
        assert!(!output.join("list.pdf").exists());

        let json =
            std::fs::read_to_string(output.join("list.pdf.json")).expect("json should exist");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json should be valid");

        assert_eq!(value["info"]["title"], "Lista obecności - Maj 2022");
        assert_eq!(value["table"]["rows"].as_array().map(Vec::len), Some(32));
    }

    #[test]
    fn test_dump_json_keeps_json_file_name() {
        let dir = TempDir::new().expect("temp dir should be created");
        let options = SaveOptions {
            latex_mk_path: Some("/this/latexmk/does/not/exist".into()),
            dump_json: true,
            ..SaveOptions::default()
        };

        let result = save_pdf_document(&document(), dir.path(), "list.json", &options);
        assert!(result.is_err());

        assert!(!dir.path().join("list.json").exists());
        assert!(dir.path().join("list.json.json").exists());
    }

    #[test]
    #[ignore = "requires latexmk and xelatex to be installed"]
    fn test_save_pdf() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = save_pdf_document(&document(), dir.path(), "list.pdf", &SaveOptions::default())
            .expect("pdf should be saved");

        assert_eq!(path, dir.path().join("list.pdf"));
        assert!(path.exists());
    }
}
