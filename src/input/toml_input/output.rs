use std::path::{Path, PathBuf};

use serde::Deserialize;

fn default_filename() -> String {
    "{year}-{month}.pdf".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Output {
    directory: Option<PathBuf>,
    /// Template for the name of the pdf, `{year}` and `{month}` will be replaced.
    #[serde(default = "default_filename")]
    filename: String,
    latex_mk_path: Option<PathBuf>,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            directory: None,
            filename: default_filename(),
            latex_mk_path: None,
        }
    }
}

impl Output {
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.latex_mk_path.as_deref()
    }
}
