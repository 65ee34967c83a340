use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use log::debug;
use tempfile::TempDir;
use thiserror::Error;

use crate::utils;

const INPUT_FILE: &str = "attendance_list.tex";
const OUTPUT_FILE: &str = "attendance_list.pdf";

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error("failed to run `{}`: {source}", .latex_mk_path.display())]
    RunError {
        latex_mk_path: PathBuf,
        source: io::Error,
    },
    #[error("failed to read the compiled pdf: {0}")]
    ReadOutputFile(io::Error),
    #[error("latexmk failed with status: {status:?}, stdout: {stdout}, stderr: {stderr}")]
    CompileError {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Compiles a latex document with `latexmk`.
pub struct TexRender {
    /// Path to latexmk.
    latex_mk_path: PathBuf,
    /// The template uses fontspec, which needs XeLaTeX or LuaLaTeX.
    use_xelatex: bool,
    /// Whether or not to allow shell escaping.
    allow_shell_escape: bool,
    working_dir: TempDir,
    /// Where the working directory is copied to, if compiling fails.
    preserve_dir: Option<PathBuf>,
}

impl TexRender {
    pub fn from_bytes(source: impl AsRef<[u8]>) -> anyhow::Result<Self> {
        let working_dir = TempDir::new()?;
        debug!("latex working directory: {}", working_dir.path().display());
        utils::write(working_dir.path().join(INPUT_FILE), source.as_ref())?;

        Ok(Self {
            latex_mk_path: "latexmk".into(),
            use_xelatex: true,
            allow_shell_escape: false,
            working_dir,
            preserve_dir: None,
        })
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    pub fn latex_mk_path(&mut self, latex_mk_path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = latex_mk_path.into();
        self
    }

    fn preserve_working_dir(&self, path: &Path) -> anyhow::Result<()> {
        utils::create_dir_all(path)?;
        fs_extra::dir::copy(
            self.working_dir.path(),
            path,
            &fs_extra::dir::CopyOptions {
                overwrite: true,
                skip_exist: false,
                ..Default::default()
            },
        )
        .with_context(|| {
            format!(
                "failed to copy `{}` to `{}`",
                self.working_dir.path().display(),
                path.display()
            )
        })?;

        Ok(())
    }

    pub fn render(self) -> anyhow::Result<Vec<u8>> {
        let input_file = self.working_dir.path().join(INPUT_FILE);
        let output_file = self.working_dir.path().join(OUTPUT_FILE);

        let mut cmd = Command::new(&self.latex_mk_path);
        cmd.args([
            "-interaction=nonstopmode",
            "-halt-on-error",
            "-file-line-error",
            "-pdf",
            "-cd",
        ]);

        if self.use_xelatex {
            cmd.arg("-xelatex");
        }

        if !self.allow_shell_escape {
            cmd.arg("-no-shell-escape");
        }

        cmd.arg(&input_file);

        cmd.current_dir(self.working_dir.path());

        let output = cmd.output().map_err(|source| RenderingError::RunError {
            latex_mk_path: self.latex_mk_path.clone(),
            source,
        })?;

        if !output.status.success() {
            if let Some(path) = &self.preserve_dir {
                self.preserve_working_dir(path)?;
            }

            return Err(RenderingError::CompileError {
                status: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(utils::read(output_file).map_err(RenderingError::ReadOutputFile)?)
    }
}
