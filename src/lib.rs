mod latex_generator;
mod latex_string;
mod tex_render;
mod utils;

pub mod document;
pub mod input;
pub mod layout;
pub mod locale;
pub mod output;
pub mod time;

use std::path::PathBuf;

use log::info;

use crate::input::Config;
use crate::output::SaveOptions;

pub use crate::tex_render::RenderingError;

/// Lays out the attendance list of the config and saves it as a pdf.
///
/// Returns the path of the pdf file.
pub fn generate_attendance_list(config: &Config) -> anyhow::Result<PathBuf> {
    info!(
        "generating attendance list for {}/{} with {} names",
        config.data().month(),
        config.data().year(),
        config.data().fullnames().len()
    );

    let document = config.generate_document()?;

    let output = config.output();
    let directory = output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let filename = output
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("invalid output path `{}`", output.display()))?;

    output::save_pdf_document(
        &document,
        directory,
        filename,
        &SaveOptions {
            latex_mk_path: config.latex_mk_path().map(PathBuf::from),
            preserve_dir: config.preserve_dir().map(PathBuf::from),
            dump_json: config.dump_json(),
        },
    )
}
