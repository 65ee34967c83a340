use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use formatx::formatx;
use log::debug;

use crate::document::Document;
use crate::input::toml_input::{self, Attendance};
use crate::input::AttendanceListData;
use crate::layout::{AttendanceListDocumentGenerator, DocumentStyle};
use crate::locale::{CustomTitle, Locale, LocalizedNames};
use crate::time::{Month, Year};
use crate::utils;

pub struct Config {
    data: AttendanceListData,
    locale: Locale,
    title: Option<String>,
    style: DocumentStyle,
    output: PathBuf,
    latex_mk_path: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    dump_json: bool,
}

pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    attendance: Attendance,
    output: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
    dump_json: bool,
    colors: Option<bool>,
}

impl ConfigBuilder {
    fn new(attendance: Attendance) -> Self {
        Self {
            workspace: None,
            attendance,
            output: None,
            preserve_dir: None,
            dump_json: false,
            colors: None,
        }
    }

    /// The path of the pdf file, overrides the `[output]` section.
    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn preserve_dir(&mut self, preserve_dir: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(preserve_dir.into());
        self
    }

    /// The directory relative paths from the attendance file are resolved against.
    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn dump_json(&mut self, dump_json: bool) -> &mut Self {
        self.dump_json = dump_json;
        self
    }

    pub fn colors(&mut self, colors: bool) -> &mut Self {
        self.colors = Some(colors);
        self
    }

    fn default_file_name(&self) -> anyhow::Result<PathBuf> {
        let general = self.attendance.general();
        let template = self.attendance.output().filename();

        let file_name = formatx!(
            template,
            year = format!("{:04}", general.year().as_usize()),
            month = format!("{:02}", general.month().as_usize())
        )
        .map_err(|e| anyhow::anyhow!("invalid output filename `{}`: {}", template, e))?;

        let directory = self
            .attendance
            .output()
            .directory()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| {
                let names = general.locale().names();
                Path::new(names.documents_catalog_name()).join(names.application_catalog_name())
            });

        Ok(directory.join(file_name))
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let general = self.attendance.general();

        let data = AttendanceListData::new(
            self.attendance.people().fullnames().iter().cloned(),
            general.month(),
            general.year(),
        )?;

        if let Some(title) = general.title() {
            CustomTitle::new(general.locale().names(), title)?;
        }

        let output = match &self.output {
            Some(output) => output.clone(),
            None => {
                let default_file_name = self.default_file_name()?;

                if let Some(workspace) = &self.workspace {
                    workspace.join(default_file_name)
                } else {
                    default_file_name
                }
            }
        };

        debug!("output: {}", output.display());

        let mut style = self.attendance.style().clone();
        if let Some(colors) = self.colors {
            style.colors = colors;
        }

        Ok(Config {
            data,
            locale: general.locale(),
            title: general.title().map(ToString::to_string),
            style,
            output,
            latex_mk_path: self
                .attendance
                .output()
                .latex_mk_path()
                .map(Path::to_path_buf),
            preserve_dir: self.preserve_dir,
            dump_json: self.dump_json,
        })
    }
}

impl Config {
    /// Creates a config without an attendance file.
    #[must_use]
    pub fn builder(
        fullnames: Vec<String>,
        month: Month,
        year: Year,
        locale: Locale,
    ) -> ConfigBuilder {
        ConfigBuilder::new(Attendance::new(
            toml_input::General::new(month, year, locale),
            toml_input::People::new(fullnames),
        ))
    }

    #[must_use]
    pub fn try_from_toml(attendance: Attendance) -> ConfigBuilder {
        ConfigBuilder::new(attendance)
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        let attendance: Attendance = utils::toml_from_reader(
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

        Ok(Self::try_from_toml(attendance))
    }

    fn generate_document_with<N: LocalizedNames>(&self, names: N) -> anyhow::Result<Document> {
        let mut builder = AttendanceListDocumentGenerator::builder();
        builder
            .data(self.data.clone())
            .names(names)
            .style(self.style.clone());

        Ok(builder.build()?.generate_document())
    }

    /// Lays out the attendance list described by this config.
    pub fn generate_document(&self) -> anyhow::Result<Document> {
        let names = self.locale.names();

        match &self.title {
            Some(title) => self.generate_document_with(CustomTitle::new(names, title.as_str())?),
            None => self.generate_document_with(names),
        }
    }

    pub fn data(&self) -> &AttendanceListData {
        &self.data
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.latex_mk_path.as_deref()
    }

    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }

    pub fn dump_json(&self) -> bool {
        self.dump_json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::input::InvalidArgument;

    fn attendance(content: &str) -> Attendance {
        toml::from_str(content).expect("toml should be valid")
    }

    const MINIMAL: &str = concat!(
        "[general]\n",
        "month = 2\n",
        "year = 2019\n",
        "\n",
        "[people]\n",
        "fullnames = [\"Alice\", \"Bob\"]\n",
    );

    #[test]
    fn test_default_output() {
        let mut builder = Config::try_from_toml(attendance(MINIMAL));
        builder.workspace("/home/user");
        let config = builder.build().expect("config should be valid");

        assert_eq!(
            config.output(),
            Path::new("/home/user/Documents/Attendance Lists/2019-02.pdf")
        );
    }

    #[test]
    fn test_output_override() {
        let mut builder = Config::try_from_toml(attendance(MINIMAL));
        builder.workspace("/home/user").output("out/list.pdf");
        let config = builder.build().expect("config should be valid");

        assert_eq!(config.output(), Path::new("out/list.pdf"));
    }

    #[test]
    fn test_output_section() {
        let content = format!(
            "{}\n[output]\ndirectory = \"lists\"\nfilename = \"attendance-{{month}}.pdf\"\n",
            MINIMAL
        );
        let config = Config::try_from_toml(attendance(&content))
            .build()
            .expect("config should be valid");

        assert_eq!(config.output(), Path::new("lists/attendance-02.pdf"));
    }

    #[test]
    fn test_colors_override() {
        let mut builder = Config::try_from_toml(attendance(MINIMAL));
        builder.colors(false);
        let config = builder.build().expect("config should be valid");

        assert!(!config.style().colors);

        let document = config.generate_document().expect("document should be generated");
        assert!(document.table.rows.iter().all(|row| row.shading.is_none()));
    }

    #[test]
    fn test_empty_fullnames() {
        let error = Config::builder(Vec::new(), Month::May, Year::new(2022), Locale::German)
            .build()
            .err()
            .expect("empty fullnames should be rejected");

        assert_eq!(
            error.downcast_ref::<InvalidArgument>(),
            Some(&InvalidArgument::EmptyFullnames)
        );
    }

    #[test]
    fn test_invalid_title() {
        let content = MINIMAL.replace("year = 2019\n", "year = 2019\ntitle = \"{nope}\"\n");

        assert!(Config::try_from_toml(attendance(&content)).build().is_err());
    }

    #[test]
    fn test_custom_title() {
        let content = MINIMAL.replace("year = 2019\n", "year = 2019\ntitle = \"Team {year}\"\n");
        let config = Config::try_from_toml(attendance(&content))
            .build()
            .expect("config should be valid");

        let document = config.generate_document().expect("document should be generated");
        assert_eq!(document.info.title, "Team 2019");
        assert_eq!(document.heading.text, "Team 2019");
    }
}
