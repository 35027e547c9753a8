use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::allocation::MonthKey;
use crate::input::toml_input;
use crate::report::ExportOptions;
use crate::session::Settings;
use crate::utils;

pub struct Config {
    settings: Settings,
    key: MonthKey,
    month: toml_input::Month,
    export_options: ExportOptions,
    output: PathBuf,
}

pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    global: toml_input::Global,
    month: toml_input::Month,
    output: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(global: toml_input::Global, month: toml_input::Month) -> Self {
        Self {
            workspace: None,
            global,
            month,
            output: None,
            preserve_dir: None,
        }
    }

    /// The directory the report is written to.
    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn preserve_dir(&mut self, preserve_dir: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(preserve_dir.into());
        self
    }

    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let key = self.month.general().key().with_context(|| {
            format!(
                "invalid selection {:04}-{:02} in month file",
                self.month.general().year(),
                self.month.general().month()
            )
        })?;

        let output = self.output.unwrap_or_else(|| {
            let default_dir = PathBuf::from("pdfs");
            if let Some(workspace) = &self.workspace {
                workspace.join(default_dir)
            } else {
                default_dir
            }
        });

        let mut export_options = self.global.export_options();
        if let Some(dir) = self.preserve_dir {
            export_options.set_preserve_dir(dir);
        }

        Ok(Config {
            settings: self.global.settings(),
            key,
            month: self.month,
            export_options,
            output,
        })
    }
}

impl Config {
    #[must_use]
    pub fn from_toml(month: toml_input::Month, global: toml_input::Global) -> ConfigBuilder {
        ConfigBuilder::new(global, month)
    }

    pub fn try_from_toml_files(
        month: impl AsRef<Path>,
        global: impl AsRef<Path>,
    ) -> anyhow::Result<ConfigBuilder> {
        let month = read_toml(month.as_ref())?;
        let global = read_toml(global.as_ref())?;

        Ok(Self::from_toml(month, global))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn key(&self) -> MonthKey {
        self.key
    }

    pub fn month(&self) -> &toml_input::Month {
        &self.month
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Reads and parses a toml input file.
pub fn read_toml<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    utils::toml_from_reader(file).with_context(|| format!("failed to parse `{}`", path.display()))
}
