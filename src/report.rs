//! The printable summary of a month.

use std::path::{Path, PathBuf};

use log::info;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::allocation::{MonthKey, SelectionError, WorkMonth};
use crate::balance::compute_balance;
use crate::latex_generator::LatexGenerator;
use crate::tex_render::RenderingError;
use crate::utils;

pub const DEFAULT_FONT: &str = "DejaVu Sans";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("the report template `{0}` is not embedded in the binary")]
    MissingTemplate(&'static str),
    #[error("failed to render the report")]
    Rendering(#[from] RenderingError),
}

/// Everything that ends up in the report. The balance always matches the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    teacher_name: String,
    work_month: WorkMonth,
    balance: Decimal,
}

impl ReportRequest {
    #[must_use]
    pub fn new(teacher_name: impl Into<String>, work_month: WorkMonth) -> Self {
        let balance = compute_balance(&work_month);

        Self {
            teacher_name: teacher_name.into(),
            work_month,
            balance,
        }
    }

    #[must_use]
    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    #[must_use]
    pub fn key(&self) -> MonthKey {
        self.work_month.key()
    }

    #[must_use]
    pub fn work_month(&self) -> &WorkMonth {
        &self.work_month
    }

    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// `raport_<name>_<month name>_<year>.pdf`. Whitespace, path separators and
    /// characters that are not allowed in file names are replaced by `_`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let name = self
            .teacher_name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_whitespace() || c.is_control() => '_',
                c => c,
            })
            .collect::<String>();

        format!(
            "raport_{}_{}_{:04}.pdf",
            name,
            self.key().month().name(),
            self.key().year().as_usize()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    latex_mk_path: Option<PathBuf>,
    font: String,
    preserve_dir: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            latex_mk_path: None,
            font: DEFAULT_FONT.to_string(),
            preserve_dir: None,
        }
    }
}

impl ExportOptions {
    pub fn set_latex_mk_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = Some(path.into());
        self
    }

    /// The font must be installed and cover every character of the report.
    pub fn set_font(&mut self, font: impl Into<String>) -> &mut Self {
        self.font = font.into();
        self
    }

    pub fn set_preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.latex_mk_path.as_deref()
    }

    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    #[must_use]
    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }
}

/// A rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    bytes: Vec<u8>,
}

impl Document {
    pub const MIME_TYPE: &'static str = "application/pdf";

    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes the document into `dir` and returns the path of the written file.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let dir = dir.as_ref();
        utils::create_dir_all(dir)?;

        let path = dir.join(&self.file_name);
        utils::write(&path, &self.bytes)?;

        Ok(path)
    }
}

/// Renders the report for the `request`.
pub fn render(request: &ReportRequest, options: &ExportOptions) -> Result<Document, ExportError> {
    info!(
        "exporting {} for {} with a balance of {}",
        request.key(),
        request.teacher_name(),
        request.balance()
    );

    let bytes = LatexGenerator::new(request).generate(options)?;

    Ok(Document::new(request.file_name(), bytes))
}
