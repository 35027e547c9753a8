use log::{debug, info};

use crate::balance::format_balance;
use crate::latex_string::LatexString;
use crate::report::{ExportError, ExportOptions, ReportRequest};
use crate::tex_render::TexRender;
use crate::utils::Resources;

const TEMPLATE: &str = "report.tex";

pub struct LatexGenerator<'a> {
    request: &'a ReportRequest,
}

impl<'a> LatexGenerator<'a> {
    pub fn new(request: &'a ReportRequest) -> Self {
        Self { request }
    }

    fn rows(&self) -> String {
        let mut result = String::new();

        for day in self.request.work_month().days() {
            result.push_str(&format!(
                "{} & {} & {} & {} & {} \\\\\n\\hline\n",
                day.date(),
                LatexString::escape(day.week_day().name()),
                day.assigned_hours(),
                day.contracted_load(),
                format_balance(day.delta()),
            ));
        }

        result
    }

    /// Returns the latex source of the report.
    pub fn source(&self, font: &str) -> Result<String, ExportError> {
        let template =
            Resources::get(TEMPLATE).ok_or(ExportError::MissingTemplate(TEMPLATE))?;
        let template = String::from_utf8_lossy(template.data.as_ref());

        let key = self.request.work_month().key();

        Ok(template
            .replace("<<font>>", &LatexString::escape(font))
            .replace("<<month>>", &LatexString::escape(key.month().name()))
            .replace("<<year>>", &format!("{:04}", key.year().as_usize()))
            .replace(
                "<<teacher>>",
                &LatexString::escape(self.request.teacher_name()),
            )
            .replace("<<balance>>", &format_balance(self.request.balance()))
            .replace("<<rows>>", &self.rows()))
    }

    /// Compiles the report to a pdf.
    pub fn generate(self, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
        info!("Generating latex file");
        let source = self.source(options.font())?;
        debug!("latex source has {} bytes", source.len());

        let mut renderer = TexRender::from_bytes(source.into_bytes())?;

        if let Some(path) = options.latex_mk_path() {
            renderer.latex_mk_path(path);
        }

        if let Some(dir) = options.preserve_dir() {
            renderer.preserve_dir(dir);
        }

        info!("Compiling latex file to pdf");
        let pdf = renderer.render()?;
        info!("Done");

        Ok(pdf)
    }
}
