use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};
use tempfile::TempDir;
use thiserror::Error;

use crate::utils;

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error("failed to prepare the latex working directory")]
    WorkingDir(#[source] io::Error),
    #[error("failed to run `{}`", path.display())]
    RunError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("latexmk failed with status: {status:?}, stdout: {stdout}, stderr: {stderr}")]
    Failed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("failed to copy `{}` to `{}`", from.display(), to.display())]
    Preserve {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },
    #[error(transparent)]
    ReadOutputFile(io::Error),
}

pub struct TexRender {
    /// Path to latexmk.
    latex_mk_path: PathBuf,
    /// Temporary directory holding the document and its assets.
    working_dir: TempDir,
    preserve_dir: Option<PathBuf>,
}

impl TexRender {
    pub fn from_bytes(source: impl AsRef<[u8]>) -> Result<Self, RenderingError> {
        let working_dir = TempDir::new().map_err(RenderingError::WorkingDir)?;
        utils::write(working_dir.path().join("input.tex"), source.as_ref())
            .map_err(RenderingError::WorkingDir)?;

        Ok(Self {
            latex_mk_path: "latexmk".into(),
            working_dir,
            preserve_dir: None,
        })
    }

    /// Copies the working directory to `path` if the compilation fails.
    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    pub fn latex_mk_path(&mut self, latex_mk_path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = latex_mk_path.into();
        self
    }

    fn preserve(&self, path: &Path) -> Result<(), RenderingError> {
        let preserve_error = |source: fs_extra::error::Error| RenderingError::Preserve {
            from: self.working_dir.path().to_path_buf(),
            to: path.to_path_buf(),
            source,
        };

        utils::create_dir_all(path).map_err(|e| preserve_error(e.into()))?;
        fs_extra::dir::copy(
            self.working_dir.path(),
            path,
            &fs_extra::dir::CopyOptions {
                overwrite: true,
                skip_exist: false,
                ..Default::default()
            },
        )
        .map_err(preserve_error)?;

        warn!("kept the latex working directory in `{}`", path.display());

        Ok(())
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.latex_mk_path);
        // XeLaTeX is required for the system fonts loaded through fontspec
        cmd.args([
            "-interaction=nonstopmode",
            "-halt-on-error",
            "-file-line-error",
            "-cd",
            "-xelatex",
            "-no-shell-escape",
        ]);

        cmd.arg(self.working_dir.path().join("input.tex"));
        cmd.current_dir(self.working_dir.path());

        cmd
    }

    pub fn render(self) -> Result<Vec<u8>, RenderingError> {
        let output_file = self.working_dir.path().join("input.pdf");

        let mut cmd = self.command();
        debug!("running {:?}", cmd);
        let output = cmd.output().map_err(|source| RenderingError::RunError {
            path: self.latex_mk_path.clone(),
            source,
        })?;

        if !output.status.success() {
            if let Some(path) = &self.preserve_dir {
                self.preserve(path)?;
            }

            return Err(RenderingError::Failed {
                status: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        utils::read(output_file).map_err(RenderingError::ReadOutputFile)
    }
}
