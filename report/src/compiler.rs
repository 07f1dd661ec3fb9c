use crate::error::RenderError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Turns a markup source into a binary document next to it.
pub trait DocumentCompiler {
    fn compile(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, RenderError>;
}

/// Runs `pdflatex` (or a compatible program) once in non-interactive mode.
#[derive(Debug, Clone)]
pub struct PdfLatex {
    pub program: String,
}

impl Default for PdfLatex {
    fn default() -> Self {
        Self { program: "pdflatex".to_string() }
    }
}

const AUX_EXTENSIONS: [&str; 3] = ["aux", "log", "out"];

impl DocumentCompiler for PdfLatex {
    fn compile(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, RenderError> {
        tracing::info!(program = %self.program, source = %source.display(), "compiling document");
        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("-output-directory={}", out_dir.display()))
            .arg(source)
            .output()
            .map_err(|e| RenderError::CompileUnavailable {
                reason: match e.kind() {
                    ErrorKind::NotFound => format!("`{}` not found on PATH", self.program),
                    _ => format!("failed to start `{}`: {e}", self.program),
                },
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let first = stdout
                .lines()
                .find(|l| l.starts_with('!'))
                .map(str::to_string)
                .unwrap_or_else(|| format!("`{}` exited with {}", self.program, output.status));
            return Err(RenderError::CompileUnavailable { reason: first });
        }

        let stem = source.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let pdf = out_dir.join(format!("{stem}.pdf"));
        if !pdf.is_file() {
            return Err(RenderError::CompileUnavailable {
                reason: format!("`{}` finished without producing {}", self.program, pdf.display()),
            });
        }
        for ext in AUX_EXTENSIONS {
            let aux = out_dir.join(format!("{stem}.{ext}"));
            if let Err(e) = fs::remove_file(&aux) {
                if e.kind() != ErrorKind::NotFound {
                    tracing::debug!(path = %aux.display(), error = %e, "could not remove auxiliary file");
                }
            }
        }
        Ok(pdf)
    }
}
