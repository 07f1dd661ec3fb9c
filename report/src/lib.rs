//! Report rendering: turns two rankings and run metadata into a LaTeX source and,
//! when a compiler is available, a PDF.

pub mod compiler;
pub mod error;
pub mod escape;
pub mod latex;

pub use compiler::{DocumentCompiler, PdfLatex};
pub use error::RenderError;

use jobmatch_core::{Query, Ranking};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetCounts {
    /// Postings with a description.
    pub total: usize,
    pub local: usize,
    pub remote: usize,
}

/// Everything the report shows. `None` for a subset means its ranking failed.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub query: &'a Query,
    pub city: &'a str,
    pub source_name: &'a str,
    pub document_column: &'a str,
    pub counts: SubsetCounts,
    pub local: Option<&'a Ranking>,
    pub remote: Option<&'a Ranking>,
}

#[derive(Debug)]
pub struct ReportArtifact {
    pub source: PathBuf,
    pub document: Option<PathBuf>,
    /// Why `document` is missing, when compilation was attempted and failed.
    pub compile_failure: Option<RenderError>,
}

pub trait ReportRenderer {
    fn render(&self, input: &ReportInput<'_>) -> Result<ReportArtifact, RenderError>;
}

/// Writes `<dir>/<name>.tex` and optionally compiles it.
pub struct LatexRenderer<C = PdfLatex> {
    pub output_dir: PathBuf,
    pub output_name: String,
    pub compiler: Option<C>,
}

impl<C: DocumentCompiler> LatexRenderer<C> {
    pub fn new(output_dir: impl Into<PathBuf>, output_name: impl Into<String>, compiler: Option<C>) -> Self {
        Self { output_dir: output_dir.into(), output_name: output_name.into(), compiler }
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tex", self.output_name))
    }
}

impl<C: DocumentCompiler> ReportRenderer for LatexRenderer<C> {
    fn render(&self, input: &ReportInput<'_>) -> Result<ReportArtifact, RenderError> {
        let source = self.source_path();
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| RenderError::Write { path: self.output_dir.clone(), source: e })?;
        fs::write(&source, latex::build_report(input))
            .map_err(|e| RenderError::Write { path: source.clone(), source: e })?;
        tracing::info!(path = %source.display(), "report source written");

        let Some(compiler) = &self.compiler else {
            return Ok(ReportArtifact { source, document: None, compile_failure: None });
        };
        match compiler.compile(&source, &self.output_dir) {
            Ok(pdf) => {
                tracing::info!(path = %pdf.display(), "report compiled");
                Ok(ReportArtifact { source, document: Some(pdf), compile_failure: None })
            }
            Err(e) => {
                tracing::warn!(error = %e, "document compilation failed; keeping the source file");
                Ok(ReportArtifact { source, document: None, compile_failure: Some(e) })
            }
        }
    }
}
