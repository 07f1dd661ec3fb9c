use anyhow::{Context, Result};
use jobmatch_core::dataset::load;
use jobmatch_core::filter::partition;
use jobmatch_core::{rank, AnalysisConfig, Query, RankError, Ranking};
use report::{LatexRenderer, PdfLatex, ReportArtifact, ReportInput, ReportRenderer, SubsetCounts};
use std::io::{BufRead, Write};

#[derive(Debug)]
pub struct RunSummary {
    pub counts: SubsetCounts,
    pub local: Result<Ranking, RankError>,
    pub remote: Result<Ranking, RankError>,
    pub artifact: ReportArtifact,
}

/// Print the prompt and read one line as the query.
pub fn prompt_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    writeln!(out, "Describe your profile or the ideal data engineering job (English gives the best keyword matches).")?;
    writeln!(out, "Example: data engineer with experience in python, spark, sql and aws cloud services.")?;
    write!(out, "Query (English): ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read the query from stdin")?;
    Ok(line)
}

pub fn default_renderer(cfg: &AnalysisConfig) -> LatexRenderer<PdfLatex> {
    let compiler = cfg.compile.then(|| PdfLatex { program: cfg.compiler.clone() });
    LatexRenderer::new(cfg.output_dir.clone(), cfg.output_name.clone(), compiler)
}

/// Load, filter, ask for the query, rank both subsets and write the report.
///
/// Load, filter, empty-query and write failures end the run. A subset whose ranking
/// fails is reported as having no results, and a failed compile keeps the source file.
pub fn run<Q, R>(cfg: &AnalysisConfig, renderer: &R, ask_query: Q) -> Result<RunSummary>
where
    Q: FnOnce() -> Result<String>,
    R: ReportRenderer,
{
    println!("--- STEP 1: LOADING POSTINGS ---");
    let set = load(&cfg.dataset, cfg)?;
    println!("Postings with a description: {}", set.len());
    let parts = partition(&set, cfg)?;
    println!("Filtered: {} {} postings, {} remote postings.", parts.local.len(), cfg.city, parts.remote.len());

    println!("\n--- STEP 2: PROFILE QUERY ---");
    let query = Query::parse(&ask_query()?)?;

    println!("\n--- STEP 3: RANKING (TF-IDF AND ANGLES) ---");
    let local = rank(&query, &parts.local);
    let remote = rank(&query, &parts.remote);
    for outcome in [&local, &remote] {
        if let Err(e) = outcome {
            println!("ERROR: {e}");
        }
    }

    println!("\n--- STEP 4: WRITING REPORT ---");
    let counts = SubsetCounts { total: set.len(), local: parts.local.len(), remote: parts.remote.len() };
    let source_name = set.source_name();
    let input = ReportInput {
        query: &query,
        city: &cfg.city,
        source_name: &source_name,
        document_column: &cfg.description_column,
        counts,
        local: local.as_ref().ok(),
        remote: remote.as_ref().ok(),
    };
    let artifact = renderer.render(&input)?;
    match (&artifact.document, &artifact.compile_failure) {
        (Some(pdf), _) => {
            println!("Report compiled to {}", pdf.display());
            println!("Source kept at {}", artifact.source.display());
        }
        (None, Some(e)) => {
            println!("Could not compile the PDF: {e}");
            println!("The source {} was written; compile it manually with a LaTeX editor.", artifact.source.display());
        }
        (None, None) => println!("Report source written to {}", artifact.source.display()),
    }

    Ok(RunSummary { counts, local, remote, artifact })
}
