use analyzer::{prompt_query, run};
use jobmatch_core::{AnalysisConfig, InputError, LoadError, RankError};
use report::{LatexRenderer, PdfLatex};
use std::cell::Cell;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn config(dir: &Path, csv: &str) -> AnalysisConfig {
    let dataset = dir.join("postings.csv");
    fs::write(&dataset, csv).unwrap();
    AnalysisConfig { dataset, output_dir: dir.join("out"), output_name: "report".into(), compile: false, ..Default::default() }
}

fn renderer(cfg: &AnalysisConfig) -> LatexRenderer<PdfLatex> {
    LatexRenderer::new(cfg.output_dir.clone(), cfg.output_name.clone(), None)
}

const POSTINGS: &str = "job_description,formatted_location\n\
\"Data engineer with Python and Spark on AWS\",\"São Paulo, SP\"\n\
\"Python data engineer for Spark pipelines\",\"São Paulo\"\n\
\"Frontend developer React\",\"São Paulo\"\n\
\"Nurse for hospital night shifts\",Remote\n\
\"Nurse for hospital day shifts\",Remoto\n";

#[test]
fn missing_location_column_stops_before_query() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), "job_description,city\nabc,São Paulo\n");
    let asked = Cell::new(false);

    let err = run(&cfg, &renderer(&cfg), || {
        asked.set(true);
        Ok("python".into())
    })
    .unwrap_err();
    assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::Schema { .. })));
    assert!(!asked.get());
    assert!(!cfg.tex_path().exists());
}

#[test]
fn blank_query_halts_before_ranking() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), POSTINGS);

    let err = run(&cfg, &renderer(&cfg), || Ok("   \n".into())).unwrap_err();
    assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::EmptyQuery));
    assert!(!cfg.tex_path().exists());
}

#[test]
fn failed_subset_gets_no_results_section() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), POSTINGS);

    let summary = run(&cfg, &renderer(&cfg), || Ok("python data engineer\n".into())).unwrap();
    assert_eq!((summary.counts.total, summary.counts.local, summary.counts.remote), (5, 3, 2));

    let local = summary.local.as_ref().unwrap();
    assert_eq!(local.matches[0].row_id, 0);
    assert_eq!(local.matches[1].row_id, 1);
    assert_eq!(local.matches[0].similarity, local.matches[1].similarity);
    assert!(matches!(summary.remote, Err(RankError::EmptyVocabulary(_))));

    let tex = fs::read_to_string(&summary.artifact.source).unwrap();
    assert!(tex.contains("Rank 1 (CSV row id: 0):"));
    assert_eq!(tex.matches("No results were found for this group.").count(), 1);
}

#[test]
fn prompt_reads_one_line() {
    let mut input = Cursor::new("spark sql\nignored\n");
    let mut out = Vec::new();
    let line = prompt_query(&mut input, &mut out).unwrap();
    assert_eq!(line, "spark sql\n");
    assert!(String::from_utf8(out).unwrap().ends_with("Query (English): "));
}
