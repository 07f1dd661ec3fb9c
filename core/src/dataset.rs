use crate::config::AnalysisConfig;
use crate::error::LoadError;
use crate::posting::{Posting, PostingSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load postings from a CSV file with a header row.
///
/// Invalid UTF-8 is replaced rather than rejected. Rows without a description are dropped,
/// but row ids keep counting them so ids always point back at the file.
pub fn load(path: &Path, cfg: &AnalysisConfig) -> Result<PostingSet, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Read { path: path.to_path_buf(), reason: e.to_string() },
    })?;
    let text = String::from_utf8_lossy(&bytes);
    tracing::info!(path = %path.display(), bytes = bytes.len(), "dataset read");
    parse(path, &text, cfg)
}

fn parse(path: &Path, text: &str, cfg: &AnalysisConfig) -> Result<PostingSet, LoadError> {
    let read_err = |e: csv::Error| LoadError::Read { path: path.to_path_buf(), reason: e.to_string() };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers().map_err(read_err)?.iter().map(|h| h.trim().to_string()).collect();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let schema_err = |name: &str| LoadError::Schema { path: path.to_path_buf(), column: name.to_string() };

    let desc_idx = column(cfg.description_column.as_str()).ok_or_else(|| schema_err(cfg.description_column.as_str()))?;
    let loc_idx = column(cfg.location_column.as_str()).ok_or_else(|| schema_err(cfg.location_column.as_str()))?;
    let remote_idx = column(cfg.remote_flag_column.as_str());

    let mut postings = Vec::new();
    let mut rows_read = 0usize;
    for (row_id, record) in reader.records().enumerate() {
        let record = record.map_err(read_err)?;
        rows_read += 1;
        let description = match record.get(desc_idx) {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => continue,
        };
        let location = record.get(loc_idx).filter(|l| !l.trim().is_empty()).map(str::to_string);
        let remote_allowed = remote_idx.and_then(|i| record.get(i)).and_then(parse_flag);
        postings.push(Posting { row_id, description, location, remote_allowed });
    }

    tracing::info!(rows = rows_read, with_description = postings.len(), "dataset loaded");
    Ok(PostingSet { source: path.to_path_buf(), rows_read, has_remote_flag: remote_idx.is_some(), postings })
}

/// Boolean cell as written by common CSV exporters: `true`/`false` in any case, or `1`/`0`.
fn parse_flag(cell: &str) -> Option<bool> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" => Some(true),
        "false" | "0" | "0.0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse_str(text: &str) -> Result<PostingSet, LoadError> {
        parse(&PathBuf::from("mem.csv"), text, &AnalysisConfig::default())
    }

    #[test]
    fn drops_rows_without_description_and_keeps_ids() {
        let set = parse_str(
            "job_description,formatted_location,work_remote_allowed\n\
             first,São Paulo,\n\
             ,Remote,True\n\
             \"  \",x,\n\
             fourth,,FALSE\n",
        )
        .unwrap();
        assert_eq!(set.rows_read, 4);
        assert!(set.has_remote_flag);
        let ids: Vec<_> = set.postings.iter().map(|p| p.row_id).collect();
        assert_eq!(ids, vec![0, 3]);
        assert_eq!(set.postings[1].location, None);
        assert_eq!(set.postings[1].remote_allowed, Some(false));
        assert_eq!(set.postings[0].remote_allowed, None);
    }

    #[test]
    fn numeric_remote_flags_select_rows() {
        let set = parse_str("job_description,formatted_location,work_remote_allowed\na,São Paulo,0.0\nb,Brasil,1.0\nc,Brasil,1\n").unwrap();
        let flags: Vec<_> = set.postings.iter().map(|p| p.remote_allowed).collect();
        assert_eq!(flags, vec![Some(false), Some(true), Some(true)]);
    }

    #[test]
    fn missing_location_column_is_schema_error() {
        let err = parse_str("job_description,city\nabc,def\n").unwrap_err();
        assert!(matches!(err, LoadError::Schema { ref column, .. } if column == "formatted_location"));
    }

    #[test]
    fn parse_flag_accepts_words_and_digits() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag(" false "), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("1.0"), Some(true));
        assert_eq!(parse_flag("0.0"), Some(false));
        assert_eq!(parse_flag("yes"), None);
        assert_eq!(parse_flag(""), None);
    }
}
