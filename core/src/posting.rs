use std::fmt;
use std::path::PathBuf;

/// Zero-based position of a data row in the source file (header excluded).
pub type RowId = usize;
pub type TermId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub row_id: RowId,
    pub description: String,
    pub location: Option<String>,
    /// Value of the remote-eligibility column, when the file has one and the cell parses.
    pub remote_allowed: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct PostingSet {
    pub source: PathBuf,
    /// Data rows read before empty descriptions were dropped.
    pub rows_read: usize,
    pub has_remote_flag: bool,
    pub postings: Vec<Posting>,
}

impl PostingSet {
    pub fn len(&self) -> usize { self.postings.len() }
    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    /// File name of the source, used in the report header.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsetKind {
    Local,
    Remote,
}

impl fmt::Display for SubsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetKind::Local => f.write_str("local"),
            SubsetKind::Remote => f.write_str("remote"),
        }
    }
}

/// Postings sharing one filter outcome, in file order.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    pub kind: SubsetKind,
    pub postings: Vec<&'a Posting>,
}

impl<'a> Subset<'a> {
    pub fn len(&self) -> usize { self.postings.len() }
    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn get(&self, row_id: RowId) -> Option<&'a Posting> {
        self.postings.iter().copied().find(|p| p.row_id == row_id)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.postings.iter().map(|p| p.description.as_str())
    }
}
