pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod posting;
pub mod query;
pub mod ranker;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;

pub use crate::config::AnalysisConfig;
pub use crate::error::{ConfigError, FilterError, InputError, LoadError, RankError};
pub use crate::posting::{Posting, PostingSet, RowId, Subset, SubsetKind, TermId};
pub use crate::query::Query;
pub use crate::ranker::{rank, RankedMatch, Ranking, TOP_K};
