use crate::error::RankError;
use crate::posting::{RowId, Subset, SubsetKind};
use crate::query::Query;
use crate::similarity::{angle_degrees, cosine_similarity};
use crate::vectorizer::{fit_transform, VectorizerParams};
use std::cmp::Ordering;

pub const TOP_K: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub row_id: RowId,
    /// Cosine similarity to the query, in [-1, 1].
    pub similarity: f64,
    pub angle_degrees: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub kind: SubsetKind,
    pub candidates: usize,
    pub matches: Vec<RankedMatch>,
}

/// Rank every document of `subset` against `query` and keep the best `TOP_K`.
/// Equal similarities keep subset order.
pub fn rank(query: &Query, subset: &Subset<'_>) -> Result<Ranking, RankError> {
    tracing::info!(subset = %subset.kind, docs = subset.len(), "ranking query against subset");

    let corpus: Vec<&str> = std::iter::once(query.as_str()).chain(subset.descriptions()).collect();
    let matrix = fit_transform(&corpus, VectorizerParams::default());
    let (query_vec, doc_vecs) = match matrix.rows.split_first() {
        Some(split) => split,
        None => return Err(RankError::EmptyVocabulary(subset.kind.to_string())),
    };
    if matrix.vocabulary.is_empty() || query_vec.is_empty() {
        tracing::warn!(subset = %subset.kind, terms = matrix.vocabulary.len(), "query has no retained terms");
        return Err(RankError::EmptyVocabulary(subset.kind.to_string()));
    }

    let mut scored: Vec<RankedMatch> = subset
        .postings
        .iter()
        .zip(doc_vecs)
        .map(|(posting, doc_vec)| {
            let similarity = cosine_similarity(query_vec, doc_vec).clamp(-1.0, 1.0);
            RankedMatch {
                row_id: posting.row_id,
                similarity,
                angle_degrees: angle_degrees(similarity),
                description: posting.description.clone(),
            }
        })
        .collect();
    scored.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
    scored.truncate(TOP_K);

    if let Some(best) = scored.first() {
        tracing::info!(subset = %subset.kind, row_id = best.row_id, similarity = best.similarity, "best match");
    }
    Ok(Ranking { kind: subset.kind, candidates: subset.len(), matches: scored })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::Posting;

    fn postings(texts: &[&str]) -> Vec<Posting> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Posting { row_id: i * 10, description: t.to_string(), location: None, remote_allowed: None })
            .collect()
    }

    #[test]
    fn keeps_three_best_in_descending_order() {
        let rows = postings(&[
            "java backend developer",
            "python spark data engineer",
            "python developer",
            "data analyst excel",
            "spark scala engineer",
        ]);
        let subset = Subset { kind: SubsetKind::Local, postings: rows.iter().collect() };
        let query = Query::parse("python spark data engineer").unwrap();

        let ranking = rank(&query, &subset).unwrap();
        assert_eq!(ranking.candidates, 5);
        assert_eq!(ranking.matches.len(), TOP_K);
        assert_eq!(ranking.matches[0].row_id, 10);
        for pair in ranking.matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        for m in &ranking.matches {
            assert!((-1.0..=1.0).contains(&m.similarity));
            assert!((0.0..=180.0).contains(&m.angle_degrees));
            assert_eq!(m.angle_degrees, m.similarity.clamp(-1.0, 1.0).acos().to_degrees());
            assert_eq!(subset.get(m.row_id).unwrap().description, m.description);
        }
    }

    #[test]
    fn no_shared_terms_is_empty_vocabulary() {
        let rows = postings(&["java backend", "java backend"]);
        let subset = Subset { kind: SubsetKind::Remote, postings: rows.iter().collect() };
        let query = Query::parse("python data engineer").unwrap();
        assert_eq!(rank(&query, &subset), Err(RankError::EmptyVocabulary("remote".into())));
    }

    #[test]
    fn fewer_than_three_documents() {
        let rows = postings(&["rust engineer", "go engineer"]);
        let subset = Subset { kind: SubsetKind::Local, postings: rows.iter().collect() };
        let query = Query::parse("engineer").unwrap();
        let ranking = rank(&query, &subset).unwrap();
        assert_eq!(ranking.matches.len(), 2);
        assert_eq!(ranking.matches[0].row_id, 0);
        assert_eq!(ranking.matches[0].similarity, ranking.matches[1].similarity);
    }
}
