//! TF-IDF vector space built jointly over a query and a set of documents.
//!
//! Term weights are raw counts scaled by a smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
//! and each document vector is L2-normalized so cosine similarity reduces to a dot product.

use crate::posting::TermId;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

pub const MAX_FEATURES: usize = 5000;
pub const MIN_DF: u32 = 2;

/// Sparse vector as `(term_id, weight)` pairs sorted by term id.
pub type SparseVector = Vec<(TermId, f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerParams {
    pub max_features: usize,
    pub min_df: u32,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self { max_features: MAX_FEATURES, min_df: MIN_DF }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Retained terms in lexicographic order; the position is the term id.
    pub terms: Vec<String>,
    pub dictionary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub idf: Vec<f64>,
}

impl Vocabulary {
    pub fn len(&self) -> usize { self.terms.len() }
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

/// One fitted space: the vocabulary and one row per input document, in input order.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: Vocabulary,
    pub rows: Vec<SparseVector>,
}

pub fn fit_transform(corpus: &[&str], params: VectorizerParams) -> TfIdfMatrix {
    let counts: Vec<HashMap<String, u32>> = corpus.iter().map(|doc| term_counts(doc)).collect();
    let vocabulary = build_vocabulary(&counts, params);
    let rows = counts.iter().map(|tf| encode(tf, &vocabulary)).collect();
    tracing::debug!(docs = corpus.len(), terms = vocabulary.len(), "fitted tf-idf space");
    TfIdfMatrix { vocabulary, rows }
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut tf: HashMap<String, u32> = HashMap::new();
    for term in tokenize(text) {
        *tf.entry(term).or_insert(0) += 1;
    }
    tf
}

fn build_vocabulary(counts: &[HashMap<String, u32>], params: VectorizerParams) -> Vocabulary {
    let mut df: HashMap<&str, u32> = HashMap::new();
    let mut corpus_tf: HashMap<&str, u64> = HashMap::new();
    for doc in counts {
        for (term, &c) in doc {
            *df.entry(term.as_str()).or_insert(0) += 1;
            *corpus_tf.entry(term.as_str()).or_insert(0) += c as u64;
        }
    }

    let mut kept: Vec<&str> = df
        .iter()
        .filter(|&(_, &d)| d >= params.min_df)
        .map(|(t, _)| *t)
        .collect();
    if kept.len() > params.max_features {
        kept.sort_by(|a, b| corpus_tf[b].cmp(&corpus_tf[a]).then_with(|| a.cmp(b)));
        kept.truncate(params.max_features);
    }
    kept.sort_unstable();

    let n = counts.len() as f64;
    let mut vocab = Vocabulary::default();
    for (id, term) in kept.into_iter().enumerate() {
        let d = df[term];
        vocab.dictionary.insert(term.to_string(), id as TermId);
        vocab.terms.push(term.to_string());
        vocab.df.push(d);
        vocab.idf.push(((1.0 + n) / (1.0 + d as f64)).ln() + 1.0);
    }
    vocab
}

fn encode(tf: &HashMap<String, u32>, vocab: &Vocabulary) -> SparseVector {
    let mut v: SparseVector = tf
        .iter()
        .filter_map(|(term, &c)| {
            vocab.dictionary.get(term).map(|&tid| (tid, c as f64 * vocab.idf[tid as usize]))
        })
        .collect();
    v.sort_by_key(|(tid, _)| *tid);
    normalize(&mut v);
    v
}

pub fn norm(v: &[(TermId, f64)]) -> f64 {
    v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Scale to unit length; a zero vector is left as is.
pub fn normalize(v: &mut [(TermId, f64)]) {
    let n = norm(v);
    if n > 0.0 {
        for (_, w) in v.iter_mut() {
            *w /= n;
        }
    }
}
