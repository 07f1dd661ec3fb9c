use crate::posting::TermId;
use crate::vectorizer::norm;
use std::cmp::Ordering;

/// Dot product of two sparse vectors sorted by term id.
pub fn dot(a: &[(TermId, f64)], b: &[(TermId, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Normalized dot product. Zero when either side has no weight.
pub fn cosine_similarity(a: &[(TermId, f64)], b: &[(TermId, f64)]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return 0.0;
    }
    dot(a, b) / denom
}

/// Angle in degrees between two vectors with the given cosine, clipped into the domain of acos.
pub fn angle_degrees(similarity: f64) -> f64 {
    similarity.clamp(-1.0, 1.0).acos().to_degrees()
}
