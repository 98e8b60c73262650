//! Total ordering and rank assignment

use crate::types::MatchResult;

/// Sort by score descending, then identifier ascending, and assign ranks 1..N.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.identifier.cmp(&b.identifier))
    });
    for (i, result) in results.iter_mut().enumerate() {
        result.rank = i + 1;
    }
    results
}
