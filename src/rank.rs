//! Ranking helpers over centrality score vectors.

use ordered_float::NotNan;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// The `k` highest-scoring vertices as `(vertex, score)` pairs, best first;
/// ties break toward the lower vertex id.
///
/// Non-finite and non-positive scores never rank: a closeness of 0 means
/// "reaches nothing" and has no business in a most-central list.
pub fn most_central(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (vertex, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        // Finite by the check above.
        heap.push(Reverse((NotNan::new(score).unwrap(), Reverse(vertex))));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut ranked: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((score, Reverse(vertex)))| (vertex, score.into_inner()))
        .collect();
    ranked.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(&b.0))
    });
    ranked
}

/// Scale scores in place so they sum to 1; a no-op when the sum is not
/// positive.
pub fn normalize(scores: &mut [f64]) {
    let total: f64 = scores.iter().sum();
    if total > 0.0 {
        for score in scores {
            *score /= total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_best_k_in_descending_order() {
        let scores = [0.1, 0.9, 0.5, 0.7];
        assert_eq!(most_central(&scores, 2), vec![(1, 0.9), (3, 0.7)]);
    }

    #[test]
    fn ties_prefer_the_lower_vertex_id() {
        let scores = [0.5, 0.5, 0.5];
        assert_eq!(most_central(&scores, 2), vec![(0, 0.5), (1, 0.5)]);
    }

    #[test]
    fn zero_and_nan_scores_never_rank() {
        let scores = [0.0, f64::NAN, 0.3, -1.0];
        assert_eq!(most_central(&scores, 10), vec![(2, 0.3)]);
    }

    #[test]
    fn normalize_produces_a_unit_sum() {
        let mut scores = [1.0, 3.0];
        normalize(&mut scores);
        assert_eq!(scores, [0.25, 0.75]);

        let mut zeros = [0.0, 0.0];
        normalize(&mut zeros);
        assert_eq!(zeros, [0.0, 0.0]);
    }
}
