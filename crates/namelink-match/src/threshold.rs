//! Data-driven score cutoffs.
//!
//! A fixed threshold either lets noise through or drops true matches
//! depending on the query. The largest relative gap between consecutive
//! sorted scores is taken instead as the boundary between matches and noise.

/// Pick a cutoff from observed scores.
///
/// Scores below `floor` are ignored. With none left the floor itself is
/// returned; with one left, that score. Otherwise the remaining scores are
/// sorted descending and the score sitting just before the largest ratio
/// `sorted[i] / sorted[i + 1]` is returned. A non-positive denominator counts
/// as an infinite ratio. Ties go to the earliest (highest) position.
pub fn select_threshold(scores: &[f64], floor: f64) -> f64 {
    let mut kept: Vec<f64> = scores.iter().copied().filter(|s| *s >= floor).collect();
    match kept.len() {
        0 => return floor,
        1 => return kept[0],
        _ => {}
    }

    kept.sort_by(|a, b| b.total_cmp(a));

    let mut best_idx = 0;
    let mut best_ratio = f64::NEG_INFINITY;
    for (idx, pair) in kept.windows(2).enumerate() {
        let ratio = if pair[1] <= 0.0 {
            f64::INFINITY
        } else {
            pair[0] / pair[1]
        };
        if ratio > best_ratio {
            best_ratio = ratio;
            best_idx = idx;
        }
    }

    kept[best_idx]
}
