//! Pairwise string similarity.

use rapidfuzz::distance::jaro_winkler;

/// Jaro-Winkler similarity of two strings, in `[0, 1]`.
///
/// Uses the standard prefix scale of 0.1 over at most four leading
/// characters. Identical non-empty strings score `1.0`. When either side is
/// empty the score is `0.0`, so blank names never count as a match. The
/// result is exactly symmetric in its arguments and never NaN.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    // Fixed argument order keeps floating-point results bit-identical both ways.
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let score = jaro_winkler::similarity(first.chars(), second.chars());
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
