//! Normalized string similarity built on edit distance.

use crate::distance::edit_distance;

/// Scores how alike two strings are, from 0.0 (nothing shared) to 1.0
/// (identical).
///
/// Both sides are case-folded and trimmed first. Two empty strings are
/// identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, max_len) = if a_len > b_len {
        (&b, &a, a_len)
    } else {
        (&a, &b, b_len)
    };

    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(shorter, longer);
    let score = (max_len as f64 - distance as f64) / max_len as f64;
    score.clamp(0.0, 1.0)
}

/// Finds the label most similar to `input`.
///
/// Labels are scanned in order and the first one with the strictly
/// greatest score is kept. Returns its index and score only when the score
/// strictly exceeds `threshold`.
pub fn closest_label<'a, I>(input: &str, labels: I, threshold: f64) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, label) in labels.into_iter().enumerate() {
        let score = similarity(input, label);
        let better = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if better {
            best = Some((idx, score));
        }
    }
    best.filter(|(_, score)| *score > threshold)
}
