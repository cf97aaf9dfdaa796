//! Levenshtein edit distance.

/// Returns the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Characters are Unicode scalar values. Only two rows of the classic
/// dynamic-programming table are kept, sized by the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Columns follow the shorter string.
    let (rows, cols) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if cols.is_empty() {
        return rows.len();
    }

    let mut prev: Vec<usize> = (0..=cols.len()).collect();
    let mut curr: Vec<usize> = vec![0; cols.len() + 1];

    for (i, rc) in rows.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cc) in cols.iter().enumerate() {
            curr[j + 1] = if rc == cc {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols.len()]
}
