/// Trailing-window helpers shared across the classifiers
///
/// Stress, burnout, and loneliness all use the same rule: look at the most
/// recent entries and assign the most severe label that holds a strict
/// majority. This module factors that rule into one generic classifier so
/// the tie-break order lives in exactly one place.

/// Get the last `n` entries of a chronological slice (the whole slice if shorter)
pub fn trailing<T>(entries: &[T], n: usize) -> &[T] {
    &entries[entries.len().saturating_sub(n)..]
}

/// Trailing-window strict-majority classifier
///
/// Classifies each entry in the trailing window (the whole slice when
/// `window` is `None`), then walks `ladder` from most to least severe and
/// returns the first label held by a strict majority (more than half) of
/// the window. If no rung wins, `fallback` is returned. Empty input yields
/// `None` - the caller's "unknown" sentinel.
pub fn trailing_majority<T, L, F>(
    entries: &[T],
    window: Option<usize>,
    classify: F,
    ladder: &[L],
    fallback: L,
) -> Option<L>
where
    F: Fn(&T) -> L,
    L: PartialEq + Copy,
{
    if entries.is_empty() {
        return None;
    }

    let tail = match window {
        Some(n) => trailing(entries, n),
        None => entries,
    };

    for label in ladder {
        let count = tail.iter().filter(|e| classify(e) == *label).count();
        // Strict majority: exactly half is not enough
        if 2 * count > tail.len() {
            return Some(*label);
        }
    }

    Some(fallback)
}
