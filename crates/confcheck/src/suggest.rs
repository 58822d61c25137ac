//! "Did you mean" suggestions for unrecognized keys.

/// Candidates further than this many edits away are never suggested.
pub const MAX_SUGGESTION_DISTANCE: usize = 5;

/// Returns every candidate tied at the minimum edit distance from `word`.
///
/// Candidates keep their given order and duplicates are reported once.
/// Nothing is returned when the set is empty or when even the closest
/// candidate is more than [`MAX_SUGGESTION_DISTANCE`] edits away.
///
/// # Examples
///
/// ```rust,ignore
/// use nebula_confcheck::suggest::best_suggestions;
///
/// assert_eq!(best_suggestions("vlue", ["value", "number"]), vec!["value"]);
/// assert!(best_suggestions("zzzzzzzzz", ["value"]).is_empty());
/// ```
pub fn best_suggestions<'a, I>(word: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&str, usize)> = Vec::new();
    for candidate in candidates {
        if scored.iter().any(|(seen, _)| *seen == candidate) {
            continue;
        }
        scored.push((candidate, levenshtein(word, candidate)));
    }

    let Some(min) = scored.iter().map(|(_, distance)| *distance).min() else {
        return Vec::new();
    };
    if min > MAX_SUGGESTION_DISTANCE {
        return Vec::new();
    }

    scored
        .into_iter()
        .filter(|(_, distance)| *distance == min)
        .map(|(candidate, _)| candidate.to_owned())
        .collect()
}

/// Renders a non-empty suggestion list as warning text.
pub(crate) fn perhaps_you_meant(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        None
    } else {
        Some(format!("perhaps you meant {}", suggestions.join(", ")))
    }
}

/// Levenshtein edit distance, counted in chars.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    // single-row DP: row[j] = distance(a[..i], b[..j])
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}
