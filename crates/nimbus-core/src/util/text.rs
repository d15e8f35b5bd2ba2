//! Fuzzy matching of user input against known names.

use strsim::normalized_levenshtein;

/// Suggest the closest candidate to `input`, if any scores above `threshold`.
///
/// A candidate scores the better of its whole-string similarity and the
/// mean similarity of its `-` separated parts, so `mono` scores 0.625
/// against `mono-repo` where the whole string alone gives 0.44. The
/// highest score wins; on ties the earliest candidate is kept.
pub fn did_you_mean<'a, S: AsRef<str>>(
    input: &str,
    candidates: &'a [S],
    threshold: f64,
) -> Option<&'a str> {
    let mut best: Option<(f64, &str)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = dash_aware_similarity(input, candidate);
        if score <= threshold {
            continue;
        }
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

fn dash_aware_similarity(word: &str, dashed: &str) -> f64 {
    let full = normalized_levenshtein(word, dashed);

    let parts: Vec<&str> = dashed.split('-').collect();
    let mean = parts
        .iter()
        .map(|part| normalized_levenshtein(part, word))
        .sum::<f64>()
        / parts.len() as f64;

    full.max(mean)
}
