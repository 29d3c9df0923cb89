//! Fuzzy name suggestions for "Did you mean ...?" errors.

use std::cmp::Ordering;

/// Similarity floor below which a candidate is not worth suggesting.
const MIN_SIMILARITY: f64 = 0.7;

/// Rank `candidates` by Jaro-Winkler similarity to `query` (case
/// insensitive) and return up to `limit` names at or above the similarity
/// floor, best first, ties alphabetical.
pub(crate) fn closest_matches<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let query = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            (
                strsim::jaro_winkler(&candidate.to_lowercase(), &query),
                candidate,
            )
        })
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<&'static str> {
        vec!["CSE", "HUB", "MGH", "SAV"]
    }

    #[test]
    fn exact_match_comes_first() {
        let matches = closest_matches(names().into_iter(), "CSE", 3);
        assert_eq!(matches.first().map(String::as_str), Some("CSE"));
    }

    #[test]
    fn typo_still_finds_the_neighbour() {
        let matches = closest_matches(names().into_iter(), "CSB", 3);
        assert!(matches.contains(&"CSE".to_string()));
    }

    #[test]
    fn wildly_different_input_yields_nothing() {
        let matches = closest_matches(names().into_iter(), "zzzzzzzzzz", 3);
        assert!(matches.is_empty());
    }

    #[test]
    fn limit_is_respected() {
        let matches = closest_matches(names().into_iter(), "S", 1);
        assert!(matches.len() <= 1);
    }
}
