//! Text helpers for snippet handling and keyword scanning.

/// Truncate a snippet to at most `max_chars` characters, on a char boundary
#[must_use]
pub fn truncate_snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.trim().to_string();
    }
    text.chars().take(max_chars).collect::<String>().trim().to_string()
}

/// Case-insensitive substring containment
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Count how many terms from a vocabulary appear in the text
///
/// Each term counts once regardless of how often it occurs, so the score
/// measures vocabulary coverage rather than raw repetition.
#[must_use]
pub fn count_keyword_hits(text: &str, terms: &[&str]) -> usize {
    let lowered = text.to_lowercase();
    terms
        .iter()
        .filter(|term| lowered.contains(&term.to_lowercase()))
        .count()
}

/// Collect every occurrence of every vocabulary term in the text
///
/// A term that appears twice is pushed twice; callers that want
/// deduplication do it themselves.
#[must_use]
pub fn collect_term_occurrences(text: &str, terms: &[&str]) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut matches = Vec::new();
    for term in terms {
        let needle = term.to_lowercase();
        let count = lowered.matches(&needle).count();
        for _ in 0..count {
            matches.push((*term).to_string());
        }
    }
    matches
}

/// First vocabulary term found in the text, in vocabulary order
#[must_use]
pub fn first_term_match(text: &str, terms: &[&str]) -> Option<String> {
    let lowered = text.to_lowercase();
    terms
        .iter()
        .find(|term| lowered.contains(&term.to_lowercase()))
        .map(|term| (*term).to_string())
}
