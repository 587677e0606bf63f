//! Fuzzy person-name matching for author lookup
//!
//! Author queries arrive as free text ("articles by jon smith") and must be
//! matched against the canonical author list despite typos, partial names,
//! diacritics, and initials. [`FuzzyNameMatcher`] scores one query against
//! one name by running several independent strategies and keeping the best
//! result, so a strong signal from any single strategy is enough.

use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::AuthorDoc;

/// A scored author match
#[derive(Debug, Clone)]
pub struct NameMatch {
    pub author: AuthorDoc,
    pub score: f64,
}

/// Scores free-text queries against canonical author names.
///
/// Scores are in [0, 1]; anything below `min_score` is discarded. Each
/// strategy carries a confidence weight so an exact match always beats a
/// word-level match, which in turn beats a pure edit-distance match.
#[derive(Debug, Clone)]
pub struct FuzzyNameMatcher {
    min_score: f64,
}

impl Default for FuzzyNameMatcher {
    fn default() -> Self {
        Self { min_score: 0.05 }
    }
}

impl FuzzyNameMatcher {
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }

    /// Score one query against one name, in [0, 1].
    pub fn score(&self, query: &str, name: &str) -> f64 {
        let query = normalize_name(query);
        let name = normalize_name(name);
        if query.is_empty() || name.is_empty() {
            return 0.0;
        }

        let mut score: f64 = 0.0;
        if query == name {
            score = score.max(1.0);
        }
        score = score.max(0.9 * levenshtein_similarity(&query, &name));
        score = score.max(0.95 * word_match_score(&query, &name));
        score = score.max(0.85 * substring_score(&query, &name));
        score = score.max(0.7 * initials_score(&query, &name));

        // A close-length candidate is more likely the intended person than a
        // long name that merely contains the query.
        if score > 0.5 && name.chars().count() <= query.chars().count() + 5 {
            score = (score * 1.1).min(1.0);
        }

        trace!(%query, %name, score, "scored name candidate");
        score
    }

    /// Score the query against every author and return the top `k` matches,
    /// best first. Ties keep the input order of `authors`.
    pub fn top_matches(&self, query: &str, authors: &[AuthorDoc], k: usize) -> Vec<NameMatch> {
        let mut matches: Vec<NameMatch> = authors
            .iter()
            .filter_map(|author| {
                let name = author.full_name.as_deref()?;
                let score = self.score(query, name);
                (score >= self.min_score).then(|| NameMatch {
                    author: author.clone(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(k);
        matches
    }
}

/// Canonicalize a name for comparison: lowercase, strip diacritics, replace
/// punctuation with spaces, collapse whitespace.
pub fn normalize_name(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Edit-distance similarity: `1 - distance / max_len`, in [0, 1]
fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Standard Levenshtein distance over chars
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Fraction of query words that find a counterpart in the name.
///
/// A query word matches exactly (1.0), by containment of a word at least
/// three chars long (0.7), or by edit-distance similarity of at least 0.8
/// (at that value). Each query word counts its first match only.
fn word_match_score(query: &str, name: &str) -> f64 {
    let query_words: Vec<&str> = query.split_whitespace().collect();
    let name_words: Vec<&str> = name.split_whitespace().collect();
    if query_words.is_empty() || name_words.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for qw in &query_words {
        if name_words.contains(qw) {
            total += 1.0;
            continue;
        }
        for nw in &name_words {
            let word_score = if qw.len() >= 3 && nw.contains(qw) {
                0.7
            } else if nw.len() >= 3 && qw.contains(nw) {
                0.7
            } else {
                let sim = levenshtein_similarity(qw, nw);
                if sim >= 0.8 { sim } else { 0.0 }
            };
            if word_score > 0.0 {
                total += word_score;
                break;
            }
        }
    }
    total / query_words.len() as f64
}

/// Containment in either direction, discounted by the length ratio
fn substring_score(query: &str, name: &str) -> f64 {
    let query_len = query.chars().count() as f64;
    let name_len = name.chars().count() as f64;
    if name.contains(query) {
        0.9 * (query_len / name_len)
    } else if query.contains(name) {
        0.8 * (name_len / query_len)
    } else {
        0.0
    }
}

/// Match short queries like "jd" against "jane doe" by first letters in order
fn initials_score(query: &str, name: &str) -> f64 {
    let query_words: Vec<&str> = query.split_whitespace().collect();
    if query_words.is_empty() || query_words.len() > 3 {
        return 0.0;
    }

    let name_initials: Vec<char> = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    let query_initials: Vec<char> = query_words.iter().filter_map(|w| w.chars().next()).collect();

    if query_initials.len() <= name_initials.len()
        && query_initials
            .iter()
            .zip(name_initials.iter())
            .all(|(q, n)| q == n)
    {
        0.7
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> FuzzyNameMatcher {
        FuzzyNameMatcher::default()
    }

    fn author(id: &str, name: &str) -> AuthorDoc {
        AuthorDoc {
            id: id.to_string(),
            full_name: Some(name.to_string()),
            role: None,
        }
    }

    #[test]
    fn exact_match_scores_one() {
        assert_eq!(matcher().score("John Smith", "John Smith"), 1.0);
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(matcher().score("john smith", "John   Smith."), 1.0);
        assert_eq!(matcher().score("o'brien", "O Brien"), 1.0);
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(matcher().score("jose garcia", "José García"), 1.0);
    }

    #[test]
    fn close_misspelling_scores_high() {
        // Whole-string edit similarity wins here: distance 1 over 10 chars
        // gives 0.9, weighted 0.9 = 0.81, then the close-length bonus.
        let score = matcher().score("jon smith", "John Smith");
        assert!((score - 0.891).abs() < 1e-9, "score={score}");
        assert!(score > 0.5);
    }

    #[test]
    fn single_word_query_matches_surname() {
        let score = matcher().score("smith", "John Smith");
        assert!(score > 0.4, "score={score}");
    }

    #[test]
    fn unrelated_names_score_low() {
        let score = matcher().score("alice wonderland", "Bob Builder");
        assert!(score < 0.5, "score={score}");
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(matcher().score("", "John Smith"), 0.0);
        assert_eq!(matcher().score("john", ""), 0.0);
        assert_eq!(matcher().score("...", "John Smith"), 0.0);
    }

    #[test]
    fn normalize_name_collapses_whitespace() {
        assert_eq!(normalize_name("  Mary-Jane  O'Hara  "), "mary jane o hara");
        assert_eq!(normalize_name("José"), "jose");
        assert_eq!(normalize_name("under_score"), "under_score");
    }

    #[test]
    fn levenshtein_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn initials_match_in_order() {
        let score = matcher().score("jd", "Jane Doe");
        assert!(score > 0.0, "score={score}");
        // Reversed initials do not match.
        assert!(initials_score("dj", "jane doe") == 0.0);
    }

    #[test]
    fn top_matches_ranks_best_first_and_truncates() {
        let authors = vec![
            author("1", "Robert Plant"),
            author("2", "John Smith"),
            author("3", "Jon Smithe"),
            author("4", "Johanna Smithson"),
        ];
        let matches = matcher().top_matches("john smith", &authors, 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].author.id, "2");
        assert_eq!(matches[0].score, 1.0);
        assert!(matches[0].score >= matches[1].score);
    }

    #[test]
    fn top_matches_skips_authors_without_names() {
        let mut nameless = author("1", "");
        nameless.full_name = None;
        let matches = matcher().top_matches("anyone", &[nameless], 5);
        assert!(matches.is_empty());
    }

    #[test]
    fn low_scores_are_filtered_by_min_score() {
        let authors = vec![author("1", "Zyx Qwerty")];
        let strict = FuzzyNameMatcher::new(0.5);
        assert!(strict.top_matches("john smith", &authors, 5).is_empty());
    }
}
