//! Bigram-overlap string similarity.
//!
//! Scores two strings by the fraction of adjacent-character pairs they
//! share, after removing space characters. Search matching accepts scores
//! at or above [`SIMILARITY_THRESHOLD`].

use std::collections::HashMap;

/// Acceptance threshold for search matching.
pub const SIMILARITY_THRESHOLD: f32 = 0.4;

/// Maximum number of matches a search returns.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Similarity score in `[0, 1]`.
///
/// Builds a multiset of `a`'s bigrams, then scans `b`'s bigrams left to
/// right, consuming one multiset entry per hit so repeated bigrams only
/// count while `a` still has them. Inputs whose combined stripped length
/// is 2 or less score 0.0; rounding overshoot at short lengths is clamped
/// to 1.0.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().filter(|c| *c != ' ').collect();
    let b: Vec<char> = b.chars().filter(|c| *c != ' ').collect();

    if a.len() + b.len() <= 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), u32> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersections = 0u32;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersections += 1;
            }
        }
    }

    let score = (2.0 * intersections as f32) / (a.len() + b.len() - 2) as f32;
    score.min(1.0)
}
