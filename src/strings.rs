//! Algorithms over strings.
//!
//! All functions borrow their input and return new values. Character-level
//! operations work on Unicode scalar values; [`find_all`] reports byte
//! offsets so results can be used to slice the text directly.

use std::collections::HashSet;

/// Returns the characters of `s` in reverse order.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Returns the whitespace-separated words of `s` in reverse order, joined by
/// single spaces.
///
/// ```
/// use seqkit::strings::reverse_words;
///
/// assert_eq!(reverse_words("one two  three "), "three two one");
/// ```
pub fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Two cursors walk inward from both ends comparing characters.
///
/// Empty and single-character strings are palindromes.
pub fn is_palindrome(s: &str) -> bool {
    let mut cursors = s.chars();
    while let (Some(front), Some(back)) = (cursors.next(), cursors.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Keeps the first occurrence of every character, preserving order.
///
/// ```
/// use seqkit::strings::remove_duplicate_chars;
///
/// assert_eq!(remove_duplicate_chars("banana"), "ban");
/// ```
pub fn remove_duplicate_chars(s: &str) -> String {
    let mut seen = HashSet::new();
    s.chars().filter(|&c| seen.insert(c)).collect()
}

/// Collapses every run of equal adjacent characters to a single one.
///
/// ```
/// use seqkit::strings::collapse_adjacent_runs;
///
/// assert_eq!(collapse_adjacent_runs("aaabbcdddaaa"), "abcda");
/// ```
pub fn collapse_adjacent_runs(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    let mut previous = None;
    for c in s.chars() {
        if previous != Some(c) {
            collapsed.push(c);
        }
        previous = Some(c);
    }
    collapsed
}

/// Naive substring search reporting the start byte offset of every match,
/// overlapping matches included. `O(n·m)`.
///
/// An empty `pattern`, or one longer than `text`, has no matches.
///
/// # Examples
///
/// ```
/// use seqkit::strings::find_all;
///
/// assert_eq!(find_all("abracabradabra", "bra"), vec![1, 6, 11]);
/// assert_eq!(find_all("aaaaa", "aaa"), vec![0, 1, 2]);
/// assert!(find_all("hello", "world").is_empty());
/// ```
pub fn find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for start in 0..=text.len() - pattern.len() {
        let mut matched = 0;
        while matched < pattern.len() && text[start + matched] == pattern[matched] {
            matched += 1;
        }
        // Advancing by one instead of `matched` keeps overlapping matches.
        if matched == pattern.len() {
            matches.push(start);
        }
    }
    matches
}
