//! Keyword filtering and per-keyword match tallies.

use std::fmt;

/// Match counts per keyword, in the order the keywords were given.
///
/// Every requested keyword is present, starting at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTally {
    entries: Vec<(String, usize)>,
}

impl KeywordTally {
    /// A tally with every keyword at zero.
    pub fn new(keywords: &[String]) -> Self {
        KeywordTally {
            entries: keywords.iter().map(|k| (k.clone(), 0)).collect(),
        }
    }

    fn increment_at(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.1 += 1;
        }
    }

    /// Count for `keyword`, if it was requested.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, count)| *count)
    }

    /// Keywords in request order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sum of every count; equals the number of filtered domains.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for KeywordTally {
    /// One `- keyword: count` line per keyword.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|(k, c)| format!("- {}: {}", k, c))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Splits a comma-separated keyword list into normalized keywords.
///
/// Keywords are trimmed and lowercased; empty entries and repeats are dropped
/// and first-seen order is kept.
pub fn normalize_keywords(raw: &str) -> Vec<String> {
    normalized(raw.split(','))
}

fn normalized<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.into_iter().map(|k| k.trim().to_lowercase()) {
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

/// Keeps the domains containing at least one keyword and tallies the matches.
///
/// Keywords are normalized like [`normalize_keywords`] first. Matching is a
/// case-insensitive substring test against the keywords in order. The first
/// matching keyword gets the count and the domain is kept once; domains
/// matching nothing are dropped.
pub fn filter_by_keywords(domains: Vec<String>, keywords: &[String]) -> (Vec<String>, KeywordTally) {
    let keywords = normalized(keywords.iter().map(String::as_str));
    let mut tally = KeywordTally::new(&keywords);
    let mut filtered = Vec::new();

    for domain in domains {
        let lowered = domain.to_lowercase();
        if let Some(index) = keywords.iter().position(|k| lowered.contains(k.as_str())) {
            tally.increment_at(index);
            filtered.push(domain);
        }
    }

    (filtered, tally)
}
