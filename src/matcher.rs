use aho_corasick::AhoCorasick;
use fancy_regex::Regex;

use crate::db::MatcherEntry;
use crate::error::{Error, Result};
use crate::literal::extract_literals;

/// Shortest literal worth prefiltering on.
const MIN_LITERAL_LEN: usize = 3;

/// One heuristic rule: either a plain substring or a regex.
pub(crate) enum Matcher {
    Keyword(String),
    Pattern(PatternMatcher),
}

impl Matcher {
    pub fn keyword(keyword: &str) -> Option<Self> {
        normalized_keyword(keyword).map(Self::Keyword)
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(PatternMatcher::compile(pattern, None)?))
    }

    fn from_entry(table: &'static str, index: usize, entry: &MatcherEntry) -> Result<Self> {
        let invalid = || Error::InvalidMatcher { table, index };
        let unless = match entry.unless.as_deref() {
            Some(u) => Some(normalized_keyword(u).ok_or_else(invalid)?),
            None => None,
        };
        match (entry.keyword.as_deref(), entry.pattern.as_deref(), unless) {
            (Some(k), None, None) => Self::keyword(k).ok_or_else(invalid),
            (None, Some(p), unless) => Ok(Self::Pattern(PatternMatcher::compile(p, unless)?)),
            _ => Err(invalid()),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Keyword(k) => haystack.contains(k.as_str()),
            Self::Pattern(p) => p.is_match(haystack),
        }
    }
}

fn normalized_keyword(keyword: &str) -> Option<String> {
    let keyword = keyword.trim().to_lowercase();
    (!keyword.is_empty()).then_some(keyword)
}

/// A compiled regex gated by the literal prefixes it requires.
///
/// `unless` vetoes the match when the haystack contains it. Tables use it in
/// place of an unanchored `(?!.*x)`, which is re-evaluated at every position.
pub(crate) struct PatternMatcher {
    regex: Regex,
    prefilter: Prefilter,
    unless: Option<String>,
}

enum Prefilter {
    /// No usable literals: always run the regex.
    None,
    /// Haystack must contain one of these before the regex is tried.
    Literals(AhoCorasick),
}

impl PatternMatcher {
    fn compile(pattern: &str, unless: Option<String>) -> Result<Self> {
        let regex = Regex::new(&format!("(?i){}", pattern))?;
        let literals = extract_literals(pattern, MIN_LITERAL_LEN);
        let prefilter = if literals.is_empty() {
            Prefilter::None
        } else {
            Prefilter::Literals(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&literals)?,
            )
        };
        Ok(Self {
            regex,
            prefilter,
            unless,
        })
    }

    fn is_match(&self, haystack: &str) -> bool {
        if let Some(unless) = &self.unless {
            if haystack.contains(unless.as_str()) {
                return false;
            }
        }
        if let Prefilter::Literals(ac) = &self.prefilter {
            if !ac.is_match(haystack) {
                return false;
            }
        }
        // Backtrack-limit errors count as no match.
        self.regex.is_match(haystack).unwrap_or(false)
    }
}

/// Ordered matcher table. Keywords are searched in a single Aho-Corasick
/// pass; patterns are tried in declared order up to the first keyword hit.
pub(crate) struct MatcherSet {
    matchers: Vec<Matcher>,
    keywords: Option<AhoCorasick>,
    /// Aho-Corasick pattern id → index into `matchers`.
    keyword_positions: Vec<usize>,
}

impl MatcherSet {
    pub fn build(matchers: Vec<Matcher>) -> Result<Self> {
        let mut keyword_positions = Vec::new();
        let mut keywords = Vec::new();
        for (idx, m) in matchers.iter().enumerate() {
            if let Matcher::Keyword(k) = m {
                keyword_positions.push(idx);
                keywords.push(k.as_str());
            }
        }

        let keywords = if keywords.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&keywords)?,
            )
        };

        Ok(Self {
            matchers,
            keywords,
            keyword_positions,
        })
    }

    pub fn from_entries(table: &'static str, entries: &[MatcherEntry]) -> Result<Self> {
        let matchers = entries
            .iter()
            .enumerate()
            .map(|(idx, e)| Matcher::from_entry(table, idx, e))
            .collect::<Result<Vec<_>>>()?;
        Self::build(matchers)
    }

    pub fn from_keywords(table: &'static str, keywords: &[String]) -> Result<Self> {
        let matchers = keywords
            .iter()
            .enumerate()
            .map(|(index, k)| Matcher::keyword(k).ok_or(Error::InvalidMatcher { table, index }))
            .collect::<Result<Vec<_>>>()?;
        Self::build(matchers)
    }

    /// Index of the first matcher (in declared order) that matches.
    pub fn first_match(&self, haystack: &str) -> Option<usize> {
        let cutoff = self
            .keywords
            .as_ref()
            .and_then(|ac| {
                ac.find_overlapping_iter(haystack)
                    .map(|m| self.keyword_positions[m.pattern().as_usize()])
                    .min()
            })
            .unwrap_or(usize::MAX);

        for (idx, m) in self.matchers.iter().enumerate() {
            if idx >= cutoff {
                break;
            }
            if let Matcher::Pattern(p) = m {
                if p.is_match(haystack) {
                    return Some(idx);
                }
            }
        }

        (cutoff != usize::MAX).then_some(cutoff)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.first_match(haystack).is_some()
    }

    /// Plain keyword membership, used for exact-token checks on the hint.
    pub fn has_keyword(&self, token: &str) -> bool {
        self.matchers
            .iter()
            .any(|m| matches!(m, Matcher::Keyword(k) if k == token))
    }
}
