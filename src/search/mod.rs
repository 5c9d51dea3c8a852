//! In-page search.
//!
//! Given the free-text value of the nav search box, scans the visible text of
//! the page tree, wraps every case-insensitive literal occurrence in a
//! `<mark class="page-highlight">` and reports the first marker so the page
//! can scroll it into view. Queries are matched literally; regex
//! metacharacters in the input carry no meaning.

mod highlight;

pub use highlight::clear_highlights;

use regex::{Regex, RegexBuilder};

use crate::dom::Document;

/// Subtrees never scanned nor mutated.
pub const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "nav", "footer"];

pub const MARK_TAG: &str = "mark";
pub const MARK_CLASS: &str = "page-highlight";
/// Anchor id assigned to the first marker of a search, the scroll target.
pub const FIRST_MARK_ID: &str = "primera-coincidencia";

/// Result of one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Markers inserted across the whole traversal.
    pub markers: usize,
    /// Anchor id of the first marker, when at least one match exists.
    pub first_marker: Option<String>,
}

/// A match inside a single text run, as a half-open byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatch {
    pub start: usize,
    pub end: usize,
}

/// One segment of a rebuilt text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Hit(&'a str),
}

/// Executes a search over the page tree.
///
/// Always clears existing markers first. A query that trims to empty stops
/// there: prior highlights are gone and nothing new is inserted. The
/// traversal covers the `main` container, falling back to the document body
/// (and finally the whole tree) when none exists.
pub fn run_search(doc: &mut Document, raw_query: &str) -> SearchOutcome {
    clear_highlights(&mut doc.root);
    let query = raw_query.trim();
    if query.is_empty() {
        return SearchOutcome::default();
    }
    let Some(matcher) = build_matcher(query) else {
        return SearchOutcome::default();
    };
    highlight::apply(doc, &matcher)
}

/// Compiles the trimmed query into a case-insensitive literal matcher.
///
/// Escaping first makes metacharacters inert: `.*` only ever matches a
/// literal `.*`. Compilation can only fail on pathological input sizes, and
/// that degrades to "no matches" rather than an error.
fn build_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Scans one text run for every non-overlapping occurrence, left to right.
///
/// A zero-length match advances the scan position by one character so the
/// loop terminates even for patterns that can match the empty string.
pub fn scan_matches(matcher: &Regex, text: &str) -> Vec<RunMatch> {
    let mut matches = Vec::new();
    let mut at = 0;
    while at <= text.len() {
        let Some(found) = matcher.find_at(text, at) else {
            break;
        };
        matches.push(RunMatch {
            start: found.start(),
            end: found.end(),
        });
        if found.end() > found.start() {
            at = found.end();
        } else {
            match text[found.end()..].chars().next() {
                Some(c) => at = found.end() + c.len_utf8(),
                None => break,
            }
        }
    }
    matches
}

/// Pure rebuild of a text run: its match list becomes an ordered sequence of
/// plain and hit spans. Concatenating the spans reproduces the run exactly.
pub fn segment_run<'a>(text: &'a str, matches: &[RunMatch]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in matches {
        if m.start > cursor {
            spans.push(Span::Plain(&text[cursor..m.start]));
        }
        spans.push(Span::Hit(&text[m.start..m.end]));
        cursor = m.end;
    }
    if cursor < text.len() {
        spans.push(Span::Plain(&text[cursor..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(q: &str) -> Regex {
        build_matcher(q).unwrap()
    }

    #[test]
    fn scan_finds_case_insensitive_occurrences() {
        let re = matcher("tesela");
        let found = scan_matches(&re, "Bienvenido a Tesela 40. Tesela 40 es artesanía.");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], RunMatch { start: 13, end: 19 });
    }

    #[test]
    fn scan_is_greedy_non_overlapping() {
        let re = matcher("aa");
        let found = scan_matches(&re, "aaaa");
        assert_eq!(
            found,
            vec![RunMatch { start: 0, end: 2 }, RunMatch { start: 2, end: 4 }]
        );
    }

    #[test]
    fn metacharacters_match_literally() {
        let re = matcher(".*");
        let found = scan_matches(&re, "un literal .* aquí");
        assert_eq!(found, vec![RunMatch { start: 11, end: 13 }]);
    }

    #[test]
    fn zero_width_guard_terminates() {
        // Not reachable through run_search (empty queries are filtered), but
        // the scan itself must terminate for patterns matching "".
        let re = RegexBuilder::new("x*").build().unwrap();
        let found = scan_matches(&re, "ayx");
        assert!(found.len() >= 3);
        assert!(found.iter().any(|m| m.end > m.start));
    }

    #[test]
    fn segments_reconstruct_the_run() {
        let text = "Tesela 40 es Tesela";
        let re = matcher("tesela");
        let found = scan_matches(&re, text);
        let spans = segment_run(text, &found);
        let rebuilt: String = spans
            .iter()
            .map(|s| match s {
                Span::Plain(t) | Span::Hit(t) => *t,
            })
            .collect();
        assert_eq!(rebuilt, text);
        assert_eq!(
            spans
                .iter()
                .filter(|s| matches!(s, Span::Hit(_)))
                .count(),
            2
        );
    }

    #[test]
    fn match_at_run_boundaries_produces_no_empty_spans() {
        let text = "tesela";
        let re = matcher("tesela");
        let spans = segment_run(text, &scan_matches(&re, text));
        assert_eq!(spans, vec![Span::Hit("tesela")]);
    }

    #[test]
    fn unicode_case_folding_applies() {
        let re = matcher("artesanía");
        let found = scan_matches(&re, "ARTESANÍA contemporánea");
        assert_eq!(found.len(), 1);
    }
}
