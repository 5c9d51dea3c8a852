//! Marker insertion and removal over the page tree.

use regex::Regex;

use crate::dom::{find_element, find_element_mut, Document, Element, Node};

use super::{scan_matches, segment_run, SearchOutcome, Span, FIRST_MARK_ID, MARK_CLASS, MARK_TAG, SKIP_TAGS};

/// Removes every highlight marker beneath `el`, restoring the wrapped text
/// and merging the runs the markers had split. Idempotent: a tree without
/// markers is left untouched (normalization of already-normal children is a
/// no-op).
pub fn clear_highlights(el: &mut Element) {
    let drained = std::mem::take(&mut el.children);
    let mut cleared: Vec<Node> = Vec::with_capacity(drained.len());
    let mut unwrapped = false;
    for child in drained {
        match child {
            Node::Element(mut inner) => {
                if is_marker(&inner) {
                    cleared.push(Node::Text(inner.text_content()));
                    unwrapped = true;
                } else {
                    clear_highlights(&mut inner);
                    cleared.push(Node::Element(inner));
                }
            }
            text => cleared.push(text),
        }
    }
    el.children = cleared;
    if unwrapped {
        el.normalize_children();
    }
}

fn is_marker(el: &Element) -> bool {
    el.name == MARK_TAG && el.has_class(MARK_CLASS)
}

struct WrapState<'a> {
    matcher: &'a Regex,
    markers: usize,
    first_marker: Option<String>,
}

/// Walks the content container and wraps every match. Assumes the tree holds
/// no markers (the caller clears first).
pub(super) fn apply(doc: &mut Document, matcher: &Regex) -> SearchOutcome {
    let mut state = WrapState {
        matcher,
        markers: 0,
        first_marker: None,
    };
    match container_tag(&doc.root) {
        Some(tag) => {
            if let Some(container) = find_element_mut(&mut doc.root, tag) {
                walk(container, &mut state);
            }
        }
        None => walk(&mut doc.root, &mut state),
    }
    SearchOutcome {
        markers: state.markers,
        first_marker: state.first_marker,
    }
}

/// The main content area is the traversal root; a page without one falls
/// back to the document body.
fn container_tag(root: &Element) -> Option<&'static str> {
    ["main", "body"]
        .into_iter()
        .find(|tag| find_element(root, tag).is_some())
}

fn walk(el: &mut Element, state: &mut WrapState<'_>) {
    let drained = std::mem::take(&mut el.children);
    let mut rebuilt: Vec<Node> = Vec::with_capacity(drained.len());
    for child in drained {
        match child {
            Node::Element(mut inner) => {
                if !SKIP_TAGS.contains(&inner.name.as_str()) {
                    walk(&mut inner, state);
                }
                rebuilt.push(Node::Element(inner));
            }
            Node::Text(text) => {
                if text.trim().is_empty() {
                    rebuilt.push(Node::Text(text));
                    continue;
                }
                let matches = scan_matches(state.matcher, &text);
                if matches.is_empty() {
                    rebuilt.push(Node::Text(text));
                    continue;
                }
                for span in segment_run(&text, &matches) {
                    match span {
                        Span::Plain(plain) => rebuilt.push(Node::Text(plain.to_string())),
                        Span::Hit(hit) => rebuilt.push(Node::Element(make_marker(hit, state))),
                    }
                }
            }
        }
    }
    el.children = rebuilt;
}

fn make_marker(hit: &str, state: &mut WrapState<'_>) -> Element {
    let mut marker = Element::new(MARK_TAG);
    marker.set_attr("class", MARK_CLASS);
    if state.markers == 0 {
        marker.set_attr("id", FIRST_MARK_ID);
        state.first_marker = Some(FIRST_MARK_ID.to_string());
    }
    state.markers += 1;
    marker.children.push(Node::Text(hit.to_string()));
    marker
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::run_search;

    fn page(main_inner: &str) -> Document {
        Document::parse(&format!(
            "<html><body><nav><p>Tesela en la nav</p></nav>\
             <main>{main_inner}</main>\
             <footer><p>© Tesela 40</p></footer></body></html>"
        ))
    }

    fn count_markers(el: &Element) -> usize {
        let mut n = usize::from(is_marker(el));
        for child in &el.children {
            if let Node::Element(inner) = child {
                n += count_markers(inner);
            }
        }
        n
    }

    #[test]
    fn wraps_every_occurrence_in_main_only() {
        let mut doc = page("<p>Bienvenido a Tesela 40. Tesela 40 es artesanía.</p>");
        let before = doc.text_content();
        let outcome = run_search(&mut doc, "tesela");

        assert_eq!(outcome.markers, 2);
        assert_eq!(outcome.first_marker.as_deref(), Some(FIRST_MARK_ID));
        assert_eq!(count_markers(&doc.root), 2);
        // Wrapping moves no characters.
        assert_eq!(doc.text_content(), before);
        // Nav and footer text stays opaque.
        let nav = doc.find_element("nav").unwrap();
        assert_eq!(count_markers(nav), 0);
        let footer = doc.find_element("footer").unwrap();
        assert_eq!(count_markers(footer), 0);
    }

    #[test]
    fn no_match_means_no_markers_and_no_scroll_target() {
        let mut doc = page("<p>Regalar algo bonito</p>");
        let outcome = run_search(&mut doc, "xyz-no-match");
        assert_eq!(outcome.markers, 0);
        assert_eq!(outcome.first_marker, None);
        assert_eq!(count_markers(&doc.root), 0);
    }

    #[test]
    fn empty_and_whitespace_queries_only_clear() {
        let mut doc = page("<p>Tesela 40</p>");
        assert_eq!(run_search(&mut doc, "Tesela").markers, 1);
        assert_eq!(run_search(&mut doc, "   ").markers, 0);
        assert_eq!(count_markers(&doc.root), 0);
        assert_eq!(run_search(&mut doc, "").markers, 0);
        assert_eq!(count_markers(&doc.root), 0);
    }

    #[test]
    fn new_search_replaces_previous_markers() {
        let mut doc = page("<p>Tesela 40 hace arte. El arte cuenta.</p>");
        run_search(&mut doc, "Tesela");
        let outcome = run_search(&mut doc, "arte");

        assert_eq!(outcome.markers, 2);
        assert_eq!(count_markers(&doc.root), 2);
        let main = doc.find_element("main").unwrap();
        let marks = collect_marker_texts(main);
        assert!(marks.iter().all(|t| t.eq_ignore_ascii_case("arte")));
    }

    fn collect_marker_texts(el: &Element) -> Vec<String> {
        let mut out = Vec::new();
        if is_marker(el) {
            out.push(el.text_content());
        }
        for child in &el.children {
            if let Node::Element(inner) = child {
                out.extend(collect_marker_texts(inner));
            }
        }
        out
    }

    #[test]
    fn clear_is_idempotent_and_round_trips() {
        let mut doc = page("<p>artesanía, Artesanía y ARTESANÍA</p>");
        let before = doc.text_content();

        run_search(&mut doc, "artesanía");
        assert_eq!(count_markers(&doc.root), 3);

        clear_highlights(&mut doc.root);
        assert_eq!(count_markers(&doc.root), 0);
        assert_eq!(doc.text_content(), before);
        // The split runs are merged back into one.
        let p = doc.find_element("p").unwrap();
        assert_eq!(p.children.len(), 1);

        let snapshot = doc.clone();
        clear_highlights(&mut doc.root);
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn metacharacter_queries_highlight_only_the_literal() {
        let mut doc = page("<p>El patrón .* no es mágico aquí</p>");
        let outcome = run_search(&mut doc, ".*");
        assert_eq!(outcome.markers, 1);
        let main = doc.find_element("main").unwrap();
        assert_eq!(collect_marker_texts(main), vec![".*".to_string()]);
    }

    #[test]
    fn falls_back_to_body_without_main() {
        let mut doc =
            Document::parse("<html><body><p>Tesela sin main</p></body></html>");
        let outcome = run_search(&mut doc, "tesela");
        assert_eq!(outcome.markers, 1);
    }

    #[test]
    fn first_marker_is_first_in_document_order() {
        let mut doc = page("<h1>Tesela 40</h1><p>Más Tesela</p>");
        run_search(&mut doc, "tesela");
        let h1 = doc.find_element("h1").unwrap();
        let first = find_element(h1, MARK_TAG).unwrap();
        assert_eq!(first.attr("id"), Some(FIRST_MARK_ID));
        let p = doc.find_element("p").unwrap();
        let second = find_element(p, MARK_TAG).unwrap();
        assert_eq!(second.attr("id"), None);
    }
}
