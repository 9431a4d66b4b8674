//! Plain-text rendering of catalog descriptions.
//!
//! Descriptions are HTML fragments (`<p>`, `<br/>`, `<a>`, lists). The
//! console shows their text; block elements become line breaks.

use scraper::{ElementRef, Html, Node};

/// Elements that end a line of text
const BLOCK_TAGS: [&str; 8] = ["p", "div", "br", "li", "ul", "ol", "tr", "h3"];

/// Elements whose entire subtree is dropped
const SKIP_TAGS: [&str; 2] = ["script", "style"];

/// Extract readable text from an HTML fragment
pub fn html_to_text(html: &str) -> String {
    if !html.contains('<') {
        return clean_whitespace(html);
    }

    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();
    collect_text(fragment.root_element(), &mut raw);
    clean_whitespace(&raw)
}

fn collect_text(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if BLOCK_TAGS.contains(&tag) {
        out.push('\n');
    }
}

/// Collapse runs of spaces; keep at most one blank line
fn clean_whitespace(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    let mut result = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in lines {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        result.push_str(&line);
        result.push('\n');
    }

    result.trim().to_string()
}
