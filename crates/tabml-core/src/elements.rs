use once_cell::sync::Lazy;
use std::collections::HashSet;

/// HTML element names recognised as tags when a line has no selector syntax.
static HTML_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a",
        "abbr",
        "address",
        "article",
        "aside",
        "audio",
        "b",
        "base",
        "blockquote",
        "body",
        "br",
        "button",
        "canvas",
        "caption",
        "cite",
        "code",
        "col",
        "colgroup",
        "dd",
        "del",
        "details",
        "dialog",
        "div",
        "dl",
        "dt",
        "em",
        "fieldset",
        "figcaption",
        "figure",
        "footer",
        "form",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "head",
        "header",
        "hr",
        "html",
        "i",
        "iframe",
        "img",
        "input",
        "ins",
        "kbd",
        "label",
        "legend",
        "li",
        "link",
        "main",
        "mark",
        "menu",
        "meta",
        "nav",
        "noscript",
        "ol",
        "optgroup",
        "option",
        "p",
        "picture",
        "pre",
        "q",
        "s",
        "samp",
        "script",
        "section",
        "select",
        "small",
        "source",
        "span",
        "strong",
        "style",
        "sub",
        "summary",
        "sup",
        "table",
        "tbody",
        "td",
        "template",
        "textarea",
        "tfoot",
        "th",
        "thead",
        "time",
        "title",
        "tr",
        "u",
        "ul",
        "var",
        "video",
    ]
    .into_iter()
    .collect()
});

/// Whether a bare word names an element: a known HTML element or a custom
/// element (`my-widget`).
pub(crate) fn is_element_name(word: &str) -> bool {
    HTML_ELEMENTS.contains(word) || is_custom_element_name(word)
}

fn is_custom_element_name(word: &str) -> bool {
    let starts_lower = word.chars().next().is_some_and(|ch| ch.is_ascii_lowercase());
    starts_lower
        && word.contains('-')
        && word
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
}
