use crate::ast::{AttrList, Line, LineTag};
use crate::diagnostic::{Diagnostic, W_ATTR_UNCLOSED, W_ATTR_UNRESOLVED, W_DEPTH_JUMP};
use crate::elements::is_element_name;
use crate::error::CompileError;
use crate::lexer::{expand_inline_blocks, tokenize};
use crate::scan::{find_outside_parens, outside_parens};

/// Tag used when a selector omits the element name (`#main`, `.note`).
const DEFAULT_TAG: &str = "div";

const ID_STOPS: &[char] = &['.', '(', ':'];
const CLASS_STOPS: &[char] = &['.', '(', ':', '#'];

pub struct ParseResult {
    pub lines: Vec<Line>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenizes canonical text, expands inline blocks and parses every line.
pub fn parse(canonical: &str) -> ParseResult {
    let lines = expand_inline_blocks(tokenize(canonical));
    let mut diagnostics = Vec::new();
    let mut parsed = Vec::with_capacity(lines.len());
    let mut previous = None;

    for mut line in lines {
        if let Some(from) = depth_jump(previous, line.level) {
            diagnostics.push(Diagnostic::warning(
                W_DEPTH_JUMP,
                format!(
                    "indentation jumps from level {} to level {} at `{}`",
                    from, line.level, line.content
                ),
            ));
        }
        previous = Some(line.level);
        parse_line(&mut line, &mut diagnostics);
        parsed.push(line);
    }

    ParseResult {
        lines: parsed,
        diagnostics,
    }
}

/// Rejects the first line that is more than one level deeper than its predecessor.
pub fn check_depth(lines: &[Line]) -> Result<(), CompileError> {
    let mut previous = None;
    for line in lines {
        if let Some(from) = depth_jump(previous, line.level) {
            return Err(CompileError::DepthJump {
                from,
                to: line.level,
                content: line.content.clone(),
            });
        }
        previous = Some(line.level);
    }
    Ok(())
}

/// Returns the level jumped from when `level` skips at least one level.
fn depth_jump(previous: Option<usize>, level: usize) -> Option<usize> {
    let from = previous.unwrap_or(0);
    let allowed = previous.map_or(0, |prev| prev + 1);
    (level > allowed).then_some(from)
}

/// Fills in the tag, attributes and body of a tokenized line.
///
/// The selector head runs up to the first whitespace outside parentheses;
/// whatever follows is the body. A head without `#`, `.`, `(` or `:` is only
/// a tag when it names an element, otherwise the line is text.
pub fn parse_line(line: &mut Line, diagnostics: &mut Vec<Diagnostic>) {
    let content = line.content.as_str();
    let head_end = find_outside_parens(content, char::is_whitespace).unwrap_or(content.len());
    let head = &content[..head_end];

    let tag = match find_outside_parens(head, |ch| matches!(ch, '#' | '.' | '(' | ':')) {
        Some(0) => DEFAULT_TAG,
        Some(end) => &head[..end],
        None if is_element_name(head) => head,
        None => {
            line.tag = LineTag::Text;
            line.attrs = AttrList::default();
            line.body.clear();
            return;
        }
    };

    let mut attrs = AttrList::default();
    if let Some(id) = parse_id(head) {
        attrs.insert("id", id);
    }
    let classes = parse_classes(head);
    if !classes.is_empty() {
        attrs.insert("class", classes.join(" "));
    }
    parse_named_attrs(head, content, &mut attrs, diagnostics);

    let tag = LineTag::Element(tag.to_string());
    let body = content[head_end..].trim().to_string();
    line.tag = tag;
    line.attrs = attrs;
    line.body = body;
}

fn parse_id(head: &str) -> Option<&str> {
    let hash = find_outside_parens(head, |ch| ch == '#')?;
    let id = segment(head, hash + 1, ID_STOPS);
    (!id.is_empty()).then_some(id)
}

fn parse_classes(head: &str) -> Vec<&str> {
    outside_parens(head)
        .filter(|&(_, ch)| ch == '.')
        .map(|(idx, _)| segment(head, idx + 1, CLASS_STOPS))
        .filter(|class| !class.is_empty())
        .collect()
}

/// Parses the first `(...)` group as whitespace-separated `name:value` pairs.
fn parse_named_attrs(
    head: &str,
    content: &str,
    attrs: &mut AttrList,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(open) = find_outside_parens(head, |ch| ch == '(') else {
        return;
    };
    let inner_start = open + 1;
    let Some(len) = head[inner_start..].find(')') else {
        diagnostics.push(Diagnostic::warning(
            W_ATTR_UNCLOSED,
            format!("attribute list is never closed in `{}`", content),
        ));
        return;
    };

    for token in head[inner_start..inner_start + len].split_whitespace() {
        match token.split_once(':') {
            Some((name, value)) if !name.is_empty() => attrs.insert(name, value),
            _ => diagnostics.push(Diagnostic::warning(
                W_ATTR_UNRESOLVED,
                format!("attribute `{}` has no `name:value` form in `{}`", token, content),
            )),
        }
    }
}

/// Text from `start` up to the next stop character.
fn segment<'a>(text: &'a str, start: usize, stops: &[char]) -> &'a str {
    let rest = &text[start..];
    let end = rest.find(stops).unwrap_or(rest.len());
    &rest[..end]
}
