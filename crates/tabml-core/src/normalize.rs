//! Canonicalization of raw template text.
//!
//! Canonical text has no blank lines and expresses indentation with one tab
//! per level. Space-indented documents are rewritten using the width of the
//! first space-indented line as the unit.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndentStyle {
    Tabs,
    Spaces,
}

pub fn normalize(text: &str) -> String {
    let lines = content_lines(text);

    let style = detect_indent_style(&lines);
    if style == IndentStyle::Tabs {
        log::debug!("normalize: tab indentation, {} lines", lines.len());
        return lines.join("\n");
    }

    let width = infer_indent_width(&lines);
    log::debug!(
        "normalize: space indentation of width {}, {} lines",
        width,
        lines.len()
    );
    if width == 0 {
        return lines.join("\n");
    }

    let mut out = String::with_capacity(text.len());
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let spaces = leading_run(line, ' ');
        for _ in 0..spaces / width {
            out.push('\t');
        }
        out.push_str(&line[spaces..]);
    }
    out
}

/// Lines of `text` that carry content, without their line breaks.
///
/// Lines end at `\n`; carriage returns before it belong to the break, so none
/// survive to form a new `\r\n` pair once the lines are rejoined.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// The first line starting with a space or a tab decides; tabs otherwise.
pub fn detect_indent_style(lines: &[&str]) -> IndentStyle {
    for line in lines {
        if line.starts_with(' ') {
            return IndentStyle::Spaces;
        }
        if line.starts_with('\t') {
            return IndentStyle::Tabs;
        }
    }
    IndentStyle::Tabs
}

/// Leading-space count of the first space-indented line, or 0 if none.
pub fn infer_indent_width(lines: &[&str]) -> usize {
    lines
        .iter()
        .find(|line| line.starts_with(' '))
        .map(|line| leading_run(line, ' '))
        .unwrap_or(0)
}

pub(crate) fn leading_run(text: &str, ch: char) -> usize {
    // Both indent characters are single-byte, so the count is also a byte offset.
    text.chars().take_while(|&c| c == ch).count()
}
