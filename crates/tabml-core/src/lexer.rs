use crate::ast::Line;
use crate::normalize::leading_run;
use crate::scan::find_outside_parens;

/// Splits canonical text into depth-annotated lines.
///
/// The level is the number of leading tabs. Lines with no content are
/// skipped; they carry no nesting information.
pub fn tokenize(canonical: &str) -> Vec<Line> {
    canonical
        .lines()
        .filter_map(|text| {
            let level = leading_run(text, '\t');
            let content = text[level..].trim();
            if content.is_empty() {
                None
            } else {
                Some(Line::new(level, content))
            }
        })
        .collect()
}

/// Splits `tag: rest` lines into a parent line and a child line one level deeper.
///
/// Only the first colon outside parentheses is considered, and only when
/// something other than whitespace follows it. The child is not expanded again.
pub fn expand_inline_blocks(lines: Vec<Line>) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len());
    for mut line in lines {
        let split = find_outside_parens(&line.content, |ch| ch == ':')
            .map(|colon| colon + 1)
            .filter(|&end| !line.content[end..].trim().is_empty());
        match split {
            Some(end) => {
                let rest = line.content[end..].trim().to_string();
                line.content.truncate(end);
                log::trace!("inline block `{}` -> child `{}`", line.content, rest);
                let child = Line::new(line.level + 1, rest);
                out.push(line);
                out.push(child);
            }
            None => out.push(line),
        }
    }
    out
}
