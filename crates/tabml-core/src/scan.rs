/// Iterates `(byte_index, char)` pairs that sit outside a parenthesized group.
///
/// Parentheses do not nest: `(` opens a group and the next `)` closes it. The
/// parentheses themselves are yielded, since they delimit the group.
pub(crate) fn outside_parens(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut in_parens = false;
    text.char_indices().filter(move |&(_, ch)| match ch {
        '(' if !in_parens => {
            in_parens = true;
            true
        }
        ')' if in_parens => {
            in_parens = false;
            true
        }
        _ => !in_parens,
    })
}

/// Byte index of the first character outside parentheses matching `pred`.
pub(crate) fn find_outside_parens(text: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    outside_parens(text)
        .find(|&(_, ch)| pred(ch))
        .map(|(idx, _)| idx)
}
