use crate::ast::{AttrList, Line, LineTag};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlEmitOptions {
    /// Written once per nesting level at the start of each output line.
    pub indent: String,
}

impl Default for HtmlEmitOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// Emits HTML for a parsed line sequence with tab indentation.
pub fn emit_html(lines: &[Line]) -> String {
    emit_html_with_options(lines, &HtmlEmitOptions::default())
}

/// Emits HTML for a parsed line sequence.
///
/// Lines are walked in order against a stack of open scopes: a line closes
/// every open scope at its own level or deeper before opening its own. An
/// element whose line is followed by no children is closed on that same line.
pub fn emit_html_with_options(lines: &[Line], options: &HtmlEmitOptions) -> String {
    let mut writer = HtmlWriter::new(&options.indent);
    let mut stack: Vec<OpenScope> = Vec::new();

    for line in lines {
        while stack.last().is_some_and(|top| top.level >= line.level) {
            if let Some(scope) = stack.pop() {
                writer.close(&scope);
            }
        }
        if let Some(parent) = stack.last_mut() {
            if parent.inline {
                writer.end_line();
                parent.inline = false;
            }
        }
        stack.push(writer.open(line));
    }
    while let Some(scope) = stack.pop() {
        writer.close(&scope);
    }

    log::debug!("emitted {} scopes", lines.len());
    writer.finish()
}

/// An element or text line whose scope is still open.
#[derive(Clone, Debug)]
struct OpenScope {
    tag: Option<String>,
    level: usize,
    /// The opening line has not been terminated yet.
    inline: bool,
}

struct HtmlWriter<'a> {
    out: String,
    indent: &'a str,
}

impl<'a> HtmlWriter<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    fn pad(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(self.indent);
        }
    }

    fn end_line(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, line: &Line) -> OpenScope {
        self.pad(line.level);
        match &line.tag {
            LineTag::Text => {
                self.out.push_str(&line.content);
                self.end_line();
                OpenScope {
                    tag: None,
                    level: line.level,
                    inline: false,
                }
            }
            LineTag::Element(name) => {
                self.out.push('<');
                self.out.push_str(name);
                self.out.push_str(&render_attrs(&line.attrs));
                self.out.push('>');
                self.out.push_str(&line.body);
                OpenScope {
                    tag: Some(name.clone()),
                    level: line.level,
                    inline: true,
                }
            }
        }
    }

    fn close(&mut self, scope: &OpenScope) {
        let Some(tag) = scope.tag.as_deref() else {
            return;
        };
        if !scope.inline {
            self.pad(scope.level);
        }
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self.end_line();
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Attributes in stored order; values are written as-is between double quotes.
fn render_attrs(attrs: &AttrList) -> String {
    attrs
        .iter()
        .map(|item| format!(" {}=\"{}\"", item.key, item.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{HtmlEmitOptions, emit_html, emit_html_with_options};
    use crate::parser::parse;

    fn compile(canonical: &str) -> String {
        emit_html(&parse(canonical).lines)
    }

    #[test]
    fn leaf_elements_close_inline() {
        assert_eq!(
            compile("div.container\n\tp#greeting Hello world"),
            "<div class=\"container\">\n\t<p id=\"greeting\">Hello world</p>\n</div>\n"
        );
    }

    #[test]
    fn siblings_and_dedent_close_scopes() {
        let html = compile("ul\n\tli\n\t\ta(href:/) Home\n\tli About\np Footer");
        let expected = "<ul>\n\
\t<li>\n\
\t\t<a href=\"/\">Home</a>\n\
\t</li>\n\
\t<li>About</li>\n\
</ul>\n\
<p>Footer</p>\n";
        assert_eq!(html, expected);
    }

    #[test]
    fn text_lines_are_verbatim() {
        assert_eq!(
            compile("p\n\tHello there\n\tem again"),
            "<p>\n\tHello there\n\t<em>again</em>\n</p>\n"
        );
    }

    #[test]
    fn text_scopes_close_silently() {
        assert_eq!(
            compile("Heading text\n\tp nested"),
            "Heading text\n\t<p>nested</p>\n"
        );
    }

    #[test]
    fn body_and_children_together() {
        assert_eq!(
            compile("p Intro\n\tb bold"),
            "<p>Intro\n\t<b>bold</b>\n</p>\n"
        );
    }

    #[test]
    fn depth_jumps_open_no_ancestors() {
        assert_eq!(compile("div\n\t\t\tspan x"), "<div>\n\t\t\t<span>x</span>\n</div>\n");
    }

    #[test]
    fn custom_indent_unit() {
        let options = HtmlEmitOptions {
            indent: "  ".to_string(),
        };
        let html = emit_html_with_options(&parse("ul: li Hello").lines, &options);
        assert_eq!(html, "<ul>\n  <li>Hello</li>\n</ul>\n");
    }

    #[test]
    fn nothing_to_emit() {
        assert_eq!(compile(""), "");
    }
}
