//! Text renderers for [`DocNode`] trees.
//!
//! Both renderers are line based: blocks and list items start on a fresh
//! line, nested lists are indented by two spaces per level.

use std::sync::Arc;

use super::{DocNode, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Markdown,
}

/// Renders `node` as plain text. Code is written verbatim and links by name.
pub fn plain(node: &DocNode) -> String {
    let mut writer = Writer::new(Style::Plain);
    writer.node(node);
    writer.finish()
}

/// Renders `node` as Markdown. Links point at [`Entry::anchor`].
pub fn markdown(node: &DocNode) -> String {
    let mut writer = Writer::new(Style::Markdown);
    writer.node(node);
    writer.finish()
}

/// Renders a complete Markdown page: the root document followed by one
/// section per named entry.
///
/// Entries that have not been filled yet are rendered with an empty body.
pub fn markdown_page(title: &str, root: &DocNode, entries: &[Arc<Entry>]) -> String {
    let mut content = format!("# {title}\n\n");

    content.push_str(&markdown(root));
    content.push('\n');

    for entry in entries {
        content.push_str(&generate_entry_section(entry));
    }

    content
}

fn generate_entry_section(entry: &Entry) -> String {
    let body = entry.content().map(markdown).unwrap_or_default();

    format!(
        "<a id=\"{}\"></a>\n## {}\n\n{}\n",
        entry.anchor(),
        entry.name(),
        body
    )
}

/// Inline code fenced with one more backtick than the longest run inside it.
fn code_span(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or_default();
    let fence = "`".repeat(longest + 1);

    if longest > 0 && (code.starts_with('`') || code.ends_with('`')) {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

fn link_text(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '\\' | '[' | ']' | '`' | '*' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

struct Writer {
    style: Style,
    out: String,
    indent: usize,
    line_start: bool,
    // Only a bullet has been written on the current line.
    after_bullet: bool,
}

impl Writer {
    fn new(style: Style) -> Self {
        Self {
            style,
            out: String::new(),
            indent: 0,
            line_start: true,
            after_bullet: false,
        }
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.out
    }

    fn node(&mut self, node: &DocNode) {
        match node {
            DocNode::Empty => {}
            DocNode::Text(text) => self.write(text),
            DocNode::Code(code) => match self.style {
                Style::Plain => self.write(code),
                Style::Markdown => self.write(&code_span(code)),
            },
            DocNode::Seq(nodes) => nodes.iter().for_each(|node| self.node(node)),
            DocNode::Block(node) => {
                self.break_line();
                self.node(node);
                self.break_line();
            }
            DocNode::List(items) => {
                self.break_line();
                for item in items {
                    self.write("- ");
                    self.after_bullet = true;
                    self.indent += 2;
                    self.node(item);
                    self.after_bullet = false;
                    self.break_line();
                    self.indent -= 2;
                }
            }
            DocNode::Link(entry) => match self.style {
                Style::Plain => self.write(entry.name()),
                Style::Markdown => {
                    self.write(&format!("[{}](#{})", link_text(entry.name()), entry.anchor()));
                }
            },
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.line_start {
            self.out.push_str(&" ".repeat(self.indent));
            self.line_start = false;
        }
        self.out.push_str(text);
        self.after_bullet = false;
    }

    fn break_line(&mut self) {
        if self.line_start || self.after_bullet {
            return;
        }
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
        self.out.push('\n');
        self.line_start = true;
    }
}
