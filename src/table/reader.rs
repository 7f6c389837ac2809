// src/table/reader.rs

use scraper::{Html, Node};
use tracing::{debug, instrument, trace, warn};

use super::Row;

/// Event-driven cell collector.
///
/// Fed open tags, close tags and text in document order. Only the first text
/// run after a `<td>` opened inside a `<tbody>` is kept.
#[derive(Debug, Default)]
pub struct TableReader {
    in_tbody: bool,
    expect_value: bool,
    fields: Vec<String>,
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_tag(&mut self, name: &str) {
        match name {
            "td" if self.in_tbody => self.expect_value = true,
            "tbody" => self.in_tbody = true,
            _ => {}
        }
    }

    pub fn end_tag(&mut self, name: &str) {
        if name == "tbody" {
            self.in_tbody = false;
        }
    }

    pub fn text(&mut self, data: &str) {
        if self.expect_value && self.in_tbody {
            self.expect_value = false;
            let field = strip_apostrophes(data);
            trace!(field = %field, "cell");
            self.fields.push(field.to_owned());
        }
    }

    /// Fields collected so far, in document order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Pair up the collected fields. A trailing unpaired field is dropped.
    pub fn into_rows(self) -> Vec<Row> {
        if self.fields.len() % 2 != 0 {
            warn!(
                fields = self.fields.len(),
                dropped = self.fields.last().map(String::as_str).unwrap_or_default(),
                "odd number of table cells, dropping the last one"
            );
        }
        let mut it = self.fields.into_iter();
        let mut rows = Vec::new();
        while let (Some(code), Some(description)) = (it.next(), it.next()) {
            rows.push(Row { code, description });
        }
        rows
    }

    /// Walk a parsed document depth-first, feeding every element and text node.
    pub fn feed(&mut self, document: &Html) {
        enum Step<N> {
            Visit(N),
            Close(String),
        }

        let mut stack = vec![Step::Visit(document.tree.root())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Close(name) => self.end_tag(&name),
                Step::Visit(node) => {
                    match node.value() {
                        Node::Element(el) => {
                            self.start_tag(el.name());
                            stack.push(Step::Close(el.name().to_owned()));
                        }
                        Node::Text(text) => self.text(text),
                        _ => {}
                    }
                    stack.extend(node.children().rev().map(Step::Visit));
                }
            }
        }
    }
}

fn strip_apostrophes(s: &str) -> &str {
    let s = s.strip_prefix('\'').unwrap_or(s);
    s.strip_suffix('\'').unwrap_or(s)
}

/// Parse `html` and return the `(code, description)` rows of its table bodies.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn read_table(html: &str) -> Vec<Row> {
    let document = Html::parse_document(html);
    let mut reader = TableReader::new();
    reader.feed(&document);
    debug!(fields = reader.fields().len(), "collected table cells");
    reader.into_rows()
}
