use crate::ast::{Block, Confidence, Document};
use crate::inline::escape_html;
use crate::render::render;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Emits raw, un-sanitized HTML for a rendered comment document: the
/// confidence badge first (when present), then the blocks in order, with
/// consecutive list items of the same kind grouped into one container.
pub fn emit_html(document: &Document) -> String {
    // Deterministic formatting: 2-space indentation and LF newlines.
    let mut writer = HtmlWriter::new();
    if let Some(confidence) = &document.confidence {
        emit_confidence(&mut writer, confidence);
    }
    emit_blocks(&mut writer, &document.blocks);
    writer.finish()
}

/// Emits HTML for a document and sanitizes it against an allow-list
/// restricted to the constructs this emitter produces.
pub fn emit_html_sanitized(document: &Document) -> String {
    let raw_html = emit_html(document);

    let tags: HashSet<&'static str> = ["div", "li", "ol", "p", "pre", "span", "strong", "ul"]
        .iter()
        .copied()
        .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");

    let mut tag_attributes = HashMap::new();
    // Ordered items keep their original numeral.
    tag_attributes.insert("li", ["value"].iter().copied().collect());

    let mut generic_attribute_prefixes = HashSet::new();
    generic_attribute_prefixes.insert("data-");

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .generic_attribute_prefixes(generic_attribute_prefixes)
        .clean(&raw_html)
        .to_string()
}

/// Renders one comment body to HTML. Only comments flagged as authored by
/// the automated assistant go through the normalization pipeline; everything
/// else is reproduced verbatim, original line breaks intact.
pub fn comment_html(raw: &str, is_ai: bool) -> String {
    if !is_ai {
        return verbatim_html(raw);
    }
    emit_html(&render(raw))
}

/// Sanitized variant of [`comment_html`].
pub fn comment_html_sanitized(raw: &str, is_ai: bool) -> String {
    if !is_ai {
        return verbatim_html(raw);
    }
    emit_html_sanitized(&render(raw))
}

fn verbatim_html(raw: &str) -> String {
    format!(
        "<pre class=\"Annotext-verbatim\">{}</pre>",
        escape_html(raw)
    )
}

struct HtmlWriter {
    out: String,
    indent: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

fn emit_confidence(writer: &mut HtmlWriter, confidence: &Confidence) {
    writer.line(&format!(
        "<div class=\"Annotext-confidence\" data-annotext=\"confidence\" data-level=\"{}\">",
        confidence.rank().as_str()
    ));
    writer.indent += 1;
    writer.line(&format!(
        "<span class=\"Annotext-confidence-level\">{}</span>",
        escape_html(&confidence.level)
    ));
    if let Some(percentage) = &confidence.percentage {
        writer.line(&format!(
            "<span class=\"Annotext-confidence-percentage\">{}%</span>",
            escape_html(percentage)
        ));
    }
    writer.indent -= 1;
    writer.line("</div>");
}

fn emit_blocks(writer: &mut HtmlWriter, blocks: &[Block]) {
    let mut i = 0;
    while i < blocks.len() {
        match &blocks[i] {
            Block::Paragraph { html } => {
                writer.line(&format!("<p>{}</p>", html));
                i += 1;
            }
            Block::ListItem { ordered, .. } => {
                let kind = *ordered;
                let tag = if kind { "ol" } else { "ul" };
                writer.line(&format!("<{} class=\"Annotext-list\">", tag));
                writer.indent += 1;
                while i < blocks.len() {
                    let Block::ListItem {
                        html,
                        ordered,
                        index,
                    } = &blocks[i]
                    else {
                        break;
                    };
                    if *ordered != kind {
                        break;
                    }
                    match index {
                        Some(value) => {
                            writer.line(&format!("<li value=\"{}\">{}</li>", value, html));
                        }
                        None => writer.line(&format!("<li>{}</li>", html)),
                    }
                    i += 1;
                }
                writer.indent -= 1;
                writer.line(&format!("</{}>", tag));
            }
        }
    }
}
