use crate::ast::{Block, Document};
use crate::decor::strip_decorations;
use crate::inline::{escape_html, render_line, render_spans};
use crate::scanner::{LineTag, classify};

/// Normalizes one raw comment body into a renderable document.
///
/// Total over arbitrary input: noisy, partial, or unterminated markup
/// degrades to plain paragraphs instead of failing, and empty input yields
/// an empty document. The same input always produces a structurally
/// identical document.
pub fn render(raw: &str) -> Document {
    let stripped = strip_decorations(raw);
    let mut confidence = None;
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for line in stripped.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify(line) {
            LineTag::Blank => flush_paragraph(&mut blocks, &mut paragraph),
            // Dropped lines vanish without splitting the surrounding paragraph.
            LineTag::Banner | LineTag::Rule | LineTag::Trailer => {}
            LineTag::Confidence(found) => {
                if confidence.is_none() {
                    confidence = Some(found);
                } else {
                    // Only the first annotation line counts; later matches
                    // stay in the text as ordinary prose.
                    paragraph.push(render_line(line.trim()));
                }
            }
            LineTag::Unordered { content } => {
                flush_paragraph(&mut blocks, &mut paragraph);
                blocks.push(Block::ListItem {
                    html: format!("\u{2022} {}", render_spans(content)),
                    ordered: false,
                    index: None,
                });
            }
            LineTag::Ordered { index, content } => {
                flush_paragraph(&mut blocks, &mut paragraph);
                blocks.push(Block::ListItem {
                    html: render_spans(content),
                    ordered: true,
                    index: Some(index),
                });
            }
            LineTag::Prose { content } => paragraph.push(render_line(content)),
        }
    }
    flush_paragraph(&mut blocks, &mut paragraph);

    Document { confidence, blocks }
}

/// [`render`] behind a caller-chosen input ceiling. Comment bodies are
/// normally tiny; a multi-megabyte blob is returned untransformed as a
/// single escaped paragraph rather than paying the normalization passes.
pub fn render_bounded(raw: &str, max_len: usize) -> Document {
    if raw.len() > max_len {
        return Document {
            confidence: None,
            blocks: vec![Block::Paragraph {
                html: escape_html(raw),
            }],
        };
    }
    render(raw)
}

fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    let html = paragraph.join("\n");
    paragraph.clear();
    let html = html.trim();
    if !html.is_empty() {
        blocks.push(Block::Paragraph {
            html: html.to_string(),
        });
    }
}
