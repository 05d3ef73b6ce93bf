mod ast;
mod cache;
mod confidence;
mod decor;
mod emit;
mod inline;
mod render;
mod scanner;

pub use ast::{Block, Confidence, ConfidenceRank, Document};
pub use cache::{RULES_VERSION, render_cached};
pub use emit::{comment_html, comment_html_sanitized, emit_html, emit_html_sanitized};
pub use render::{render, render_bounded};
