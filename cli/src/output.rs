//! Debug rendering of the token stream and the syntax tree.
//!
//! The core exposes both read-only; all formatting lives here.

use runlet_lang::lexer::Token;
use runlet_lang::parser::ast::Node;
use std::fmt::Write;

/// One line per token: kind, raw text, and span.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        writeln!(
            out,
            "Token({:?}, {:?}, {}:{}-{}:{})",
            token.kind,
            token.text,
            token.span.start.line,
            token.span.start.column,
            token.span.end.line,
            token.span.end.column
        )
        .ok();
    }
    out
}

/// The node tree, one node per line, indented two spaces per level.
pub fn format_ast(root: &Node) -> String {
    let mut out = String::new();
    render_node(root, 0, &mut out);
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match &node.value {
        Some(value) => writeln!(out, "{}{:?} '{}'", indent, node.kind, value).ok(),
        None => writeln!(out, "{}{:?}", indent, node.kind).ok(),
    };
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
