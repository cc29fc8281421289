/* src/template/src/lib.rs */

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

pub use parser::{DiagnosticKind, ParseDiagnostic};

use ast::AstNode;
use serde_json::Value;

/// A compiled template. Compilation is total: anything that is not a
/// well-formed `<!--quilt:...-->` marker stays literal text, so `parse`
/// never fails. Authoring mistakes are surfaced as [`ParseDiagnostic`]s
/// through [`Template::parse_with_diagnostics`].
///
/// Markers substitute dotted value paths from a `serde_json::Value`:
/// `<!--quilt:title-->` inserts the value HTML-escaped,
/// `<!--quilt:top:html-->` inserts it raw (arrays join with newlines).
#[derive(Debug)]
pub struct Template {
  nodes: Vec<AstNode>,
}

impl Template {
  pub fn parse(source: &str) -> Self {
    let mut diagnostics = Vec::new();
    Self::parse_with_diagnostics(source, &mut diagnostics)
  }

  pub fn parse_with_diagnostics(source: &str, diagnostics: &mut Vec<ParseDiagnostic>) -> Self {
    let tokens = token::tokenize_with_diagnostics(source, diagnostics);
    let nodes = parser::parse_with_diagnostics(&tokens, diagnostics);
    Self { nodes }
  }

  /// Render against `data`. Missing paths produce empty output.
  pub fn render(&self, data: &Value) -> String {
    render::render(&self.nodes, data)
  }
}

#[cfg(test)]
mod tests;
