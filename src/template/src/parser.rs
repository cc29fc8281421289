/* src/template/src/parser.rs */

use crate::ast::{AstNode, SlotMode};
use crate::token::Token;

/// Diagnostic emitted for directives that can never produce output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// Marker open sequence that reached EOF without `-->`
  UnclosedMarker,
  /// Directive with an empty value path (`<!--quilt:-->`)
  EmptyPath,
}

pub(crate) fn parse_with_diagnostics(
  tokens: &[Token],
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<AstNode> {
  let mut nodes = Vec::new();

  for token in tokens {
    match token {
      Token::Text(value) => nodes.push(AstNode::Text(value.clone())),
      Token::Marker(directive) => {
        let (path, mode) = if let Some(stripped) = directive.strip_suffix(":html") {
          (stripped.to_string(), SlotMode::Html)
        } else {
          (directive.clone(), SlotMode::Text)
        };
        if path.is_empty() {
          diagnostics.push(ParseDiagnostic {
            kind: DiagnosticKind::EmptyPath,
            directive: directive.clone(),
          });
        }
        nodes.push(AstNode::Slot { path, mode });
      }
    }
  }

  nodes
}
