/* src/template/src/token.rs */

use crate::parser::{DiagnosticKind, ParseDiagnostic};

#[derive(Debug)]
pub(crate) enum Token {
  Text(String),
  Marker(String), // directive body (between <!--quilt: and -->)
}

pub(crate) const MARKER_OPEN: &str = "<!--quilt:";
pub(crate) const MARKER_CLOSE: &str = "-->";

#[cfg(test)]
fn tokenize(template: &str) -> Vec<Token> {
  let mut diagnostics = Vec::new();
  tokenize_with_diagnostics(template, &mut diagnostics)
}

pub(crate) fn tokenize_with_diagnostics(
  template: &str,
  diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut pos = 0;

  while pos < template.len() {
    if let Some(rel) = template[pos..].find(MARKER_OPEN) {
      let marker_start = pos + rel;
      if marker_start > pos {
        tokens.push(Token::Text(template[pos..marker_start].to_string()));
      }
      let after_open = marker_start + MARKER_OPEN.len();
      if let Some(close_rel) = template[after_open..].find(MARKER_CLOSE) {
        let directive = template[after_open..after_open + close_rel].to_string();
        tokens.push(Token::Marker(directive));
        pos = after_open + close_rel + MARKER_CLOSE.len();
      } else {
        // Unclosed marker -- keep the rest as text, but report it
        let snippet = template[after_open..].lines().next().unwrap_or("").to_string();
        diagnostics.push(ParseDiagnostic {
          kind: DiagnosticKind::UnclosedMarker,
          directive: snippet,
        });
        tokens.push(Token::Text(template[marker_start..].to_string()));
        break;
      }
    } else {
      tokens.push(Token::Text(template[pos..].to_string()));
      break;
    }
  }

  tokens
}
