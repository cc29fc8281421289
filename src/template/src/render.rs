/* src/template/src/render.rs */

use serde_json::Value;

use crate::ast::{AstNode, SlotMode};
use crate::helpers::{escape_html, resolve, stringify};

pub(crate) fn render(nodes: &[AstNode], data: &Value) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, mode } => {
        let value = resolve(path, data);
        match mode {
          SlotMode::Html => match value {
            // Arrays of pre-rendered fragments splice in line by line
            Some(Value::Array(items)) => {
              let parts: Vec<String> = items.iter().map(stringify).collect();
              out.push_str(&parts.join("\n"));
            }
            other => out.push_str(&stringify(other.unwrap_or(&Value::Null))),
          },
          SlotMode::Text => {
            out.push_str(&escape_html(&stringify(value.unwrap_or(&Value::Null))));
          }
        }
      }
    }
  }

  out
}
