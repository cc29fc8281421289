/* src/template/src/helpers.rs */

use serde_json::Value;

pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = current.get(key)?;
  }
  Some(current)
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  // -- resolve --

  #[test]
  fn resolve_simple_key() {
    let data = json!({"title": "Home"});
    assert_eq!(resolve("title", &data), Some(&json!("Home")));
  }

  #[test]
  fn resolve_nested_path() {
    let data = json!({"a": {"b": {"c": 42}}});
    assert_eq!(resolve("a.b.c", &data), Some(&json!(42)));
  }

  #[test]
  fn resolve_missing_key() {
    assert_eq!(resolve("missing", &json!({})), None);
  }

  #[test]
  fn resolve_partial_path() {
    let data = json!({"a": 1});
    assert_eq!(resolve("a.b", &data), None);
  }

  #[test]
  fn resolve_null_intermediate() {
    let data = json!({"a": null});
    assert_eq!(resolve("a.b", &data), None);
  }

  // -- stringify --

  #[test]
  fn stringify_null() {
    assert_eq!(stringify(&json!(null)), "");
  }

  #[test]
  fn stringify_number() {
    assert_eq!(stringify(&json!(42)), "42");
  }

  #[test]
  fn stringify_string() {
    assert_eq!(stringify(&json!("hello")), "hello");
  }

  #[test]
  fn stringify_bool() {
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&json!(false)), "false");
  }

  // -- escape_html --

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
  }

  #[test]
  fn escape_html_safe_string() {
    assert_eq!(escape_html("hello world"), "hello world");
  }

  #[test]
  fn escape_html_empty() {
    assert_eq!(escape_html(""), "");
  }
}
