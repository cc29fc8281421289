/* src/site/src/params.rs */

use std::collections::HashMap;

use pct_str::PctStr;
use serde_json::Value;

/// Parameters for one request: query-string values overlaid with named
/// route captures. Built fresh per request and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
  values: HashMap<String, String>,
}

impl RequestParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse a raw query string. The first value wins for repeated keys,
  /// `+` decodes to a space, and values with broken percent escapes are
  /// kept as-is rather than dropped.
  pub fn from_query(query: &str) -> Self {
    let mut values = HashMap::new();
    for pair in query.split('&') {
      if pair.is_empty() {
        continue;
      }
      let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
      values.entry(decode_component(key)).or_insert_with(|| decode_component(value));
    }
    Self { values }
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.values.get(key).map(String::as_str)
  }

  /// Insert or overwrite a value. Route captures use this to take
  /// precedence over query parameters of the same name.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.values.insert(key.into(), value.into());
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// View as a JSON object so templates can resolve parameter names.
  pub fn to_value(&self) -> Value {
    let mut map = serde_json::Map::new();
    for (key, value) in &self.values {
      map.insert(key.clone(), Value::String(value.clone()));
    }
    Value::Object(map)
  }
}

fn decode_component(raw: &str) -> String {
  let spaced = raw.replace('+', " ");
  match PctStr::new(spaced.as_str()) {
    Ok(pct) => pct.decode(),
    Err(_) => spaced,
  }
}

type BinderFn<P> = Box<dyn Fn(&mut P, &str) + Send + Sync>;

/// Ordered mapping from request-parameter keys to fields of a params
/// struct `P`. Declared once at registration; applied per request.
pub struct ParamBindings<P> {
  entries: Vec<(String, BinderFn<P>)>,
}

impl<P> ParamBindings<P> {
  pub fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Raw binder: receives the parameter value whenever the key is present.
  pub fn bind(
    mut self,
    key: impl Into<String>,
    f: impl Fn(&mut P, &str) + Send + Sync + 'static,
  ) -> Self {
    self.entries.push((key.into(), Box::new(f)));
    self
  }

  /// Text binder: the parameter value is handed over as-is.
  pub fn text(
    self,
    key: impl Into<String>,
    set: impl Fn(&mut P, &str) + Send + Sync + 'static,
  ) -> Self {
    self.bind(key, set)
  }

  /// Integer binder: parses the value as `i64`; values that fail to parse
  /// are skipped and the field keeps its previous value.
  pub fn int(
    self,
    key: impl Into<String>,
    set: impl Fn(&mut P, i64) + Send + Sync + 'static,
  ) -> Self {
    self.bind(key, move |params, raw| {
      if let Ok(value) = raw.parse::<i64>() {
        set(params, value);
      }
    })
  }

  /// Apply the declared bindings in declaration order. Bindings without a
  /// matching parameter and parameters without a binding are both skipped.
  pub fn assign(&self, target: &mut P, params: &RequestParams) {
    for (key, binder) in &self.entries {
      if let Some(value) = params.get(key) {
        binder(target, value);
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<P> Default for ParamBindings<P> {
  fn default() -> Self {
    Self::new()
  }
}

/// Types that declare how request parameters map onto their fields.
/// Derive with `#[derive(BindParams)]` or implement manually.
pub trait BindParams: Sized {
  fn bindings() -> ParamBindings<Self>;
}
