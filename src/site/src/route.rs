/* src/site/src/route.rs */

use std::path::PathBuf;

use regex::Regex;

use crate::errors::SiteError;

/// What a matched route resolves to.
#[derive(Debug)]
pub enum RouteTarget {
  /// Compose the named page and render it through its wireframe.
  Action(String),
  /// Serve one local file.
  File(PathBuf),
  /// Serve files under a local folder; the matched prefix is stripped
  /// from the request path before the filesystem lookup.
  MediaDir { prefix: String, root: PathBuf },
}

/// One entry in the route table. Routes match in registration order and
/// the first pattern that matches the request path wins, so put specific
/// routes before catch-alls.
#[derive(Debug)]
pub struct Route {
  name: String,
  pattern: Regex,
  target: RouteTarget,
}

impl Route {
  /// Route a regex pattern to a page action. Named capture groups become
  /// request parameters and override query values of the same name.
  pub fn action(
    name: impl Into<String>,
    pattern: &str,
    action: impl Into<String>,
  ) -> Result<Self, SiteError> {
    Self::compile(name.into(), pattern, RouteTarget::Action(action.into()))
  }

  /// Route one exact path to a page action.
  pub fn exact(
    name: impl Into<String>,
    path: &str,
    action: impl Into<String>,
  ) -> Result<Self, SiteError> {
    let pattern = format!("^{}$", regex::escape(path));
    Self::compile(name.into(), &pattern, RouteTarget::Action(action.into()))
  }

  /// Route one exact path to a local file.
  pub fn file(
    name: impl Into<String>,
    path: &str,
    file: impl Into<PathBuf>,
  ) -> Result<Self, SiteError> {
    let pattern = format!("^{}$", regex::escape(path));
    Self::compile(name.into(), &pattern, RouteTarget::File(file.into()))
  }

  /// Route every path starting with `prefix` to files inside `root`.
  pub fn media_dir(
    name: impl Into<String>,
    prefix: &str,
    root: impl Into<PathBuf>,
  ) -> Result<Self, SiteError> {
    let pattern = format!("^{}", regex::escape(prefix));
    let target = RouteTarget::MediaDir { prefix: prefix.to_string(), root: root.into() };
    Self::compile(name.into(), &pattern, target)
  }

  fn compile(name: String, pattern: &str, target: RouteTarget) -> Result<Self, SiteError> {
    match Regex::new(pattern) {
      Ok(pattern) => Ok(Self { name, pattern, target }),
      Err(err) => Err(SiteError::bad_pattern(format!("route {name}: {err}"))),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn target(&self) -> &RouteTarget {
    &self.target
  }

  /// Named captures for a matching path, or `None` when the pattern
  /// misses. Unnamed groups and groups that did not participate in the
  /// match are skipped.
  pub fn capture(&self, path: &str) -> Option<Vec<(String, String)>> {
    let caps = self.pattern.captures(path)?;
    let mut values = Vec::new();
    for name in self.pattern.capture_names().flatten() {
      if let Some(m) = caps.name(name) {
        values.push((name.to_string(), m.as_str().to_string()));
      }
    }
    Some(values)
  }
}

/// A winning route-table entry with its extracted captures.
pub struct RouteMatch<'a> {
  pub route: &'a Route,
  pub captures: Vec<(String, String)>,
}
