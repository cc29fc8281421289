/* src/site/src/errors.rs */

use std::fmt;

#[derive(Debug)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "NOT_FOUND" => 404,
    "NO_WIREFRAME" => 500,
    "CYCLIC_BASE" => 500,
    "BAD_PATTERN" => 500,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// Unknown page or no matching route.
  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  /// A composed page names a wireframe that is not registered.
  pub fn no_wireframe(msg: impl Into<String>) -> Self {
    Self::with_code("NO_WIREFRAME", msg)
  }

  /// A page inheritance chain revisits a page.
  pub fn cyclic_base(msg: impl Into<String>) -> Self {
    Self::with_code("CYCLIC_BASE", msg)
  }

  /// A route pattern failed to compile.
  pub fn bad_pattern(msg: impl Into<String>) -> Self {
    Self::with_code("BAD_PATTERN", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}
