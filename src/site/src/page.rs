/* src/site/src/page.rs */

use serde::{Deserialize, Serialize};

/// The five layout regions a page arranges widgets into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
  Top,
  Left,
  Center,
  Right,
  Bottom,
}

impl Slot {
  pub const ALL: [Self; 5] = [Self::Top, Self::Left, Self::Center, Self::Right, Self::Bottom];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Top => "top",
      Self::Left => "left",
      Self::Center => "center",
      Self::Right => "right",
      Self::Bottom => "bottom",
    }
  }
}

/// A page as declared: presentation scalars plus widget names per slot.
/// Loaded from a JSON descriptor or built in code; both compose the same.
///
/// Every field is optional in JSON. Empty scalars mean "inherit from the
/// base chain"; slots always append to whatever the chain collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageDef {
  pub title: String,
  pub body_id: String,
  /// Name of the wireframe that renders the composed page.
  pub wireframe: String,
  /// Name of the parent page whose composition this page extends.
  pub base: String,
  pub top: Vec<String>,
  pub left: Vec<String>,
  pub center: Vec<String>,
  pub right: Vec<String>,
  pub bottom: Vec<String>,
}

impl PageDef {
  pub fn slot(&self, slot: Slot) -> &[String] {
    match slot {
      Slot::Top => &self.top,
      Slot::Left => &self.left,
      Slot::Center => &self.center,
      Slot::Right => &self.right,
      Slot::Bottom => &self.bottom,
    }
  }
}

/// A page flattened through its inheritance chain. Slots hold rendered
/// widget HTML in ancestor-first order. Serializes with camelCase keys so
/// wireframe templates can resolve `title`, `bodyId` and the slot names.
/// Built per request, handed to a wireframe, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPage {
  pub title: String,
  pub body_id: String,
  pub wireframe: String,
  pub top: Vec<String>,
  pub left: Vec<String>,
  pub center: Vec<String>,
  pub right: Vec<String>,
  pub bottom: Vec<String>,
}

impl ComposedPage {
  pub fn slot(&self, slot: Slot) -> &[String] {
    match slot {
      Slot::Top => &self.top,
      Slot::Left => &self.left,
      Slot::Center => &self.center,
      Slot::Right => &self.right,
      Slot::Bottom => &self.bottom,
    }
  }

  pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut Vec<String> {
    match slot {
      Slot::Top => &mut self.top,
      Slot::Left => &mut self.left,
      Slot::Center => &mut self.center,
      Slot::Right => &mut self.right,
      Slot::Bottom => &mut self.bottom,
    }
  }
}
