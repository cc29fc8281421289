/* src/template/src/ast.rs */

#[derive(Debug)]
pub(crate) enum AstNode {
  Text(String),
  Slot { path: String, mode: SlotMode },
}

#[derive(Debug)]
pub(crate) enum SlotMode {
  Text,
  Html,
}
