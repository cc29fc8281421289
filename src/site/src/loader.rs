/* src/site/src/loader.rs */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quilt_template::Template;
use tracing::{debug, warn};

use crate::page::PageDef;
use crate::site::{wireframe_from, Site};
use crate::widget::TemplateWidget;

/// Fill the site registries from a content folder laid out as
/// `wireframes/`, `widgets/` and `actions/` subtrees. Entry names are the
/// containing folder's path relative to its subtree root (files directly
/// under the root key as `.`). Bad entries are logged and degraded; the
/// load itself never fails.
pub(crate) fn load_into(site: &mut Site, dir: &Path) {
  load_wireframes(site, &dir.join("wireframes"));
  load_widgets(site, &dir.join("widgets"));
  load_pages(site, &dir.join("actions"));
}

fn load_wireframes(site: &mut Site, base: &Path) {
  for file in read_dir_tree(base) {
    if !has_extension(&file, "html") {
      continue;
    }
    let name = entry_key(&file);
    if let Some(template) = compile_template(base, &file) {
      debug!(wireframe = name, "loaded wireframe");
      site.wireframes.insert(name, wireframe_from(template));
    }
  }
}

fn load_widgets(site: &mut Site, base: &Path) {
  // Every file materializes its folder's widget; only the .html file
  // contributes the template. A folder holding other files still yields a
  // widget entry, it just renders nothing.
  let mut templates: HashMap<String, Option<Template>> = HashMap::new();
  for file in read_dir_tree(base) {
    let name = entry_key(&file);
    let slot = templates.entry(name).or_default();
    if has_extension(&file, "html") {
      *slot = compile_template(base, &file);
    }
  }

  for (name, template) in templates {
    debug!(widget = name, templated = template.is_some(), "loaded widget");
    let widget = match template {
      Some(template) => TemplateWidget::new(template),
      None => TemplateWidget::empty(),
    };
    site.widgets.insert(name, Box::new(widget));
  }
}

fn load_pages(site: &mut Site, base: &Path) {
  for file in read_dir_tree(base) {
    if !has_extension(&file, "json") {
      continue;
    }
    let name = entry_key(&file);
    let full_path = base.join(&file);
    // A broken descriptor still registers the page, as an empty one, so a
    // route naming it serves a blank composition rather than a 404.
    let page = match fs::read_to_string(&full_path) {
      Ok(content) => match serde_json::from_str::<PageDef>(&content) {
        Ok(page) => page,
        Err(err) => {
          warn!(page = name, error = %err, "malformed page descriptor");
          PageDef::default()
        }
      },
      Err(err) => {
        warn!(page = name, path = %full_path.display(), error = %err, "unreadable page descriptor");
        PageDef::default()
      }
    };
    debug!(page = name, "loaded page");
    site.pages.insert(name, page);
  }
}

/// All file paths under `base`, relative to it, walking folders
/// breadth-first. Unreadable directories are logged and skipped.
fn read_dir_tree(base: &Path) -> Vec<PathBuf> {
  let mut folders = vec![PathBuf::new()];
  let mut files = Vec::new();
  let mut next = 0;

  while next < folders.len() {
    let folder = folders[next].clone();
    next += 1;
    let entries = match fs::read_dir(base.join(&folder)) {
      Ok(entries) => entries,
      Err(err) => {
        warn!(path = %base.join(&folder).display(), error = %err, "skipping unreadable directory");
        continue;
      }
    };
    for entry in entries {
      let entry = match entry {
        Ok(entry) => entry,
        Err(err) => {
          warn!(error = %err, "skipping unreadable directory entry");
          continue;
        }
      };
      let path = folder.join(entry.file_name());
      match entry.file_type() {
        Ok(kind) if kind.is_dir() => folders.push(path),
        Ok(_) => files.push(path),
        Err(err) => warn!(path = %path.display(), error = %err, "skipping unstattable entry"),
      }
    }
  }

  files
}

/// Registry key for a file: its folder path relative to the subtree root,
/// slash-separated. Files directly under the root key as `.`.
fn entry_key(file: &Path) -> String {
  let parent = file.parent().unwrap_or_else(|| Path::new(""));
  if parent.as_os_str().is_empty() {
    return ".".to_string();
  }
  let segments: Vec<String> =
    parent.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
  segments.join("/")
}

fn has_extension(file: &Path, ext: &str) -> bool {
  file.extension().is_some_and(|e| e == ext)
}

fn compile_template(base: &Path, file: &Path) -> Option<Template> {
  let full_path = base.join(file);
  let source = match fs::read_to_string(&full_path) {
    Ok(source) => source,
    Err(err) => {
      warn!(path = %full_path.display(), error = %err, "unreadable template");
      return None;
    }
  };
  let mut diagnostics = Vec::new();
  let template = Template::parse_with_diagnostics(&source, &mut diagnostics);
  for diagnostic in diagnostics {
    warn!(
      path = %full_path.display(),
      directive = diagnostic.directive,
      ?diagnostic.kind,
      "template directive ignored"
    );
  }
  Some(template)
}
