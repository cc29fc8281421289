/* src/site/src/compose.rs */

use tracing::debug;

use crate::errors::SiteError;
use crate::page::{ComposedPage, PageDef, Slot};
use crate::params::RequestParams;
use crate::site::Site;

/// Flatten a page through its inheritance chain, rendering slot widgets.
pub(crate) fn compose(
  site: &Site,
  page_name: &str,
  params: &RequestParams,
) -> Result<ComposedPage, SiteError> {
  let Some(page) = site.pages.get(page_name) else {
    return Err(SiteError::not_found(format!("no page named {page_name}")));
  };

  let mut composed = ComposedPage::default();
  for link in inheritance_chain(site, page_name, page)? {
    apply_link(site, &mut composed, link, params);
  }

  Ok(composed)
}

/// Root-first chain of page definitions, ending with the page itself.
/// A `base` naming an unknown page ends the chain; a revisited page is a
/// cycle and composition fails.
fn inheritance_chain<'a>(
  site: &'a Site,
  page_name: &'a str,
  page: &'a PageDef,
) -> Result<Vec<&'a PageDef>, SiteError> {
  let mut chain = vec![page];
  let mut seen: Vec<&str> = vec![page_name];
  let mut base = page.base.as_str();

  while !base.is_empty() {
    if seen.contains(&base) {
      return Err(SiteError::cyclic_base(format!(
        "inheritance cycle at {base} while composing {page_name}"
      )));
    }
    let Some(parent) = site.pages.get(base) else {
      debug!(page = page_name, base, "base page not found, chain ends");
      break;
    };
    seen.push(base);
    chain.push(parent);
    base = parent.base.as_str();
  }

  chain.reverse();
  Ok(chain)
}

/// One chain link, root to leaf: non-empty scalars override what earlier
/// links set; slot widgets render and append after earlier links' output.
fn apply_link(site: &Site, composed: &mut ComposedPage, link: &PageDef, params: &RequestParams) {
  if !link.title.is_empty() {
    composed.title = link.title.clone();
  }
  if !link.body_id.is_empty() {
    composed.body_id = link.body_id.clone();
  }
  if !link.wireframe.is_empty() {
    composed.wireframe = link.wireframe.clone();
  }
  for slot in Slot::ALL {
    for widget_name in link.slot(slot) {
      let html = render_widget(site, widget_name, params);
      composed.slot_mut(slot).push(html);
    }
  }
}

/// Missing widgets degrade to a visible placeholder; the page still renders.
pub(crate) fn render_widget(site: &Site, name: &str, params: &RequestParams) -> String {
  match site.widgets.get(name) {
    Some(widget) => widget.render(params),
    None => format!("Missing Widget: {name}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::widget::TemplateWidget;
  use quilt_template::Template;

  fn static_widget(html: &str) -> TemplateWidget {
    TemplateWidget::new(Template::parse(html))
  }

  fn three_level_site() -> Site {
    Site::new()
      .widget("logo", static_widget("<img>"))
      .widget("menu", static_widget("<nav>menu</nav>"))
      .widget("body", static_widget("<p>body</p>"))
      .page(
        "root",
        PageDef {
          title: "Site".to_string(),
          body_id: "generic".to_string(),
          wireframe: "default".to_string(),
          top: vec!["logo".to_string()],
          ..Default::default()
        },
      )
      .page(
        "section",
        PageDef {
          base: "root".to_string(),
          body_id: "section".to_string(),
          top: vec!["menu".to_string()],
          ..Default::default()
        },
      )
      .page(
        "leaf",
        PageDef {
          base: "section".to_string(),
          title: "Leaf".to_string(),
          center: vec!["body".to_string()],
          ..Default::default()
        },
      )
  }

  #[test]
  fn chain_applies_all_links_root_first() {
    let site = three_level_site();
    let composed = site.compose("leaf", &RequestParams::new()).unwrap();
    // Scalars: latest non-empty value along the chain wins
    assert_eq!(composed.title, "Leaf");
    assert_eq!(composed.body_id, "section");
    assert_eq!(composed.wireframe, "default");
    // Slots: ancestor output first, leaf output last
    assert_eq!(composed.top, ["<img>", "<nav>menu</nav>"]);
    assert_eq!(composed.center, ["<p>body</p>"]);
  }

  #[test]
  fn middle_page_composes_without_leaf_additions() {
    let site = three_level_site();
    let composed = site.compose("section", &RequestParams::new()).unwrap();
    assert_eq!(composed.title, "Site");
    assert_eq!(composed.body_id, "section");
    assert_eq!(composed.center, Vec::<String>::new());
  }

  #[test]
  fn empty_scalar_does_not_clear_inherited_value() {
    let site = three_level_site();
    let composed = site.compose("section", &RequestParams::new()).unwrap();
    // section leaves title empty, so root's survives
    assert_eq!(composed.title, "Site");
  }

  #[test]
  fn slots_append_for_every_region() {
    let site = Site::new()
      .widget("a", static_widget("A"))
      .widget("b", static_widget("B"))
      .page(
        "parent",
        PageDef {
          top: vec!["a".to_string()],
          left: vec!["a".to_string()],
          center: vec!["a".to_string()],
          right: vec!["a".to_string()],
          bottom: vec!["a".to_string()],
          ..Default::default()
        },
      )
      .page(
        "child",
        PageDef {
          base: "parent".to_string(),
          top: vec!["b".to_string()],
          left: vec!["b".to_string()],
          center: vec!["b".to_string()],
          right: vec!["b".to_string()],
          bottom: vec!["b".to_string()],
          ..Default::default()
        },
      );
    let composed = site.compose("child", &RequestParams::new()).unwrap();
    for slot in Slot::ALL {
      assert_eq!(composed.slot(slot), ["A", "B"], "slot {}", slot.as_str());
    }
  }

  #[test]
  fn missing_page_is_not_found() {
    let site = three_level_site();
    let err = site.compose("nope", &RequestParams::new()).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status(), 404);
  }

  #[test]
  fn dangling_base_ends_chain_silently() {
    let site = Site::new().page(
      "orphan",
      PageDef { title: "Orphan".to_string(), base: "gone".to_string(), ..Default::default() },
    );
    let composed = site.compose("orphan", &RequestParams::new()).unwrap();
    assert_eq!(composed.title, "Orphan");
  }

  #[test]
  fn cyclic_base_is_detected() {
    let site = Site::new()
      .page("a", PageDef { base: "b".to_string(), ..Default::default() })
      .page("b", PageDef { base: "a".to_string(), ..Default::default() });
    let err = site.compose("a", &RequestParams::new()).unwrap_err();
    assert_eq!(err.code(), "CYCLIC_BASE");
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn self_referencing_base_is_a_cycle() {
    let site =
      Site::new().page("a", PageDef { base: "a".to_string(), ..Default::default() });
    let err = site.compose("a", &RequestParams::new()).unwrap_err();
    assert_eq!(err.code(), "CYCLIC_BASE");
  }

  #[test]
  fn missing_widget_renders_placeholder() {
    let site = Site::new()
      .widget("real", static_widget("<p>ok</p>"))
      .page(
        "page",
        PageDef {
          center: vec!["real".to_string(), "ghost".to_string()],
          ..Default::default()
        },
      );
    let composed = site.compose("page", &RequestParams::new()).unwrap();
    assert_eq!(composed.center, ["<p>ok</p>", "Missing Widget: ghost"]);
  }

  #[test]
  fn widgets_see_request_params() {
    let site = Site::new()
      .widget("echo", static_widget("<i><!--quilt:word--></i>"))
      .page("page", PageDef { center: vec!["echo".to_string()], ..Default::default() });
    let params = RequestParams::from_query("word=hello");
    let composed = site.compose("page", &params).unwrap();
    assert_eq!(composed.center, ["<i>hello</i>"]);
  }

  #[test]
  fn duplicate_widget_in_one_slot_renders_twice() {
    let site = Site::new()
      .widget("x", static_widget("X"))
      .page(
        "page",
        PageDef { bottom: vec!["x".to_string(), "x".to_string()], ..Default::default() },
      );
    let composed = site.compose("page", &RequestParams::new()).unwrap();
    assert_eq!(composed.bottom, ["X", "X"]);
  }
}
