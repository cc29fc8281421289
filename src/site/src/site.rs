/* src/site/src/site.rs */

use std::collections::HashMap;
use std::path::Path;

use quilt_template::Template;
use serde_json::Value;

use crate::compose;
use crate::errors::SiteError;
use crate::loader;
use crate::page::{ComposedPage, PageDef};
use crate::params::RequestParams;
use crate::route::{Route, RouteMatch};
use crate::widget::Widget;

/// Renders a composed page into a complete HTML document.
pub type WireframeFn = Box<dyn Fn(&ComposedPage) -> String + Send + Sync>;

/// A whole website: wireframes, widgets, pages, and the ordered route
/// table. Built once up front with the consuming builder methods, then
/// shared read-only with the serving layer. There is no global instance;
/// whoever builds the `Site` owns it.
pub struct Site {
  pub(crate) wireframes: HashMap<String, WireframeFn>,
  pub(crate) widgets: HashMap<String, Box<dyn Widget>>,
  pub(crate) pages: HashMap<String, PageDef>,
  pub(crate) routes: Vec<Route>,
}

impl Site {
  pub fn new() -> Self {
    Self {
      wireframes: HashMap::new(),
      widgets: HashMap::new(),
      pages: HashMap::new(),
      routes: Vec::new(),
    }
  }

  /// Register a wireframe render fn. Later registrations replace earlier
  /// ones with the same name, including entries loaded from disk.
  pub fn wireframe(
    mut self,
    name: impl Into<String>,
    render: impl Fn(&ComposedPage) -> String + Send + Sync + 'static,
  ) -> Self {
    self.wireframes.insert(name.into(), Box::new(render));
    self
  }

  /// Register a wireframe backed by a template.
  pub fn wireframe_template(mut self, name: impl Into<String>, template: Template) -> Self {
    self.wireframes.insert(name.into(), wireframe_from(template));
    self
  }

  pub fn widget(mut self, name: impl Into<String>, widget: impl Widget + 'static) -> Self {
    self.widgets.insert(name.into(), Box::new(widget));
    self
  }

  pub fn page(mut self, name: impl Into<String>, page: PageDef) -> Self {
    self.pages.insert(name.into(), page);
    self
  }

  /// Append to the route table. Registration order is match priority: the
  /// first route whose pattern matches a request path wins.
  pub fn route(mut self, route: Route) -> Self {
    self.routes.push(route);
    self
  }

  /// Load the `wireframes/`, `widgets/` and `actions/` subtrees of a
  /// content folder into the registries. Unreadable or malformed entries
  /// are logged and degraded (pages fall back to an empty definition);
  /// loading itself never fails.
  pub fn load_content_dir(mut self, dir: impl AsRef<Path>) -> Self {
    loader::load_into(&mut self, dir.as_ref());
    self
  }

  // -- lookups --

  pub fn page_def(&self, name: &str) -> Option<&PageDef> {
    self.pages.get(name)
  }

  pub fn has_widget(&self, name: &str) -> bool {
    self.widgets.contains_key(name)
  }

  pub fn has_wireframe(&self, name: &str) -> bool {
    self.wireframes.contains_key(name)
  }

  /// First matching route in registration order.
  pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
    self
      .routes
      .iter()
      .find_map(|route| route.capture(path).map(|captures| RouteMatch { route, captures }))
  }

  // -- rendering --

  /// Flatten the named page through its inheritance chain, rendering the
  /// widgets in every slot with `params`.
  pub fn compose(
    &self,
    page_name: &str,
    params: &RequestParams,
  ) -> Result<ComposedPage, SiteError> {
    compose::compose(self, page_name, params)
  }

  /// Render one widget by name. Unknown names yield a visible placeholder
  /// rather than an error.
  pub fn render_widget(&self, name: &str, params: &RequestParams) -> String {
    compose::render_widget(self, name, params)
  }

  /// Render a composed page through the wireframe it names. A missing
  /// wireframe is a server error, not a silently dropped response.
  pub fn render_wireframe(&self, page: &ComposedPage) -> Result<String, SiteError> {
    let Some(wireframe) = self.wireframes.get(&page.wireframe) else {
      return Err(SiteError::no_wireframe(format!("no wireframe named {}", page.wireframe)));
    };
    Ok(wireframe(page))
  }

  /// The full action pipeline: compose, then render the wireframe.
  pub fn render_page(&self, page_name: &str, params: &RequestParams) -> Result<String, SiteError> {
    let page = self.compose(page_name, params)?;
    self.render_wireframe(&page)
  }
}

impl Default for Site {
  fn default() -> Self {
    Self::new()
  }
}

/// Wrap a template as a wireframe fn rendering the serialized page.
pub(crate) fn wireframe_from(template: Template) -> WireframeFn {
  Box::new(move |page| {
    let data = serde_json::to_value(page).unwrap_or(Value::Null);
    template.render(&data)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::widget::TemplateWidget;

  fn welcome_site() -> Site {
    Site::new()
      .wireframe_template(
        "default",
        Template::parse("<html><title><!--quilt:title--></title><!--quilt:top:html--></html>"),
      )
      .widget("banner", TemplateWidget::new(Template::parse("<h1>Welcome</h1>")))
      .page(
        "homePage",
        PageDef {
          title: "Home".to_string(),
          wireframe: "default".to_string(),
          top: vec!["banner".to_string()],
          ..Default::default()
        },
      )
  }

  #[test]
  fn render_page_wraps_composition_in_wireframe() {
    let site = welcome_site();
    let html = site.render_page("homePage", &RequestParams::new()).unwrap();
    assert_eq!(html, "<html><title>Home</title><h1>Welcome</h1></html>");
  }

  #[test]
  fn missing_wireframe_is_an_error() {
    let site = Site::new().page(
      "lost",
      PageDef { wireframe: "ghost".to_string(), ..Default::default() },
    );
    let err = site.render_page("lost", &RequestParams::new()).unwrap_err();
    assert_eq!(err.code(), "NO_WIREFRAME");
    assert_eq!(err.status(), 500);
    assert!(err.message().contains("ghost"));
  }

  #[test]
  fn custom_wireframe_fn_receives_composed_page() {
    let site = Site::new()
      .wireframe("plain", |page: &ComposedPage| format!("[{}]", page.title))
      .page(
        "p",
        PageDef {
          title: "T".to_string(),
          wireframe: "plain".to_string(),
          ..Default::default()
        },
      );
    assert_eq!(site.render_page("p", &RequestParams::new()).unwrap(), "[T]");
  }

  #[test]
  fn routes_match_in_registration_order() {
    let site = Site::new()
      .route(Route::action("about", "^/about$", "aboutPage").unwrap())
      .route(Route::action("catch-all", "^/.*$", "defaultPage").unwrap());

    let hit = site.match_route("/about").unwrap();
    assert_eq!(hit.route.name(), "about");

    let hit = site.match_route("/anything-else").unwrap();
    assert_eq!(hit.route.name(), "catch-all");
  }

  #[test]
  fn catch_all_first_shadows_later_routes() {
    let site = Site::new()
      .route(Route::action("catch-all", "^/.*$", "defaultPage").unwrap())
      .route(Route::action("about", "^/about$", "aboutPage").unwrap());
    let hit = site.match_route("/about").unwrap();
    assert_eq!(hit.route.name(), "catch-all");
  }

  #[test]
  fn no_route_matches() {
    let site = Site::new().route(Route::exact("home", "/", "homePage").unwrap());
    assert!(site.match_route("/missing").is_none());
  }

  #[test]
  fn match_route_returns_captures() {
    let site = Site::new()
      .route(Route::action("user", "^/user/(?P<id>[0-9]+)$", "userPage").unwrap());
    let hit = site.match_route("/user/17").unwrap();
    assert_eq!(hit.captures, [("id".to_string(), "17".to_string())]);
  }

  #[test]
  fn later_widget_registration_replaces_earlier() {
    let site = welcome_site()
      .widget("banner", TemplateWidget::new(Template::parse("<h1>Replaced</h1>")));
    let html = site.render_page("homePage", &RequestParams::new()).unwrap();
    assert!(html.contains("Replaced"));
  }
}
