/* src/site/src/widget.rs */

use std::sync::Arc;

use quilt_template::Template;
use serde::Serialize;
use serde_json::Value;

use crate::params::{BindParams, ParamBindings, RequestParams};

pub type PrepareFn<P> = Arc<dyn Fn(P) -> P + Send + Sync>;
pub type RenderFn<P> = Arc<dyn Fn(&P) -> String + Send + Sync>;

/// A named, reusable fragment producer. Implementations receive the request
/// parameters and return an HTML fragment.
pub trait Widget: Send + Sync {
  fn render(&self, params: &RequestParams) -> String;
}

/// Typed widget definition. Per render, request parameters are bound onto a
/// fresh `P::default()`, `prepare` (when set) derives any computed state,
/// and `render` produces the fragment. Without a `render` fn the widget
/// yields no output.
pub struct WidgetDef<P> {
  pub bindings: ParamBindings<P>,
  pub prepare: Option<PrepareFn<P>>,
  pub render: Option<RenderFn<P>>,
}

impl<P: BindParams> WidgetDef<P> {
  /// Definition with derived bindings and no prepare or render yet.
  pub fn new() -> Self {
    Self { bindings: P::bindings(), prepare: None, render: None }
  }
}

impl<P: BindParams> Default for WidgetDef<P> {
  fn default() -> Self {
    Self::new()
  }
}

impl<P: Default> Widget for WidgetDef<P> {
  fn render(&self, params: &RequestParams) -> String {
    let mut data = P::default();
    self.bindings.assign(&mut data, params);
    let data = match &self.prepare {
      Some(prepare) => prepare(data),
      None => data,
    };
    match &self.render {
      Some(render) => render(&data),
      None => String::new(),
    }
  }
}

/// Render fn that serializes the params struct and feeds it to a template.
pub fn template_render<P: Serialize + 'static>(template: Template) -> RenderFn<P> {
  Arc::new(move |data| {
    let value = serde_json::to_value(data).unwrap_or(Value::Null);
    template.render(&value)
  })
}

/// Widget loaded from a content folder: renders its template against the
/// raw request parameters, or nothing when the folder had no template file.
pub struct TemplateWidget {
  template: Option<Template>,
}

impl TemplateWidget {
  pub fn new(template: Template) -> Self {
    Self { template: Some(template) }
  }

  /// Entry for a widget folder without a template file.
  pub fn empty() -> Self {
    Self { template: None }
  }
}

impl Widget for TemplateWidget {
  fn render(&self, params: &RequestParams) -> String {
    match &self.template {
      Some(template) => template.render(&params.to_value()),
      None => String::new(),
    }
  }
}
