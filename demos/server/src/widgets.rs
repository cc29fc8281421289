/* demos/server/src/widgets.rs */

use std::sync::Arc;

use quilt_site::widget::template_render;
use quilt_site::{BindParams, WidgetDef};
use quilt_template::Template;
use serde::Serialize;

/// Request parameters the search box understands.
#[derive(Default, Serialize, BindParams)]
pub struct SearchParams {
  pub query: String,
  pub page: i64,
}

pub fn search_box() -> WidgetDef<SearchParams> {
  let template = Template::parse(concat!(
    "<form action=\"/search\" id=\"searchBox\">\n",
    "  <input name=\"query\" value=\"<!--quilt:query-->\">\n",
    "  <button>Search page <!--quilt:page--></button>\n",
    "</form>",
  ));
  WidgetDef {
    prepare: Some(Arc::new(|mut p: SearchParams| {
      if p.page < 1 {
        p.page = 1;
      }
      p
    })),
    render: Some(template_render(template)),
    ..WidgetDef::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use quilt_site::{RequestParams, Widget};

  #[test]
  fn search_box_escapes_the_query() {
    let widget = search_box();
    let params = RequestParams::from_query("query=%3Cb%3E");
    let html = widget.render(&params);
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("<b>"));
  }

  #[test]
  fn search_box_clamps_page_to_one() {
    let widget = search_box();
    let html = widget.render(&RequestParams::from_query("page=0"));
    assert!(html.contains("page 1"));
    let html = widget.render(&RequestParams::from_query("page=abc"));
    assert!(html.contains("page 1"));
  }
}
