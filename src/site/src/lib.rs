/* src/site/src/lib.rs */

mod compose;
pub mod errors;
mod loader;
pub mod page;
pub mod params;
pub mod route;
pub mod site;
pub mod widget;

// Re-exports for ergonomic use
pub use errors::SiteError;
pub use page::{ComposedPage, PageDef, Slot};
pub use params::{BindParams, ParamBindings, RequestParams};
pub use quilt_macros::BindParams;
pub use route::{Route, RouteMatch, RouteTarget};
pub use site::{Site, WireframeFn};
pub use widget::{PrepareFn, RenderFn, TemplateWidget, Widget, WidgetDef};

// The derive macro emits `quilt_site::`-prefixed paths; this alias makes
// those paths resolve inside this crate's own tests.
extern crate self as quilt_site;
