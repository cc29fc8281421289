/* src/adapter/axum/src/handler.rs */

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Router;
use pct_str::PctStr;
use quilt_site::{RequestParams, RouteTarget, Site};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

pub(crate) struct AppState {
  pub site: Site,
}

/// Every path, any method, flows through the route table: the router is a
/// single fallback dispatcher over the shared site.
pub(crate) fn build_router(site: Site) -> Router {
  let state = Arc::new(AppState { site });
  Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(State(state): State<Arc<AppState>>, req: Request) -> Response {
  // Patterns and captures see the decoded path; the filesystem services
  // below receive the raw URI and do their own decoding.
  let path = decode_path(req.uri().path());
  let mut params = RequestParams::from_query(req.uri().query().unwrap_or(""));

  let Some(hit) = state.site.match_route(&path) else {
    debug!(path, "no route matched");
    return (StatusCode::NOT_FOUND, "404 page not found\n").into_response();
  };
  debug!(path, route = hit.route.name(), "matched route");

  // Captures take precedence over query parameters of the same name
  for (key, value) in hit.captures {
    params.set(key, value);
  }

  match hit.route.target() {
    RouteTarget::Action(action) => match state.site.render_page(action, &params) {
      Ok(html) => Html(html).into_response(),
      Err(err) => {
        warn!(path, action, error = %err, "page render failed");
        crate::error::AxumError(err).into_response()
      }
    },
    RouteTarget::File(file) => serve_file(file, req).await,
    RouteTarget::MediaDir { prefix, root } => serve_dir(prefix, root, req).await,
  }
}

/// Percent-decode a request path. Broken escapes keep the raw path so a
/// stray `%` degrades to a route miss instead of an error. Unlike query
/// values, `+` stays literal in paths.
fn decode_path(raw: &str) -> String {
  match PctStr::new(raw) {
    Ok(pct) => pct.decode(),
    Err(_) => raw.to_string(),
  }
}

async fn serve_file(file: &Path, req: Request) -> Response {
  match ServeFile::new(file).oneshot(req).await {
    Ok(response) => response.into_response(),
    Err(never) => match never {},
  }
}

/// The matched prefix names the route, not a directory level: strip it
/// before handing the path to the filesystem service.
async fn serve_dir(prefix: &str, root: &Path, req: Request) -> Response {
  let path = req.uri().path();
  let stripped = path.strip_prefix(prefix).unwrap_or(path);
  let rewritten = format!("/{}", stripped.trim_start_matches('/'));
  let Ok(uri) = rewritten.parse::<Uri>() else {
    return StatusCode::NOT_FOUND.into_response();
  };

  let (mut parts, body) = req.into_parts();
  parts.uri = uri;
  match ServeDir::new(root).oneshot(Request::from_parts(parts, body)).await {
    Ok(response) => response.into_response(),
    Err(never) => match never {},
  }
}
