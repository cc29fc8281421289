/* demos/server/src/main.rs */

mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use quilt_site::{Route, Site, SiteError};
use quilt_site_axum::IntoAxumRouter;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// Quilt demo site: a few pages composed from a content tree plus one
/// typed widget registered in code.
#[derive(Parser, Debug)]
#[command(name = "demo-server", version, about)]
struct Cli {
  /// Content tree holding wireframes/, widgets/ and actions/
  #[arg(long, default_value = "demos/server/content")]
  content: PathBuf,

  /// Listen port
  #[arg(long, default_value_t = 3000)]
  port: u16,

  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, action = clap::ArgAction::Count)]
  verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let site = build_site(&cli.content)?;
  info!(content = %cli.content.display(), port = cli.port, "demo site ready");
  site.serve(&format!("0.0.0.0:{}", cli.port)).await
}

fn build_site(content: &Path) -> Result<Site, SiteError> {
  Ok(
    Site::new()
      .load_content_dir(content)
      .widget("searchBox", widgets::search_box())
      .route(Route::exact("home", "/", "homePage")?)
      .route(Route::exact("about", "/about", "aboutPage")?)
      .route(Route::action("search-term", "^/search/(?P<query>[^/]+)$", "searchPage")?)
      .route(Route::exact("search", "/search", "searchPage")?)
      .route(Route::media_dir("media", "/media/", content.join("media"))?),
  )
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::INFO,
    1 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };
  tracing_subscriber::fmt().with_max_level(level).init();
}
