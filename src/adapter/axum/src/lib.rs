/* src/adapter/axum/src/lib.rs */

mod error;
mod handler;

use quilt_site::Site;

/// Re-export quilt-site core for convenience
pub use quilt_site;

/// Extension trait that converts a `Site` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for Site {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "quilt site listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
