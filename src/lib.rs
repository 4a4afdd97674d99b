//! Diagnostic z-pages (`/livez`, `/readyz`) for axum services.
//!
//! Pages are registered once at startup into a [`ZPagesConfig`], frozen into a [`ZPages`] trie, and
//! served by [`dispatch_guard`] ahead of the application's own route matching.

pub mod error;
pub mod guard;
pub mod page;
pub mod path;
pub mod probe;
pub mod registry;
pub mod route;

pub use error::ZPagesError;
pub use guard::{Handled, dispatch_guard, intercepts};
pub use page::{ProbingPage, ProbingPageBuilder, RenderedPage};
pub use path::{RoutingPath, RoutingPathSegment};
pub use probe::{ProbeHandler, ProbeStatus, constant, probe_fn};
pub use registry::{DEFAULT_LIVEZ_ENDPOINT, DEFAULT_READYZ_ENDPOINT, ZPages, ZPagesConfig};
pub use route::Route;

use axum::response::Response;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Per-request input handed to a matched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// `verbose` was present in the query string.
    pub verbose: bool,
    /// Part of the request path beyond the page's registration point.
    pub path_info: RoutingPath,
}

/// A diagnostic endpoint's request handler.
pub trait Page: Send + Sync {
    fn handle<'a>(&'a self, context: PageContext) -> BoxFuture<'a, Response>;
}

pub type PageHandler = Arc<dyn Page>;
