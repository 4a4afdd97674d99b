use crate::page::ProbingPageBuilder;
use crate::path::RoutingPath;
use crate::route::Route;
use crate::{Page, PageHandler};
use crate::error::ZPagesError;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LIVEZ_ENDPOINT: &str = "/livez";
pub const DEFAULT_READYZ_ENDPOINT: &str = "/readyz";

/// Startup-time registry of diagnostic pages.
#[derive(Default)]
pub struct ZPagesConfig {
    root: Route<PageHandler>,
    probe_timeout: Option<Duration>,
}

impl ZPagesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeout applied to every probe of pages built through [`live`](Self::live) and
    /// [`ready`](Self::ready). `None` lets probes run to completion.
    pub fn probe_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Binds `page` at `endpoint`. Fails if a page is already bound at exactly that path.
    pub fn register(&mut self, endpoint: &str, page: impl Page + 'static) -> Result<(), ZPagesError> {
        if self.contains(endpoint) {
            return Err(ZPagesError::DuplicateEndpoint {
                endpoint: endpoint.to_string(),
            });
        }

        let path = RoutingPath::parse(endpoint);
        self.root = self.root.insert(&path, Arc::new(page));
        tracing::info!(endpoint = %path, "Registered diagnostic endpoint");
        Ok(())
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.root.get(&RoutingPath::parse(endpoint)).is_some()
    }

    /// Registers a "liveness" page at `endpoint` (default `/livez`).
    pub fn live<F>(&mut self, endpoint: Option<&str>, configure: F) -> Result<(), ZPagesError>
    where
        F: FnOnce(&mut ProbingPageBuilder) -> Result<(), ZPagesError>,
    {
        self.probing_page(endpoint.unwrap_or(DEFAULT_LIVEZ_ENDPOINT), "liveness", configure)
    }

    /// Registers a "readiness" page at `endpoint` (default `/readyz`).
    pub fn ready<F>(&mut self, endpoint: Option<&str>, configure: F) -> Result<(), ZPagesError>
    where
        F: FnOnce(&mut ProbingPageBuilder) -> Result<(), ZPagesError>,
    {
        self.probing_page(endpoint.unwrap_or(DEFAULT_READYZ_ENDPOINT), "readiness", configure)
    }

    fn probing_page<F>(&mut self, endpoint: &str, category: &str, configure: F) -> Result<(), ZPagesError>
    where
        F: FnOnce(&mut ProbingPageBuilder) -> Result<(), ZPagesError>,
    {
        let mut builder = ProbingPageBuilder::new(category);
        builder.timeout(self.probe_timeout);
        configure(&mut builder)?;
        self.register(endpoint, builder.build())
    }

    /// Freezes the registry for request handling.
    pub fn build(self) -> ZPages {
        ZPages {
            root: Arc::new(self.root),
        }
    }
}

/// Frozen routing trie of diagnostic pages, shared read-only across requests.
#[derive(Clone)]
pub struct ZPages {
    root: Arc<Route<PageHandler>>,
}

impl ZPages {
    /// Finds the page for a raw request path, with the unmatched remainder as path info.
    pub fn get(&self, path: &str) -> Option<(PageHandler, RoutingPath)> {
        self.root.lookup(&RoutingPath::parse(path))
    }
}
