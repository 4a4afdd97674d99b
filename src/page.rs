use crate::path::RoutingPath;
use crate::probe::{ProbeHandler, ProbeResults, ProbeStatus, launch_probes};
use crate::{Page, PageContext};
use crate::error::ZPagesError;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use std::time::Duration;

pub const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

/// Rendered output of a diagnostic page, before it is turned into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub body: Option<String>,
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, [(header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)], body).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// A page of named probes under one category, e.g. "liveness".
#[derive(Clone)]
pub struct ProbingPage {
    category: String,
    probes: Vec<(RoutingPath, ProbeHandler)>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for ProbingPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbingPage")
            .field("category", &self.category)
            .field("probes", &self.probes.iter().map(|(p, _)| p.to_string()).collect::<Vec<_>>())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProbingPage {
    /// Runs every probe of the page and renders the outcome. The path info does not narrow the
    /// probe set: a sub-path reports the same result as the page itself.
    pub async fn render(&self, context: &PageContext) -> RenderedPage {
        let (status, results) = launch_probes(&self.probes, self.timeout).await;
        render_results(&self.category, status, &results, context.verbose)
    }
}

impl Page for ProbingPage {
    fn handle<'a>(&'a self, context: PageContext) -> BoxFuture<'a, Response> {
        Box::pin(async move { self.render(&context).await.into_response() })
    }
}

/// Verbose: one line per probe plus the summary, 200 or 503.
/// Terse: 204 with no body when healthy, otherwise the summary alone with 503.
pub fn render_results(
    category: &str,
    status: ProbeStatus,
    results: &ProbeResults,
    verbose: bool,
) -> RenderedPage {
    let code = match status {
        ProbeStatus::Ok => StatusCode::OK,
        ProbeStatus::NotOk => StatusCode::SERVICE_UNAVAILABLE,
    };

    if verbose {
        return RenderedPage {
            status: code,
            body: Some(response_text(category, status, results)),
        };
    }

    match status {
        ProbeStatus::Ok => RenderedPage {
            status: StatusCode::NO_CONTENT,
            body: None,
        },
        ProbeStatus::NotOk => RenderedPage {
            status: code,
            body: Some(response_text(category, status, &[])),
        },
    }
}

fn response_text(category: &str, status: ProbeStatus, results: &[(RoutingPath, ProbeStatus)]) -> String {
    let mut text = String::new();
    for (name, probe_status) in results {
        text.push_str(&format!("{}{} {}\n", probe_status.symbol(), name, probe_status.message()));
    }

    let outcome = match status {
        ProbeStatus::Ok => "passed",
        ProbeStatus::NotOk => "failed",
    };
    text.push_str(&format!("{} check {}\n", category, outcome));
    text
}

/// Collects probes for a [`ProbingPage`], rejecting duplicate names.
pub struct ProbingPageBuilder {
    category: String,
    probes: Vec<(RoutingPath, ProbeHandler)>,
    timeout: Option<Duration>,
}

impl ProbingPageBuilder {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            probes: Vec::new(),
            timeout: None,
        }
    }

    pub fn probe(&mut self, name: &str, handler: ProbeHandler) -> Result<&mut Self, ZPagesError> {
        let path = RoutingPath::parse(name);
        if self.probes.iter().any(|(existing, _)| *existing == path) {
            return Err(ZPagesError::DuplicateProbe {
                name: name.to_string(),
                category: self.category.clone(),
            });
        }

        self.probes.push((path, handler));
        Ok(self)
    }

    /// Reports a probe as failed once it runs longer than `timeout`.
    pub fn timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> ProbingPage {
        ProbingPage {
            category: self.category,
            probes: self.probes,
            timeout: self.timeout,
        }
    }
}

impl Default for ProbingPageBuilder {
    fn default() -> Self {
        Self::new("custom")
    }
}
