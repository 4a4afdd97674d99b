use crate::registry::ZPages;
use crate::PageContext;
use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, Method, Uri, header},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

/// Request/response extension marking a request as already answered by an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handled;

/// Whether a request is eligible for diagnostic dispatch: an unhandled `GET` whose declared
/// content type is absent, `*/*` or `text/plain`.
pub fn intercepts(method: &Method, headers: &HeaderMap, already_handled: bool) -> bool {
    if already_handled || *method != Method::GET {
        return false;
    }

    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };

    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    matches!(essence.as_str(), "" | "*/*" | "text/plain")
}

fn is_verbose(uri: &Uri) -> bool {
    Query::<HashMap<String, String>>::try_from_uri(uri)
        .map(|Query(params)| params.contains_key("verbose"))
        .unwrap_or(false)
}

/// Middleware answering diagnostic endpoints before the application's routes are consulted.
///
/// Must wrap the whole `Router` (`from_fn_with_state(..).layer(router)`) rather than be added with
/// `Router::layer`, which only runs after route matching.
pub async fn dispatch_guard(State(zpages): State<ZPages>, request: Request, next: Next) -> Response {
    let already_handled = request.extensions().get::<Handled>().is_some();
    if !intercepts(request.method(), request.headers(), already_handled) {
        return next.run(request).await;
    }

    let Some((page, path_info)) = zpages.get(request.uri().path()) else {
        tracing::debug!(path = %request.uri().path(), "No diagnostic page matched");
        return next.run(request).await;
    };

    let context = PageContext {
        verbose: is_verbose(request.uri()),
        path_info,
    };
    tracing::debug!(
        path = %request.uri().path(),
        path_info = %context.path_info,
        verbose = context.verbose,
        "Serving diagnostic page"
    );

    let mut response = page.handle(context).await;
    response.extensions_mut().insert(Handled);
    response
}
