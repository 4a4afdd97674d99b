use crate::path::RoutingPath;
use futures_util::future::{BoxFuture, join_all};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a single probe, or of a whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    Ok,
    NotOk,
}

impl ProbeStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            ProbeStatus::Ok => "[+]",
            ProbeStatus::NotOk => "[-]",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProbeStatus::Ok => "ok",
            ProbeStatus::NotOk => "not_ok",
        }
    }

    pub fn and(self, other: ProbeStatus) -> ProbeStatus {
        match (self, other) {
            (ProbeStatus::Ok, ProbeStatus::Ok) => ProbeStatus::Ok,
            _ => ProbeStatus::NotOk,
        }
    }
}

/// Asynchronous health check supplied by the application.
///
/// An `Err` result is reported as [`ProbeStatus::NotOk`], as is a panic inside the probe.
pub type ProbeHandler = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<ProbeStatus>> + Send + Sync>;

/// Wraps an async closure into a [`ProbeHandler`].
pub fn probe_fn<F, Fut>(f: F) -> ProbeHandler
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<ProbeStatus>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()))
}

/// Probe that always reports the given status.
pub fn constant(status: ProbeStatus) -> ProbeHandler {
    probe_fn(move || async move { Ok(status) })
}

pub type ProbeResults = Vec<(RoutingPath, ProbeStatus)>;

/// Runs every probe on its own task and waits for all of them.
///
/// Results keep the order of `probes`, whatever order the tasks finish in. The overall status is
/// `Ok` only if every probe reported `Ok`.
pub async fn launch_probes(
    probes: &[(RoutingPath, ProbeHandler)],
    timeout: Option<Duration>,
) -> (ProbeStatus, ProbeResults) {
    let tasks = probes.iter().map(|(name, handler)| {
        let handler = handler.clone();
        let task = tokio::spawn(async move {
            let future = handler();
            match timeout {
                Some(limit) => tokio::time::timeout(limit, future)
                    .await
                    .unwrap_or_else(|_| Err(anyhow::anyhow!("probe timed out after {:?}", limit))),
                None => future.await,
            }
        });

        async move {
            let status = match task.await {
                Ok(Ok(status)) => status,
                Ok(Err(_)) | Err(_) => ProbeStatus::NotOk,
            };
            (name.clone(), status)
        }
    });

    let results = join_all(tasks).await;
    let status = results
        .iter()
        .fold(ProbeStatus::Ok, |acc, (_, next)| acc.and(*next));

    (status, results)
}
