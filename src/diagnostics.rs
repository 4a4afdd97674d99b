use crate::config::Config;
use zpages::{ProbeStatus, ZPages, ZPagesConfig, ZPagesError, constant};

/// Registers the demo's liveness and readiness pages.
///
/// The probes stand in for real connectivity checks and report fixed statuses.
pub fn build_zpages(config: &Config) -> Result<ZPages, ZPagesError> {
    let mut zpages = ZPagesConfig::new().probe_timeout(config.probe_timeout);

    zpages.ready(Some(config.readyz_endpoint.as_str()), |page| {
        page.probe("mongodb", constant(ProbeStatus::Ok))?
            .probe("redis", constant(ProbeStatus::Ok))?
            .probe("kafka", constant(ProbeStatus::Ok))?;
        Ok(())
    })?;

    zpages.live(Some(config.livez_endpoint.as_str()), |page| {
        page.probe("mongodb", constant(ProbeStatus::NotOk))?
            .probe("redis", constant(ProbeStatus::Ok))?
            .probe("kafka", constant(ProbeStatus::Ok))?;
        Ok(())
    })?;

    Ok(zpages.build())
}
