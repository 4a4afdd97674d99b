use std::env;
use std::time::Duration;
use anyhow::{Context, Result, bail};
use zpages::{DEFAULT_LIVEZ_ENDPOINT, DEFAULT_READYZ_ENDPOINT};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub livez_endpoint: String,
    pub readyz_endpoint: String,
    pub probe_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let livez_endpoint = env::var("ZPAGES_LIVEZ_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_LIVEZ_ENDPOINT.to_string());

        let readyz_endpoint = env::var("ZPAGES_READYZ_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_READYZ_ENDPOINT.to_string());

        let probe_timeout = match env::var("ZPAGES_PROBE_TIMEOUT_MS").ok() {
            Some(raw) => {
                let millis = raw
                    .parse::<u64>()
                    .context("ZPAGES_PROBE_TIMEOUT_MS must be a number of milliseconds")?;
                if millis == 0 {
                    bail!("ZPAGES_PROBE_TIMEOUT_MS must be greater than zero");
                }
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        Ok(Config {
            service_port,
            service_host,
            livez_endpoint,
            readyz_endpoint,
            probe_timeout,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Liveness endpoint: {}", self.livez_endpoint);
        tracing::info!("  Readiness endpoint: {}", self.readyz_endpoint);
        match self.probe_timeout {
            Some(timeout) => tracing::info!("  Probe timeout: {:?}", timeout),
            None => tracing::info!("  Probe timeout: disabled"),
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests share the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("ZPAGES_LIVEZ_ENDPOINT");
            env::remove_var("ZPAGES_READYZ_ENDPOINT");
            env::remove_var("ZPAGES_PROBE_TIMEOUT_MS");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("ZPAGES_LIVEZ_ENDPOINT", "/healthz/live");
            env::set_var("ZPAGES_READYZ_ENDPOINT", "/healthz/ready");
            env::set_var("ZPAGES_PROBE_TIMEOUT_MS", "1500");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.livez_endpoint, "/healthz/live");
        assert_eq!(config.readyz_endpoint, "/healthz/ready");
        assert_eq!(config.probe_timeout, Some(Duration::from_millis(1500)));

        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.livez_endpoint, "/livez");
        assert_eq!(config.readyz_endpoint, "/readyz");
        assert_eq!(config.probe_timeout, None);
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }

    #[test]
    fn test_invalid_probe_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        for raw in ["soon", "0"] {
            unsafe {
                env::set_var("ZPAGES_PROBE_TIMEOUT_MS", raw);
            }

            let error = Config::from_env().unwrap_err();
            assert!(error.to_string().contains("ZPAGES_PROBE_TIMEOUT_MS"), "value {:?}", raw);
        }

        clear_env_vars();
    }
}
