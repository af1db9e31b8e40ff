//! Service configuration and parameter parsing for the CLI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use client::state::params::{FilterParameter, FilterParameters};

use crate::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ServiceTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Where the filter server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub timeouts: ServiceTimeouts,
}

impl ServiceConfig {
    /// Build typed config from the CLI flags (which fall back to environment variables).
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless the URL starts with `http://` or `https://`,
    /// and [`CliError::InvalidConfig`] for zero timeouts.
    pub fn new(base_url: &str, request_secs: u64, connect_secs: u64) -> Result<Self, CliError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| base_url.strip_prefix(scheme).is_some_and(|host| !host.is_empty()));
        if !has_host {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        if request_secs == 0 || connect_secs == 0 {
            return Err(CliError::InvalidConfig("timeouts must be at least one second".into()));
        }
        Ok(Self {
            base_url: base_url.to_owned(),
            timeouts: ServiceTimeouts { request_secs, connect_secs },
        })
    }

    /// Absolute URL for a server path such as `/upload`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Parse one `name=value` flag, e.g. `sepia_intensity=0.8`.
///
/// # Errors
///
/// Returns [`CliError::InvalidParam`] for a missing `=`, an unknown name, or a bad number.
pub fn parse_param(raw: &str) -> Result<(FilterParameter, f64), CliError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidParam(format!("expected name=value, got {raw:?}")))?;
    let param = FilterParameter::from_form_field(name.trim())
        .ok_or_else(|| CliError::InvalidParam(format!("unknown parameter {name:?}")))?;
    let mut scratch = FilterParameters::default();
    let value = scratch
        .set_from_input(param, value)
        .map_err(|err| CliError::InvalidParam(err.to_string()))?;
    Ok((param, value))
}

/// Defaults overridden by every `name=value` flag, later flags winning.
///
/// # Errors
///
/// Propagates the first [`parse_param`] failure.
pub fn parameters_from_flags(flags: &[String]) -> Result<FilterParameters, CliError> {
    let mut parameters = FilterParameters::default();
    for flag in flags {
        let (param, value) = parse_param(flag)?;
        parameters.set(param, value)?;
    }
    Ok(parameters)
}
