//! Resolution sources and process setup (desktop via winit behind `desktop`)
//!
//! The scaling core only knows the [`ResolutionSource`] trait. This crate
//! provides the sources an application normally wires in:
//!
//! - [`EnvResolution`] — a `REALSIZE_DPI` override, for tests and odd setups.
//! - [`ResolutionChain`] — first source that answers wins.
//! - `desktop::WindowResolution` — the monitor a winit window is on.
//!
//! Refreshing stays explicit. On desktop, `desktop::handle_window_event`
//! refreshes on the window events that can change the resolution (moving to
//! another monitor, a scale-factor change); anything else is up to the caller.

use realsize_core::error::Result;
use realsize_core::{FixedResolution, ResolutionSource, ScaleConfig, ScaleError};
use thiserror::Error;

#[cfg(feature = "desktop")]
pub mod desktop;

/// Environment variable read by [`EnvResolution::default`].
pub const DPI_ENV_VAR: &str = "REALSIZE_DPI";
/// Resolution of a display with an OS scale factor of 1.0.
pub const BASE_DPI: f64 = 96.0;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("{var} is not set")]
    NotSet { var: String },
    #[error("{var}={value:?} is not a positive integer resolution")]
    InvalidDpi { var: String, value: String },
    #[error("scale factor {0} does not map to a resolution")]
    InvalidScaleFactor(f64),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<PlatformError> for ScaleError {
    fn from(e: PlatformError) -> Self {
        ScaleError::ResolutionUnavailable(e.to_string())
    }
}

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logging() -> std::result::Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    Ok(())
}

/// Reads the resolution from an environment variable on every query.
#[derive(Clone, Debug)]
pub struct EnvResolution {
    var: String,
}

impl EnvResolution {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvResolution {
    fn default() -> Self {
        Self::new(DPI_ENV_VAR)
    }
}

impl ResolutionSource for EnvResolution {
    fn resolution(&self) -> Result<u32> {
        let value = std::env::var(&self.var).map_err(|_| PlatformError::NotSet {
            var: self.var.clone(),
        })?;
        Ok(parse_dpi(&self.var, &value)?)
    }
}

pub fn parse_dpi(var: &str, value: &str) -> std::result::Result<u32, PlatformError> {
    match value.trim().parse::<u32>() {
        Ok(dpi) if dpi > 0 => Ok(dpi),
        _ => Err(PlatformError::InvalidDpi {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Maps an OS scale factor (1.0 = 96 ppi) to a resolution.
pub fn resolution_from_scale_factor(factor: f64) -> std::result::Result<u32, PlatformError> {
    let dpi = (factor * BASE_DPI).round();
    if !dpi.is_finite() || dpi < 1.0 || dpi > u32::MAX as f64 {
        return Err(PlatformError::InvalidScaleFactor(factor));
    }
    Ok(dpi as u32)
}

/// Asks each source in turn; the first success wins. Failures are logged at
/// debug level; if every source fails, the last error is returned.
#[derive(Default)]
pub struct ResolutionChain {
    sources: Vec<Box<dyn ResolutionSource>>,
}

impl ResolutionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl ResolutionSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ResolutionSource for ResolutionChain {
    fn resolution(&self) -> Result<u32> {
        let mut last = ScaleError::ResolutionUnavailable("no resolution source".into());
        for source in &self.sources {
            match source.resolution() {
                Ok(dpi) => return Ok(dpi),
                Err(e) => {
                    log::debug!("resolution source failed: {e}");
                    last = e;
                }
            }
        }
        Err(last)
    }
}

/// The environment override, then `config.fallback_resolution`.
pub fn detect_source(config: &ScaleConfig) -> ResolutionChain {
    ResolutionChain::new()
        .with(EnvResolution::default())
        .with(FixedResolution(config.fallback_resolution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dpi() {
        assert_eq!(parse_dpi("X", "120").unwrap(), 120);
        assert_eq!(parse_dpi("X", " 96\n").unwrap(), 96);
        assert!(matches!(
            parse_dpi("X", "0"),
            Err(PlatformError::InvalidDpi { .. })
        ));
        assert!(parse_dpi("X", "abc").is_err());
        assert!(parse_dpi("X", "-5").is_err());
    }

    #[test]
    fn test_scale_factor_to_resolution() {
        assert_eq!(resolution_from_scale_factor(1.0).unwrap(), 96);
        assert_eq!(resolution_from_scale_factor(1.25).unwrap(), 120);
        assert_eq!(resolution_from_scale_factor(2.0).unwrap(), 192);
        assert!(resolution_from_scale_factor(0.0).is_err());
        assert!(resolution_from_scale_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_unset_env_var_is_unavailable() {
        let source = EnvResolution::new("REALSIZE_TEST_DPI_NEVER_SET");
        match source.resolution() {
            Err(ScaleError::ResolutionUnavailable(msg)) => {
                assert!(msg.contains("REALSIZE_TEST_DPI_NEVER_SET"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_chain_first_success_wins() {
        let chain = ResolutionChain::new()
            .with(EnvResolution::new("REALSIZE_TEST_DPI_NEVER_SET"))
            .with(FixedResolution(144))
            .with(FixedResolution(72));
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.resolution().unwrap(), 144);
    }

    #[test]
    fn test_empty_chain_fails() {
        let chain = ResolutionChain::new();
        assert!(chain.is_empty());
        assert!(chain.resolution().is_err());
    }

    #[test]
    fn test_detect_source_falls_back_to_config() {
        let config = ScaleConfig {
            fallback_resolution: 101,
            ..Default::default()
        };
        let chain = detect_source(&config);
        // REALSIZE_DPI may be set by whoever runs the tests.
        let expected = match std::env::var(DPI_ENV_VAR) {
            Ok(v) => parse_dpi(DPI_ENV_VAR, &v).unwrap_or(101),
            Err(_) => 101,
        };
        assert_eq!(chain.resolution().unwrap(), expected);
    }
}
