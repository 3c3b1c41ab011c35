//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CONFIG_SCHEMA_V1, ConsoleguardConfigV1};
pub use resolve::{FailOn, Overrides, ResolvedConfig};

/// Parse `consoleguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ConsoleguardConfigV1> {
    let cfg: ConsoleguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings (built-in defaults < config file < overrides).
pub fn resolve_config(
    cfg: ConsoleguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
