use crate::model::{CONFIG_SCHEMA_V1, ConsoleguardConfigV1};
use anyhow::Context;
use consoleguard_types::ids::DEFAULT_REGION;

/// Which records make the CLI exit non-zero.
///
/// This never changes `valid` in the result; only failed records do that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    Fail,
    Warning,
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub region: String,
    pub fail_on: FailOn,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            fail_on: FailOn::Fail,
        }
    }
}

pub fn resolve_config(
    cfg: ConsoleguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != CONFIG_SCHEMA_V1
    {
        tracing::warn!(schema, expected = CONFIG_SCHEMA_V1, "unrecognized config schema");
    }

    let mut resolved = ResolvedConfig::default();

    if let Some(region) = overrides.region.or(cfg.region) {
        validate_region(&region).context("invalid region")?;
        resolved.region = region;
    }

    if let Some(fail_on) = overrides.fail_on.or(cfg.fail_on) {
        resolved.fail_on = parse_fail_on(&fail_on)?;
    }

    Ok(resolved)
}

fn validate_region(region: &str) -> anyhow::Result<()> {
    if region.is_empty() {
        anyhow::bail!("region must not be empty");
    }
    if let Some(bad) = region
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        anyhow::bail!("region {region:?} contains {bad:?} (expected a-z, 0-9 or '-')");
    }
    Ok(())
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "fail" | "error" => Ok(FailOn::Fail),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected fail|warning)"),
    }
}
