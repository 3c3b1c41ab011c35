//! The `validate` use case: resolve settings, decode the template, run the rules.

use anyhow::Context;
use consoleguard_domain::{RegionContext, TemplateError, TemplateModel};
use consoleguard_settings::{ConsoleguardConfigV1, FailOn, Overrides, ResolvedConfig};
use consoleguard_types::{CheckStatus, ValidationResult};

use crate::result::decode_error_result;

/// Input for the validate use case.
#[derive(Clone, Debug)]
pub struct ValidateInput<'a> {
    /// Template document text (JSON).
    pub template_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the validate use case.
#[derive(Debug)]
pub struct ValidateOutput {
    /// The result document. For a template that could not be decoded this is
    /// the error result (`valid: false`, no checks).
    pub result: ValidationResult,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// Set when the template could not be decoded.
    pub template_error: Option<TemplateError>,
}

/// Run the validate use case.
///
/// Config problems are errors; template decode problems are reported through
/// `ValidateOutput::template_error` alongside an error result document.
pub fn run_validate(input: ValidateInput<'_>) -> anyhow::Result<ValidateOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ConsoleguardConfigV1::default()
    } else {
        consoleguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = consoleguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = match TemplateModel::from_json_str(input.template_text) {
        Ok(model) => model,
        Err(err) => {
            tracing::warn!(error = %err, "template could not be decoded");
            return Ok(ValidateOutput {
                result: decode_error_result(&err.to_string()),
                resolved_config: resolved,
                template_error: Some(err),
            });
        }
    };

    let ctx = RegionContext::new(resolved.region.clone());
    let result = consoleguard_domain::validate(&model, &ctx);

    tracing::info!(
        region = %resolved.region,
        resources = model.resources.len(),
        valid = result.valid,
        failed = result.count(CheckStatus::Fail),
        warnings = result.count(CheckStatus::Warning),
        "validation finished"
    );

    Ok(ValidateOutput {
        result,
        resolved_config: resolved,
        template_error: None,
    })
}

/// Map a validate outcome to a process exit code.
///
/// - 0: valid (and, with `fail_on = warning`, no warnings)
/// - 1: invalid
/// - 2: the template could not be decoded
pub fn exit_code(output: &ValidateOutput) -> i32 {
    if output.template_error.is_some() {
        return 2;
    }
    let result = &output.result;
    let tripped = match output.resolved_config.fail_on {
        FailOn::Fail => !result.valid,
        FailOn::Warning => !result.valid || result.count(CheckStatus::Warning) > 0,
    };
    if tripped { 1 } else { 0 }
}
