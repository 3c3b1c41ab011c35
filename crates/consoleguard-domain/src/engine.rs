use crate::checks;
use crate::context::RegionContext;
use crate::model::TemplateModel;
use crate::report::aggregate;
use consoleguard_types::ValidationResult;

/// Run every rule in order over `model` and aggregate the records.
///
/// The model is only read; identical input gives an identical result.
pub fn validate(model: &TemplateModel, ctx: &RegionContext) -> ValidationResult {
    let checks = checks::run_all(model, ctx);
    let result = aggregate(checks);

    tracing::debug!(
        region = ctx.as_str(),
        resources = model.resources.len(),
        records = result.checks.len(),
        valid = result.valid,
        "template validated"
    );

    result
}
