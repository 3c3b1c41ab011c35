use crate::context::RegionContext;
use crate::model::{TYPE_INSTANCE, TemplateModel};
use consoleguard_types::{Check, CheckStatus};

pub fn run(model: &TemplateModel, _ctx: &RegionContext) -> Vec<Check> {
    let instance = model.of_type(TYPE_INSTANCE).next();

    let mut out = vec![Check::outcome(
        "EC2 Instance",
        instance.is_some(),
        CheckStatus::Warning,
        "EC2 instance found",
        "No EC2 instance found (optional)",
    )];

    if let Some((_, instance)) = instance {
        out.push(Check::outcome(
            "EC2 IAM Role",
            instance.has_truthy("IamInstanceProfile"),
            CheckStatus::Warning,
            "EC2 instance has IAM instance profile",
            "EC2 instance missing IAM instance profile",
        ));
    }

    out
}
