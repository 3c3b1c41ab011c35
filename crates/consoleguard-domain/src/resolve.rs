//! Expression resolution for the small closed set of shapes we support.

use crate::model::{Literal, Value};

/// The pseudo-parameter substituted with the validation region.
pub const REGION_PSEUDO_PARAMETER: &str = "AWS::Region";

/// Reduce `value` to a literal string, or `None` if it cannot be resolved.
///
/// - a string literal resolves to itself
/// - `Fn::Join` resolves when every part does; `{"Ref": "AWS::Region"}` parts
///   become `region`
/// - everything else (other refs, numbers, mappings, unsupported intrinsics)
///   is unresolvable
pub fn resolve(value: &Value, region: &str) -> Option<String> {
    match value {
        Value::Literal(Literal::String(s)) => Some(s.clone()),
        Value::Join { separator, parts } => {
            let resolved = parts
                .iter()
                .map(|part| resolve_part(part, region))
                .collect::<Option<Vec<_>>>()?;
            Some(resolved.join(separator))
        }
        _ => None,
    }
}

fn resolve_part(part: &Value, region: &str) -> Option<String> {
    match part {
        Value::Ref(name) if name == REGION_PSEUDO_PARAMETER => Some(region.to_string()),
        other => resolve(other, region),
    }
}
