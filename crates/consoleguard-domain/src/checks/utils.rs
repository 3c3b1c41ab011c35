use crate::context::RegionContext;
use crate::model::Resource;
use crate::resolve::resolve;

pub fn service_name(resource: &Resource, ctx: &RegionContext) -> Option<String> {
    resource
        .property("ServiceName")
        .and_then(|v| resolve(v, ctx.as_str()))
}

/// Resolved service name when there is one, else the logical id.
pub fn endpoint_label(id: &str, resource: &Resource, ctx: &RegionContext) -> String {
    service_name(resource, ctx).unwrap_or_else(|| id.to_string())
}
