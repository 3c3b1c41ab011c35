use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for the validation result document.
pub const SCHEMA_RESULT_V1: &str = "consoleguard.result.v1";

/// Status is intentionally small: only `Fail` affects validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
        }
    }
}

/// One diagnostic record emitted by a rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Check {
    pub fn new(name: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Pick `Pass` when `ok`, otherwise `otherwise` (Fail or Warning).
    pub fn outcome(
        name: impl Into<String>,
        ok: bool,
        otherwise: CheckStatus,
        pass_message: impl Into<String>,
        other_message: impl Into<String>,
    ) -> Self {
        if ok {
            Self::new(name, CheckStatus::Pass, pass_message)
        } else {
            Self::new(name, otherwise, other_message)
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

/// The validation result handed back to callers.
///
/// `valid` is derived from `checks` by the aggregator; it is serialized so
/// consumers do not need to recompute it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    pub checks: Vec<Check>,
    pub summary: String,
}

impl ValidationResult {
    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}
