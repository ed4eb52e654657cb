//! Directive resolution and the value precedence policy

use crate::env::Environment;
use crate::error::BindError;

/// The three per-field directives declared with `#[env(...)]`.
///
/// `None` means the directive was not declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directives {
    /// Name of the environment variable to read (`var = "NAME"`)
    pub var: Option<&'static str>,
    /// Whether an empty or absent variable is an error (`required`)
    pub required: bool,
    /// Literal used when the variable is empty or absent (`default = "..."`)
    pub default: Option<&'static str>,
}

/// Outcome of the precedence policy for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Non-empty value found in the environment
    Environment(String),
    /// Non-empty default literal
    Default(&'static str),
    /// Nothing to bind; the field keeps its current value
    Skip,
}

/// Pick the bind candidate for `var`.
///
/// Order: live value, then `required`, then `default`, then skip. A required
/// field never falls back to its default.
pub(crate) fn resolve(
    var: &str,
    directives: &Directives,
    env: &dyn Environment,
) -> Result<Resolution, BindError> {
    if let Some(value) = env.lookup(var).filter(|value| !value.is_empty()) {
        return Ok(Resolution::Environment(value));
    }

    if directives.required {
        return Err(BindError::RequiredValueMissing {
            name: var.to_string(),
        });
    }

    match directives.default {
        Some(default) if !default.is_empty() => Ok(Resolution::Default(default)),
        _ => Ok(Resolution::Skip),
    }
}
