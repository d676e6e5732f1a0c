//! Path template resolution.
//!
//! Resource paths are templates with `{variable}` placeholders, e.g.
//! `/articles/{id}/comments/{comment_id}`. Resolution substitutes each
//! declared variable before any request is made, so an unresolvable
//! placeholder fails locally without touching the network.

use std::collections::HashMap;

use crate::rest::errors::ApiError;

/// Resolves a path template by substituting each declared variable.
///
/// Each variable is looked up first through `lookup` (typically the
/// instance's own fields), then taken from `params`. Parameters consumed
/// for path substitution are removed from `params`; whatever remains is
/// the caller's to forward as query or body parameters.
///
/// # Errors
///
/// Returns [`ApiError::MissingPathVariable`] if a declared variable is
/// found in neither source.
pub fn resolve_path(
    resource: &'static str,
    template: &str,
    variables: &'static [&'static str],
    lookup: impl Fn(&str) -> Option<String>,
    params: &mut HashMap<String, String>,
) -> Result<String, ApiError> {
    let mut path = template.to_string();

    for &variable in variables {
        let value = lookup(variable)
            .or_else(|| params.remove(variable))
            .ok_or(ApiError::MissingPathVariable { resource, variable })?;
        path = path.replace(&format!("{{{variable}}}"), &value);
    }

    Ok(path)
}
