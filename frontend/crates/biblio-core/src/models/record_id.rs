use crate::{CoreError, CoreResult};

/// Pick one id from a document that may carry `_id`, the `id` virtual, or both.
///
/// `_id` wins when both are present and non-empty.
pub(crate) fn resolve_id(
    entity: &'static str,
    underscore: Option<String>,
    id: Option<String>,
) -> CoreResult<String> {
    underscore
        .filter(|value| !value.is_empty())
        .or(id.filter(|value| !value.is_empty()))
        .ok_or_else(|| CoreError::missing_id(entity))
}
