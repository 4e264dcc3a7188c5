use crate::foundation::error::SliderResult;
use crate::options::value::ConfigMap;

/// Encode plugin options as a compact generic structured literal (JSON).
///
/// Keys keep insertion order and reserved tokens come out as quoted strings; unquoting is
/// left to [`crate::script::rewrite::unquote_reserved`]. Fails with
/// [`crate::SliderError::Serialization`] on values JSON cannot carry (non-finite numbers,
/// raw identifiers); no partial text is returned.
pub fn serialize(options: &ConfigMap) -> SliderResult<String> {
    serialize_value(options)
}

/// [`serialize`] for any serde value, e.g. a typed options struct.
pub fn serialize_value<T: serde::Serialize + ?Sized>(value: &T) -> SliderResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
#[path = "../../tests/unit/script/serialize.rs"]
mod tests;
