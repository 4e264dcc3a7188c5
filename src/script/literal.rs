//! Native script-literal encoder.
//!
//! Produces the same compact text as the generic serializer, except that [`ConfigValue::Token`]
//! and [`ConfigValue::Raw`] leaves are written as bare identifiers. No text rewriting is
//! involved, so plain strings are never unquoted by accident.

use crate::foundation::error::{SliderError, SliderResult};
use crate::options::value::{ConfigMap, ConfigValue};

/// Encode an options map as a script object literal.
pub fn encode(map: &ConfigMap) -> SliderResult<String> {
    let mut out = String::new();
    write_map(&mut out, map)?;
    Ok(out)
}

pub fn encode_value(value: &ConfigValue) -> SliderResult<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Double-quoted, escaped string literal.
pub fn quote(s: &str) -> SliderResult<String> {
    Ok(serde_json::to_string(s)?)
}

fn write_map(out: &mut String, map: &ConfigMap) -> SliderResult<()> {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote(key)?);
        out.push(':');
        write_value(out, value)?;
    }
    out.push('}');
    Ok(())
}

fn write_value(out: &mut String, value: &ConfigValue) -> SliderResult<()> {
    match value {
        ConfigValue::Null => out.push_str("null"),
        ConfigValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ConfigValue::Integer(i) => out.push_str(&i.to_string()),
        ConfigValue::Float(f) => {
            let n = serde_json::Number::from_f64(*f).ok_or_else(|| {
                SliderError::serialization(format!("non-finite number {f} has no literal form"))
            })?;
            out.push_str(&n.to_string());
        }
        ConfigValue::Str(s) => out.push_str(&quote(s)?),
        ConfigValue::Seq(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        ConfigValue::Map(map) => write_map(out, map)?,
        ConfigValue::Token(token) => out.push_str(token.script_name()),
        ConfigValue::Raw(ident) => out.push_str(ident.as_str()),
    }
    Ok(())
}
