use crate::captions::{CAPTION_OPTIONS_KEY, CAPTION_TRANSITIONS_PLACEHOLDER};
use crate::foundation::error::SliderResult;
use crate::options::value::{ConfigMap, ConfigValue, RawIdentifier};
use crate::script::literal;
use crate::script::rewrite::{ReservedSet, substitute_placeholder, unquote_reserved};
use crate::script::serialize::serialize;

/// How plugin options become a script literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralStrategy {
    /// Generic serialization, then unquote reserved forms and splice the caption table
    /// reference into the text.
    #[default]
    TextRewrite,
    /// Encode tokens and the table reference as bare identifiers directly.
    Native,
}

/// Captions are on when the top-level caption slider block is present.
pub fn captions_enabled(options: &ConfigMap) -> bool {
    options.contains_key(CAPTION_OPTIONS_KEY)
}

/// Quoted placeholder as it appears in serialized text.
pub fn quoted_placeholder() -> String {
    format!("\"{CAPTION_TRANSITIONS_PLACEHOLDER}\"")
}

/// Turn plugin options into the final script literal.
///
/// `caption_table` names the transition table variable and must be `Some` exactly when
/// captions are enabled; the placeholder is then replaced by that name. A missing
/// placeholder is logged and otherwise ignored.
#[tracing::instrument(skip(options), fields(keys = options.len()))]
pub fn options_literal(
    options: &ConfigMap,
    caption_table: Option<&RawIdentifier>,
    strategy: LiteralStrategy,
) -> SliderResult<String> {
    match strategy {
        LiteralStrategy::TextRewrite => {
            let text = serialize(options)?;
            let text = unquote_reserved(&text, ReservedSet::catalog());
            let Some(table) = caption_table else {
                return Ok(text);
            };
            let out = substitute_placeholder(&text, &quoted_placeholder(), table.as_str());
            if out == text {
                tracing::warn!(
                    table = table.as_str(),
                    "captions enabled but options carry no transition placeholder"
                );
            }
            Ok(out)
        }
        LiteralStrategy::Native => {
            let Some(table) = caption_table else {
                return literal::encode(options);
            };
            let mut options = options.clone();
            let reference = ConfigValue::Raw(table.clone());
            if !options.replace_first_str(CAPTION_TRANSITIONS_PLACEHOLDER, &reference) {
                tracing::warn!(
                    table = table.as_str(),
                    "captions enabled but options carry no transition placeholder"
                );
            }
            literal::encode(&options)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/pipeline.rs"]
mod tests;
